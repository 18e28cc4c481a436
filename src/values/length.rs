//! CSS length values.

use super::analyze_single_word;
use super::number::{is_representable, serialize_number, CSSNumber};
use super::percentage::Percentage;
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, Parse, ToCss};
use cssparser::*;

macro_rules! define_length_units {
  (
    $(
      $(#[$meta: meta])*
      $name: ident = $unit: literal,
    )+
  ) => {
    /// A CSS [`<length>`](https://www.w3.org/TR/css-values-4/#lengths) value.
    #[derive(Debug, Clone, Copy, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(tag = "unit", content = "value", rename_all = "kebab-case"))]
    pub enum LengthValue {
      $(
        $(#[$meta])*
        $name(CSSNumber),
      )+
    }

    impl Parse for LengthValue {
      fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i, ()>> {
        let location = input.current_source_location();
        let token = input.next()?;
        match *token {
          Token::Dimension { value, .. } if !is_representable(value) => {
            return Err(location.new_custom_error(()))
          }
          Token::Dimension { value, ref unit, .. } => {
            Ok(match unit {
              $(
                s if s.eq_ignore_ascii_case($unit) => LengthValue::$name(value),
              )+
              _ => return Err(location.new_unexpected_token_error(token.clone())),
            })
          },
          // Zero is the only length that may omit its unit.
          Token::Number { value, .. } if value == 0.0 => Ok(LengthValue::Px(0.0)),
          ref token => return Err(location.new_unexpected_token_error(token.clone())),
        }
      }
    }

    impl LengthValue {
      /// Returns the numeric value and unit string for the length value.
      pub fn to_unit_value(&self) -> (CSSNumber, &'static str) {
        match self {
          $(
            LengthValue::$name(value) => (*value, $unit),
          )+
        }
      }
    }
  };
}

define_length_units! {
  // https://www.w3.org/TR/css-values-4/#absolute-lengths
  /// A length in pixels.
  Px = "px",
  /// A length in inches. 1in = 96px.
  In = "in",
  /// A length in centimeters. 1cm = 96px / 2.54.
  Cm = "cm",
  /// A length in millimeters. 1mm = 1/10th of 1cm.
  Mm = "mm",
  /// A length in quarter-millimeters. 1Q = 1/40th of 1cm.
  Q = "q",
  /// A length in points. 1pt = 1/72nd of 1in.
  Pt = "pt",
  /// A length in picas. 1pc = 1/6th of 1in.
  Pc = "pc",

  // https://www.w3.org/TR/css-values-4/#font-relative-lengths
  /// A length in the `em` unit. An `em` is equal to the computed value of the
  /// font-size property of the element on which it is used.
  Em = "em",
  /// A length in the `rem` unit. A `rem` is equal to the computed value of the
  /// `em` unit on the root element.
  Rem = "rem",
  /// A length in `ex` unit. An `ex` is equal to the x-height of the font.
  Ex = "ex",
  /// A length in the `ch` unit. A `ch` is equal to the width of the zero ("0") character in the current font.
  Ch = "ch",
  /// A length in the `lh` unit. An `lh` is equal to the computed value of the line-height property.
  Lh = "lh",

  // https://www.w3.org/TR/css-values-4/#viewport-relative-lengths
  /// A length in the `vw` unit. A `vw` is equal to 1% of the viewport width.
  Vw = "vw",
  /// A length in the `vh` unit. A `vh` is equal to 1% of the viewport height.
  Vh = "vh",
  /// A length in the `vmin` unit. A `vmin` is equal to the smaller of `vw` and `vh`.
  Vmin = "vmin",
  /// A length in the `vmax` unit. A `vmax` is equal to the larger of `vw` and `vh`.
  Vmax = "vmax",
}

impl Default for LengthValue {
  fn default() -> LengthValue {
    LengthValue::Px(0.0)
  }
}

impl ToCss for LengthValue {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let (value, unit) = self.to_unit_value();

    // The unit can be omitted if the value is zero.
    if value == 0.0 {
      return dest.write_char('0');
    }

    serialize_dimension(value, unit, dest)
  }
}

fn serialize_dimension<W>(value: f32, unit: &'static str, dest: &mut Printer<W>) -> Result<(), PrinterError>
where
  W: std::fmt::Write,
{
  let round_trips = |css: &str| LengthValue::from_word(css).map(|length| length.to_unit_value()) == Some((value, unit));
  serialize_number(value as f64, unit, round_trips, dest)
}

impl LengthValue {
  /// Returns whether the value is negative.
  pub fn is_negative(&self) -> bool {
    self.to_unit_value().0 < 0.0
  }
}

impl Fruit for LengthValue {
  const KIND: FruitKind = FruitKind::Length;
  const DEEP_LEVEL: ParseDeepLevel = ParseDeepLevel::DataTypes;
  type State = CountState;

  fn analyze_in_loop(
    &mut self,
    state: &mut CountState,
    token: &ValueToken,
    _stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    Ok(analyze_single_word(self, state, token))
  }
}

/// A CSS [`<length-percentage>`](https://www.w3.org/TR/css-values-4/#typedef-length-percentage) value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum LengthPercentage {
  /// An explicit length value.
  Dimension(LengthValue),
  /// A percentage.
  Percentage(Percentage),
}

impl LengthPercentage {
  /// Returns a zero length.
  pub fn zero() -> LengthPercentage {
    LengthPercentage::Dimension(LengthValue::Px(0.0))
  }

  /// Returns a zero percentage.
  pub fn zero_percent() -> LengthPercentage {
    LengthPercentage::Percentage(Percentage(0.0))
  }

  /// Returns whether the value is negative.
  pub fn is_negative(&self) -> bool {
    match self {
      LengthPercentage::Dimension(length) => length.is_negative(),
      LengthPercentage::Percentage(percentage) => percentage.0 < 0.0,
    }
  }
}

impl Parse for LengthPercentage {
  fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i, ()>> {
    if let Ok(percentage) = input.try_parse(Percentage::parse) {
      return Ok(LengthPercentage::Percentage(percentage));
    }

    let length = LengthValue::parse(input)?;
    Ok(LengthPercentage::Dimension(length))
  }
}

impl ToCss for LengthPercentage {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    match self {
      LengthPercentage::Dimension(length) => length.to_css(dest),
      LengthPercentage::Percentage(percentage) => percentage.to_css(dest),
    }
  }
}

/// Either a [`<length-percentage>`](https://www.w3.org/TR/css-values-4/#typedef-length-percentage), or the `auto` keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum LengthPercentageOrAuto {
  /// The `auto` keyword.
  Auto,
  /// A [`<length-percentage>`](https://www.w3.org/TR/css-values-4/#typedef-length-percentage).
  LengthPercentage(LengthPercentage),
}

impl Default for LengthPercentageOrAuto {
  fn default() -> LengthPercentageOrAuto {
    LengthPercentageOrAuto::Auto
  }
}

impl ToCss for LengthPercentageOrAuto {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    match self {
      LengthPercentageOrAuto::Auto => dest.write_str("auto"),
      LengthPercentageOrAuto::LengthPercentage(value) => value.to_css(dest),
    }
  }
}
