//! CSS number values.

use super::analyze_single_word;
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, Parse, ToCss};
use cssparser::*;

/// A CSS [`<number>`](https://www.w3.org/TR/css-values-4/#numbers) value.
pub type CSSNumber = f32;

impl Parse for CSSNumber {
  fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let number = input.expect_number()?;
    if !is_representable(number) {
      return Err(location.new_custom_error(()));
    }
    Ok(number)
  }
}

/// Returns whether a parsed number is finite and below the largest float, so it can be
/// written back out as the same value.
pub(crate) fn is_representable(value: f32) -> bool {
  value.is_finite() && value.abs() < f32::MAX
}

/// Writes `exact` followed by `unit`, using the shortest digits that `round_trips` accepts.
///
/// The tokenizer does not round decimals exactly, so the shortest `f32` digits are checked
/// against it and the full `f64` digits are written when they do not survive.
pub(crate) fn serialize_number<W, F>(exact: f64, unit: &str, round_trips: F, dest: &mut Printer<W>) -> Result<(), PrinterError>
where
  W: std::fmt::Write,
  F: Fn(&str) -> bool,
{
  let short = format!("{}{}", trim_leading_zero((exact as f32).to_string()), unit);
  if round_trips(&short) {
    return dest.write_str(&short);
  }

  dest.write_str(&trim_leading_zero(exact.to_string()))?;
  dest.write_str(unit)
}

fn trim_leading_zero(digits: String) -> String {
  if let Some(rest) = digits.strip_prefix("0.") {
    format!(".{}", rest)
  } else if let Some(rest) = digits.strip_prefix("-0.") {
    format!("-.{}", rest)
  } else {
    digits
  }
}

impl ToCss for CSSNumber {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let number = *self;
    if !number.is_finite() {
      return dest.write_str("0");
    }
    serialize_number(number as f64, "", |css| CSSNumber::from_word(css) == Some(number), dest)
  }
}

impl Fruit for CSSNumber {
  const KIND: FruitKind = FruitKind::Number;
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
