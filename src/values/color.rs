//! CSS color values.

use super::number::CSSNumber;
use super::percentage::Percentage;
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, TokenKind, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, Parse, ToCss};
use std::fmt::Write;

/// A CSS [`<color>`](https://www.w3.org/TR/css-color-4/#color-type) value in the sRGB color space.
///
/// Hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and the `rgb()` and `rgba()`
/// functions are recognized. Named colors are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CssColor {
  /// The red channel.
  pub red: u8,
  /// The green channel.
  pub green: u8,
  /// The blue channel.
  pub blue: u8,
  /// The alpha channel, where 255 is fully opaque.
  pub alpha: u8,
}

impl Default for CssColor {
  fn default() -> CssColor {
    CssColor::new(0, 0, 0, 255)
  }
}

impl CssColor {
  /// Creates a color from its channels.
  pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> CssColor {
    CssColor {
      red,
      green,
      blue,
      alpha,
    }
  }

  /// Returns the alpha channel as a number between 0 and 1.
  pub fn alpha_f32(&self) -> f32 {
    self.alpha as f32 / 255.0
  }

  /// Parses a hex color, including the leading `#`.
  pub fn from_hex(value: &str) -> Result<CssColor, FruitError> {
    let malformed = || FruitError::MalformedColor(value.to_owned());
    let digits = value.strip_prefix('#').ok_or_else(malformed)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(malformed());
    }

    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| malformed());
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
    Ok(match digits.len() {
      3 => CssColor::new(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, 255),
      4 => CssColor::new(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, nibble(3)? * 17),
      6 => CssColor::new(byte(0)?, byte(2)?, byte(4)?, 255),
      8 => CssColor::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?),
      _ => return Err(malformed()),
    })
  }

  /// Returns the color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
  pub fn to_hex(&self) -> String {
    let mut hex = format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
    if self.alpha != 255 {
      let _ = write!(hex, "{:02x}", self.alpha);
    }
    hex
  }

  /// Returns the color as `rgb(r, g, b)`, ignoring alpha.
  pub fn to_rgb(&self) -> String {
    format!("rgb({}, {}, {})", self.red, self.green, self.blue)
  }

  /// Returns the color as `rgba(r, g, b, a)`.
  pub fn to_rgba(&self) -> String {
    format!(
      "rgba({}, {}, {}, {})",
      self.red,
      self.green,
      self.blue,
      serialize_alpha(self.alpha)
    )
  }

  fn from_function(token: &ValueToken) -> Result<CssColor, FruitError> {
    let malformed = || FruitError::MalformedColor(format!("{}()", token.text));
    let args: Vec<&ValueToken> = token.arguments().collect();

    // Legacy syntax separates every channel with a comma, modern syntax separates
    // channels with spaces and the alpha with a slash.
    let (channels, alpha) = match args.as_slice() {
      [r, c1, g, c2, b] if is_comma(c1) && is_comma(c2) => ([*r, *g, *b], None),
      [r, c1, g, c2, b, c3, a] if is_comma(c1) && is_comma(c2) && is_comma(c3) => ([*r, *g, *b], Some(*a)),
      [r, g, b] => ([*r, *g, *b], None),
      [r, g, b, slash, a] if slash.is_div("/") => ([*r, *g, *b], Some(*a)),
      _ => return Err(malformed()),
    };

    let mut rgb = [0u8; 3];
    for (channel, arg) in rgb.iter_mut().zip(channels) {
      *channel = parse_channel(arg).ok_or_else(malformed)?;
    }
    let alpha = match alpha {
      Some(arg) => parse_alpha(arg).ok_or_else(malformed)?,
      None => 255,
    };

    Ok(CssColor::new(rgb[0], rgb[1], rgb[2], alpha))
  }
}

fn is_comma(token: &ValueToken) -> bool {
  token.is_div(",")
}

fn parse_channel(token: &ValueToken) -> Option<u8> {
  if token.kind != TokenKind::Word {
    return None;
  }

  let value = if let Some(percentage) = Percentage::from_word(&token.text) {
    percentage.0 * 255.0
  } else {
    CSSNumber::from_word(&token.text)?
  };

  Some(clamp_channel(value, 255.0, &token.text))
}

fn parse_alpha(token: &ValueToken) -> Option<u8> {
  if token.kind != TokenKind::Word {
    return None;
  }

  let value = if let Some(percentage) = Percentage::from_word(&token.text) {
    percentage.0
  } else {
    CSSNumber::from_word(&token.text)?
  };

  Some(clamp_channel(value * 255.0, 255.0, &token.text))
}

fn clamp_channel(value: f32, max: f32, source: &str) -> u8 {
  if !(0.0..=max).contains(&value) {
    log::warn!("color channel '{}' is out of range and was clamped", source);
  }
  value.max(0.0).min(max).round() as u8
}

/// Writes the alpha channel with the fewest decimals that still round-trip to the same byte.
fn serialize_alpha(alpha: u8) -> String {
  let value = alpha as f32 / 255.0;
  let mut rounded = (value * 100.0).round() / 100.0;
  if (rounded * 255.0).round() as u8 != alpha {
    rounded = (value * 1000.0).round() / 1000.0;
  }
  rounded.to_css_string(Default::default()).unwrap_or_else(|_| rounded.to_string())
}

impl ToCss for CssColor {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    if self.alpha != 255 {
      dest.write_str("rgba(")?;
      write!(dest, "{}", self.red)?;
      dest.delim(',', false)?;
      write!(dest, "{}", self.green)?;
      dest.delim(',', false)?;
      write!(dest, "{}", self.blue)?;
      dest.delim(',', false)?;
      dest.write_str(&serialize_alpha(self.alpha))?;
      return dest.write_char(')');
    }

    let hex = self.to_hex();
    let b = hex.as_bytes();
    // #rrggbb can be shortened to #rgb when every channel repeats its digit.
    if b[1] == b[2] && b[3] == b[4] && b[5] == b[6] {
      dest.write_char('#')?;
      for i in [1, 3, 5] {
        dest.write_char(b[i] as char)?;
      }
      Ok(())
    } else {
      dest.write_str(&hex)
    }
  }
}

impl Fruit for CssColor {
  const KIND: FruitKind = FruitKind::Color;
  const DEEP_LEVEL: ParseDeepLevel = ParseDeepLevel::DataTypes;
  type State = CountState;

  fn analyze_in_loop(
    &mut self,
    state: &mut CountState,
    token: &ValueToken,
    _stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    if token.is_skippable() {
      return Ok(LoopControl::Next);
    }

    if state.count > 0 {
      return Ok(LoopControl::Break);
    }

    let color = if token.kind == TokenKind::Word && token.text.starts_with('#') {
      CssColor::from_hex(&token.text).map_err(Error::new)?
    } else if token.is_function("rgb") || token.is_function("rgba") {
      if token.unclosed {
        return Err(Error::new(FruitError::UnclosedFunction(token.text.clone())));
      }
      CssColor::from_function(token).map_err(Error::new)?
    } else {
      return Ok(LoopControl::Break);
    };

    *self = color;
    state.count += 1;
    state.valid = true;
    Ok(LoopControl::Next)
  }
}
