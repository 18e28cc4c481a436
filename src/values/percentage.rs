//! CSS percentage values.

use super::analyze_single_word;
use super::number::{is_representable, serialize_number};
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, Parse, ToCss};
use cssparser::*;

/// A CSS [`<percentage>`](https://www.w3.org/TR/css-values-4/#percentages) value.
///
/// The value is stored as a fraction, so `50%` is `Percentage(0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentage(pub f32);

impl Parse for Percentage {
  fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let percent = input.expect_percentage()?;
    if !is_representable(percent * 100.0) {
      return Err(location.new_custom_error(()));
    }
    Ok(Percentage(percent))
  }
}

impl ToCss for Percentage {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let percent = *self;
    serialize_number(
      percent.0 as f64 * 100.0,
      "%",
      |css| Percentage::from_word(css) == Some(percent),
      dest,
    )
  }
}

impl Fruit for Percentage {
  const KIND: FruitKind = FruitKind::Percentage;
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
