//! CSS image values.

use super::url::Url;
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, ToCss};

/// A CSS [`<image>`](https://www.w3.org/TR/css-images-3/#image-values) value.
///
/// Only `url()` images are supported.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum Image {
  /// The `none` keyword.
  #[default]
  None,
  /// A `url()`.
  Url(Url),
}

impl ToCss for Image {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    match self {
      Image::None => dest.write_str("none"),
      Image::Url(url) => url.to_css(dest),
    }
  }
}

impl Fruit for Image {
  const KIND: FruitKind = FruitKind::Image;
  const DEEP_LEVEL: ParseDeepLevel = ParseDeepLevel::DataTypes;
  type State = CountState;

  fn analyze_in_loop(
    &mut self,
    state: &mut CountState,
    token: &ValueToken,
    stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    if token.is_skippable() {
      return Ok(LoopControl::Next);
    }

    if token.is_function("url") {
      if state.count > 0 {
        return Err(Error::new(FruitError::ExcessiveValue(token.text.clone())));
      }

      let mut url = Url::default();
      if !url.analyze(stem)? {
        return Err(Error::new(FruitError::InvalidComponent {
          fruit: FruitKind::Url,
          value: token.text.clone(),
        }));
      }

      *self = Image::Url(url);
      state.count += 1;
      state.valid = true;
      // The url analyzer has moved the cursor past the function.
      return Ok(LoopControl::Stay);
    }

    if token.is_keyword("none") && state.count == 0 {
      *self = Image::None;
      state.count += 1;
      state.valid = true;
      return Ok(LoopControl::Next);
    }

    Ok(LoopControl::Break)
  }
}
