//! CSS url() values.

use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, TokenKind, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, ToCss};
use cssparser::serialize_string;

/// A CSS [url()](https://www.w3.org/TR/css-values-4/#urls) value and its source offset.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Url {
  /// The url string.
  pub url: String,
  /// The byte offset where the `url()` was seen in the value.
  pub offset: usize,
}

impl PartialEq for Url {
  fn eq(&self, other: &Self) -> bool {
    self.url == other.url
  }
}

impl Url {
  /// Creates a url value.
  pub fn new<S: Into<String>>(url: S) -> Url {
    Url {
      url: url.into(),
      offset: 0,
    }
  }
}

impl ToCss for Url {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    dest.write_str("url(")?;
    serialize_string(&self.url, dest)?;
    dest.write_char(')')
  }
}

impl Fruit for Url {
  const KIND: FruitKind = FruitKind::Url;
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

    if state.count > 0 || !token.is_function("url") {
      return Ok(LoopControl::Break);
    }

    if token.unclosed {
      return Err(Error::new(FruitError::UnclosedFunction(token.text.clone())));
    }

    let args: Vec<&ValueToken> = token.arguments().collect();
    match args.as_slice() {
      [arg] if matches!(arg.kind, TokenKind::Word | TokenKind::String) => {
        self.url = arg.text.clone();
        self.offset = token.source_offset;
      }
      _ => {
        return Err(Error::new(FruitError::InvalidComponent {
          fruit: FruitKind::Url,
          value: format!("{}()", token.text),
        }))
      }
    }

    state.count += 1;
    state.valid = true;
    Ok(LoopControl::Next)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::printer::PrinterOptions;

  #[test]
  fn test_url() {
    assert_eq!(Url::parse_string("url(a.png)").unwrap(), Url::new("a.png"));
    assert_eq!(Url::parse_string("url( \"img/b c.png\" )").unwrap(), Url::new("img/b c.png"));
    assert_eq!(Url::parse_string("URL('x.svg')").unwrap().url, "x.svg");
    assert_eq!(Url::parse_string("  url(a.png)").unwrap().offset, 0);

    assert_eq!(
      Url::parse_string("url(\"a.png\"").unwrap_err().kind,
      FruitError::UnclosedFunction("url".into())
    );
    assert!(matches!(
      Url::parse_string("url(\"a\" \"b\")").unwrap_err().kind,
      FruitError::InvalidComponent { fruit: FruitKind::Url, .. }
    ));
    assert!(Url::parse_string("a.png").is_err());
    assert!(Url::parse_string("url(a.png) url(b.png)").is_err());

    let css = Url::new("say \"hi\".png").to_css_string(PrinterOptions::default()).unwrap();
    assert_eq!(css, "url(\"say \\\"hi\\\".png\")");
  }
}
