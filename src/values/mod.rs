//! Common [CSS values](https://www.w3.org/TR/css3-values/) used across properties.
//!
//! Data types such as [LengthValue](length::LengthValue) and [CssColor](color::CssColor)
//! are analyzers in their own right, and are also nested inside the property analyzers.

use crate::stem::{TokenKind, ValueToken};
use crate::traits::{CountState, LoopControl, Parse};

pub mod color;
pub mod image;
pub mod length;
pub mod number;
pub mod percentage;
pub mod position;
pub mod url;

/// Step function shared by the data types that occupy a single word.
///
/// Consumes one matching word, along with any spaces and comments around it,
/// and stops on anything else.
pub(crate) fn analyze_single_word<T: Parse>(value: &mut T, state: &mut CountState, token: &ValueToken) -> LoopControl {
  if token.is_skippable() {
    return LoopControl::Next;
  }

  if state.count > 0 || token.kind != TokenKind::Word {
    return LoopControl::Break;
  }

  match T::from_word(&token.text) {
    Some(parsed) => {
      *value = parsed;
      state.count += 1;
      state.valid = true;
      LoopControl::Next
    }
    None => LoopControl::Break,
  }
}
