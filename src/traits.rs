//! Traits for parsing, analyzing and serializing values.

use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitKind, FruitOptions, ParseDeepLevel};
use crate::printer::{Printer, PrinterOptions};
use crate::stem::{Stem, ValueToken};
use cssparser::{ParseError, Parser, ParserInput};

/// Trait for primitive values that occupy a single word, e.g. `<length>`.
pub trait Parse: Sized {
  /// Parse a value of this type.
  ///
  /// Returns an error on failure.
  fn parse<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Self, ParseError<'i, ()>>;

  /// Parses the text of a word token. Returns `None` when the word is not a
  /// value of this type, which is an ordinary outcome rather than an error.
  fn from_word(word: &str) -> Option<Self> {
    let mut input = ParserInput::new(word);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(Self::parse).ok()
  }
}

/// Trait for things the can serialize themselves in CSS syntax.
pub trait ToCss {
  /// Serialize `self` in CSS syntax, writing to `dest`.
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write;

  /// Serialize `self` in CSS syntax and return a string.
  ///
  /// (This is a convenience wrapper for `to_css` and probably should not be overridden.)
  #[inline]
  fn to_css_string(&self, options: PrinterOptions) -> Result<String, PrinterError> {
    let mut s = String::new();
    let mut printer = Printer::new(&mut s, options);
    self.to_css(&mut printer)?;
    Ok(s)
  }
}

impl<'a, T> ToCss for &'a T
where
  T: ToCss + ?Sized,
{
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    (*self).to_css(dest)
  }
}

/// What the analyzer loop does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
  /// Consume the current token and continue.
  Next,
  /// Examine the current token again. Used after a nested analyzer moved the cursor.
  Stay,
  /// Stop. The current token is outside of this grammar and is left to the caller.
  Break,
}

/// Working state that knows whether the tokens seen so far form a valid value.
pub trait Validity {
  /// Returns whether the value analyzed so far is valid.
  fn is_valid(&self) -> bool;
}

/// The working state of analyzers that only need to count their components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountState {
  /// The number of components consumed.
  pub count: u8,
  /// Whether the components consumed so far form a valid value.
  pub valid: bool,
}

impl Validity for CountState {
  #[inline]
  fn is_valid(&self) -> bool {
    self.valid
  }
}

/// A successfully analyzed value, either as a structure or collapsed to its canonical string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Outcome<T> {
  /// The structured value.
  Structured(T),
  /// The canonical CSS serialization of the value.
  Canonical(String),
}

impl<T> Outcome<T> {
  /// Returns the structured value, if any.
  pub fn structured(self) -> Option<T> {
    match self {
      Outcome::Structured(value) => Some(value),
      Outcome::Canonical(_) => None,
    }
  }

  /// Returns the canonical string, if the value was collapsed to one.
  pub fn canonical(&self) -> Option<&str> {
    match self {
      Outcome::Structured(_) => None,
      Outcome::Canonical(css) => Some(css),
    }
  }

  /// Maps the structured value.
  pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
    match self {
      Outcome::Structured(value) => Outcome::Structured(f(value)),
      Outcome::Canonical(css) => Outcome::Canonical(css),
    }
  }
}

/// A value that analyzes itself from a token stream, one token at a time.
///
/// Implementors provide the step function [analyze_in_loop](Fruit::analyze_in_loop).
/// The provided methods drive it over a [Stem](Stem), decide validity, and apply
/// [FruitOptions](FruitOptions) to the result.
pub trait Fruit: ToCss + Default + Sized {
  /// The value type.
  const KIND: FruitKind;
  /// The minimum [ParseDeepLevel](ParseDeepLevel) at which the value is returned as a structure.
  const DEEP_LEVEL: ParseDeepLevel = ParseDeepLevel::VirtualLonghand;

  /// The working state of one analysis pass.
  type State: Default + Validity;

  /// Examines one token, updating `self` and `state`.
  ///
  /// Nested analyzers may be run on `stem` directly, in which case the step returns
  /// [LoopControl::Stay](LoopControl::Stay) so the token the cursor landed on is examined next.
  fn analyze_in_loop(
    &mut self,
    state: &mut Self::State,
    token: &ValueToken,
    stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>>;

  /// Called once after the loop ends, whether the stream ran out or the step stopped.
  fn finish(&mut self, _state: &mut Self::State) {}

  /// Runs one analysis pass starting at the current token of `stem`, and returns whether
  /// the consumed tokens form a valid value. Tokens after the point where the analyzer
  /// stopped are left on the stream.
  fn analyze(&mut self, stem: &mut Stem) -> Result<bool, Error<FruitError>> {
    *self = Self::default();
    let mut state = Self::State::default();
    let nodes = stem.nodes();
    let mut stayed_at = None;

    while let Some(token) = nodes.get(stem.position()) {
      let control = self.analyze_in_loop(&mut state, token, stem).map_err(|mut err| {
        err.fruit.get_or_insert(Self::KIND);
        err.at(token.source_offset)
      })?;

      match control {
        LoopControl::Next => {
          stem.advance();
          stayed_at = None;
        }
        LoopControl::Stay => {
          if stayed_at == Some(stem.position()) {
            return Err(Error {
              kind: FruitError::StalledAnalysis,
              fruit: Some(Self::KIND),
              loc: None,
            }
            .at(token.source_offset));
          }
          stayed_at = Some(stem.position());
        }
        LoopControl::Break => {
          log::trace!("<{}> stopped at '{}'", Self::KIND, token.text);
          break;
        }
      }
    }

    self.finish(&mut state);
    Ok(state.is_valid())
  }

  /// Analyzes a complete value. The whole value must be consumed, and must be valid.
  fn parse_string(value: &str) -> Result<Self, Error<FruitError>> {
    let value = value.trim();
    let mut stem = Stem::new(value);
    let mut fruit = Self::default();
    let valid = fruit.analyze(&mut stem)?;

    let error = |kind| Error {
      kind,
      fruit: Some(Self::KIND),
      loc: None,
    };

    if let Some(token) = stem.remaining().iter().find(|token| !token.is_skippable()) {
      return Err(error(FruitError::UnconsumedTokens(value.to_owned())).at(token.source_offset));
    }

    if !valid {
      return Err(if value.is_empty() {
        error(FruitError::EmptyValue)
      } else {
        error(FruitError::IncompleteValue(value.to_owned())).at(value.len())
      });
    }

    Ok(fruit)
  }

  /// Analyzes a complete value and applies `options` to the result.
  ///
  /// Returns `Ok(None)` for invalid values, unless `options.throw_errors` is set,
  /// in which case the syntax violation is returned.
  fn parse_with(value: &str, options: &FruitOptions) -> Result<Option<Outcome<Self>>, Error<FruitError>> {
    match Self::parse_string(value) {
      Ok(fruit) => Ok(fruit.into_outcome(options)),
      Err(err) if options.throw_errors => Err(err),
      Err(err) => {
        log::debug!("ignoring invalid <{}> '{}': {}", Self::KIND, value, err);
        Ok(None)
      }
    }
  }

  /// Returns whether the value is a valid value of this type.
  fn validate(value: &str) -> bool {
    Self::parse_string(value).is_ok()
  }

  /// Returns the value as a structure or as its canonical string, depending on `options`.
  fn into_outcome(self, options: &FruitOptions) -> Option<Outcome<Self>> {
    if options.wants_structure(Self::KIND, Self::DEEP_LEVEL) {
      return Some(Outcome::Structured(self));
    }

    match self.to_css_string(PrinterOptions::default()) {
      Ok(css) => Some(Outcome::Canonical(css)),
      Err(err) => {
        log::error!("failed to serialize <{}>: {}", Self::KIND, err);
        None
      }
    }
  }
}
