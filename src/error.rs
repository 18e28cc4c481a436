//! Error types.

use crate::parser::FruitKind;
use std::fmt;

/// An error with the value type being analyzed and a source location.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error<T> {
  /// The type of error that occurred.
  pub kind: T,
  /// The value type that was being analyzed when the error occurred.
  pub fruit: Option<FruitKind>,
  /// The location where the error occurred.
  pub loc: Option<ErrorLocation>,
}

impl<T> Error<T> {
  /// Creates an error without any context. The analyzer driver fills in the
  /// value type when the error passes through it.
  pub fn new(kind: T) -> Self {
    Error {
      kind,
      fruit: None,
      loc: None,
    }
  }

  /// Attaches a source offset, keeping any offset that is already present.
  pub fn at(mut self, offset: usize) -> Self {
    self.loc.get_or_insert(ErrorLocation { offset });
    self
  }
}

impl<T: fmt::Display> fmt::Display for Error<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.kind.fmt(f)?;
    if let Some(fruit) = &self.fruit {
      write!(f, " when analyzing <{}>", fruit)?;
    }
    if let Some(loc) = &self.loc {
      write!(f, " at {}", loc)?;
    }
    Ok(())
  }
}

impl<T: fmt::Display + fmt::Debug> std::error::Error for Error<T> {}

/// A byte offset within the analyzed value.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorLocation {
  /// The byte offset of the offending token, relative to the trimmed value.
  pub offset: usize,
}

impl fmt::Display for ErrorLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "offset {}", self.offset)
  }
}

/// A syntax violation found while analyzing a value.
///
/// Tokens that simply do not belong to a grammar are not errors: analyzers
/// stop on them and leave them to the caller.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum FruitError {
  /// A keyword claimed an axis or slot that an earlier keyword already claimed.
  DuplicateKeyword(String),
  /// A keyword appeared after the grammar had no room left for one.
  ExcessiveKeyword(String),
  /// A value appeared after the grammar had no room left for one.
  ExcessiveValue(String),
  /// A function token was not closed before the end of input.
  UnclosedFunction(String),
  /// A nested component could not be analyzed.
  InvalidComponent {
    /// The component type.
    fruit: FruitKind,
    /// The source text of the offending token.
    value: String,
  },
  /// A hex color or color function was malformed.
  MalformedColor(String),
  /// A negative value where only non-negative values are allowed.
  NegativeValue(String),
  /// A background color outside of the final background layer.
  MisplacedColor,
  /// A background layer without any components.
  EmptyLayer,
  /// A delimiter in a position where the grammar does not allow one.
  UnexpectedDelimiter(String),
  /// Tokens were left over after the analyzer stopped.
  UnconsumedTokens(String),
  /// The value ended before the grammar reached a complete interpretation.
  IncompleteValue(String),
  /// The value was empty.
  EmptyValue,
  /// An analyzer asked to re-examine the same token twice in a row.
  StalledAnalysis,
  /// A property that the receiver does not handle.
  IrrelevantProperty(String),
}

impl fmt::Display for FruitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use FruitError::*;
    match self {
      DuplicateKeyword(keyword) => write!(f, "Duplicated keyword: {}", keyword),
      ExcessiveKeyword(keyword) => write!(f, "Excessive keyword: {}", keyword),
      ExcessiveValue(value) => write!(f, "Excessive value: {}", value),
      UnclosedFunction(name) => write!(f, "Unclosed function '{}'", name),
      InvalidComponent { fruit, value } => write!(f, "Invalid <{}> '{}'", fruit, value),
      MalformedColor(value) => write!(f, "Malformed color: {}", value),
      NegativeValue(value) => write!(f, "Negative value is not allowed: {}", value),
      MisplacedColor => write!(f, "A color is only allowed in the final background layer"),
      EmptyLayer => write!(f, "Empty background layer"),
      UnexpectedDelimiter(delim) => write!(f, "Unexpected delimiter '{}'", delim),
      UnconsumedTokens(value) => write!(f, "Nodes of value cannot be fully analyzed: {}", value),
      IncompleteValue(value) => write!(f, "Incomplete value: {}", value),
      EmptyValue => write!(f, "Empty value"),
      StalledAnalysis => write!(f, "Analysis stalled on the same token"),
      IrrelevantProperty(property) => write!(f, "Irrelevant property: {}", property),
    }
  }
}

/// A printer error.
pub type PrinterError = Error<PrinterErrorKind>;

/// A printer error type.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum PrinterErrorKind {
  /// A [std::fmt::Error](std::fmt::Error) was encountered in the underlying destination.
  FmtError,
}

impl From<fmt::Error> for PrinterError {
  fn from(_: fmt::Error) -> PrinterError {
    PrinterError::new(PrinterErrorKind::FmtError)
  }
}

impl fmt::Display for PrinterErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use PrinterErrorKind::*;
    match self {
      FmtError => write!(f, "Printer error"),
    }
  }
}
