//! CSS serialization.

use crate::error::PrinterError;

/// Options that control how values are serialized to a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterOptions {
  /// Whether to write every component explicitly instead of the shortest
  /// equivalent form, e.g. `repeat no-repeat` rather than `repeat-x`.
  pub complete: bool,
}

/// A `Printer` represents a destination to output serialized CSS, as used in
/// the [ToCss](super::traits::ToCss) trait. It can wrap any destination that
/// implements [std::fmt::Write](std::fmt::Write), such as a [String](String).
pub struct Printer<'a, W> {
  dest: &'a mut W,
  pub(crate) complete: bool,
}

impl<'a, W: std::fmt::Write + Sized> Printer<'a, W> {
  /// Create a new Printer wrapping the given destination.
  pub fn new(dest: &'a mut W, options: PrinterOptions) -> Self {
    Printer {
      dest,
      complete: options.complete,
    }
  }

  /// Writes a raw string to the underlying destination.
  pub fn write_str(&mut self, s: &str) -> Result<(), PrinterError> {
    self.dest.write_str(s)?;
    Ok(())
  }

  /// Write a single character to the underlying destination.
  pub fn write_char(&mut self, c: char) -> Result<(), PrinterError> {
    self.dest.write_char(c)?;
    Ok(())
  }

  /// Writes a single space character.
  #[inline]
  pub fn whitespace(&mut self) -> Result<(), PrinterError> {
    self.write_char(' ')
  }

  /// Writes a delimiter character, followed by whitespace. If `ws_before` is
  /// true, then whitespace is also written before the delimiter.
  pub fn delim(&mut self, delim: char, ws_before: bool) -> Result<(), PrinterError> {
    if ws_before {
      self.whitespace()?;
    }
    self.write_char(delim)?;
    self.whitespace()
  }
}

impl<'a, W: std::fmt::Write + Sized> std::fmt::Write for Printer<'a, W> {
  fn write_str(&mut self, s: &str) -> std::fmt::Result {
    self.dest.write_str(s)
  }
}
