//! Options that control how values are analyzed and returned.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// What to do with a property that the receiver does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum IrrelevantProperty {
  /// Skip the property silently.
  #[default]
  Ignore,
  /// Fail with [FruitError::IrrelevantProperty](crate::error::FruitError::IrrelevantProperty).
  Error,
}

/// How deep values are parsed into structures before being collapsed to strings.
///
/// Every value type declares the minimum level at which it is returned as a structure.
/// Below that level, a valid value is returned as its canonical string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ParseDeepLevel {
  /// Only shorthand properties.
  Shorthand,
  /// Shorthands and their primary longhands.
  PrimaryLonghand,
  /// Shorthands and all of their longhands.
  CompleteLonghand,
  /// Longhands that exist only as components of another value, e.g. `background-position-x`.
  #[default]
  VirtualLonghand,
  /// Everything, down to data types such as `<length>` and `<color>`.
  DataTypes,
}

impl FromStr for ParseDeepLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    use ParseDeepLevel::*;
    Ok(match s {
      "shorthand" => Shorthand,
      "primary-longhand" => PrimaryLonghand,
      "complete-longhand" => CompleteLonghand,
      "virtual-longhand" => VirtualLonghand,
      "data-types" => DataTypes,
      _ => return Err(format!("unknown parse deep level '{}'", s)),
    })
  }
}

/// The value types that can be analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FruitKind {
  /// `<color>`
  Color,
  /// `<image>`
  Image,
  /// `<length>`
  Length,
  /// `<number>`
  Number,
  /// `<percentage>`
  Percentage,
  /// `<url>`
  Url,
  /// The `background` shorthand.
  Background,
  /// `background-position`
  BackgroundPosition,
  /// `background-repeat`
  BackgroundRepeat,
  /// `background-size`
  BackgroundSize,
}

impl FruitKind {
  /// Returns the name used in messages, e.g. `background-position`.
  pub fn name(&self) -> &'static str {
    use FruitKind::*;
    match self {
      Color => "color",
      Image => "image",
      Length => "length",
      Number => "number",
      Percentage => "percentage",
      Url => "url",
      Background => "background",
      BackgroundPosition => "background-position",
      BackgroundRepeat => "background-repeat",
      BackgroundSize => "background-size",
    }
  }

  /// Returns the flag that forces this kind to be returned as a structure.
  pub fn flag(&self) -> ForceParsing {
    use FruitKind::*;
    match self {
      Color => ForceParsing::Color,
      Image => ForceParsing::Image,
      Length => ForceParsing::Length,
      Number => ForceParsing::Number,
      Percentage => ForceParsing::Percentage,
      Url => ForceParsing::Url,
      Background => ForceParsing::Background,
      BackgroundPosition => ForceParsing::BackgroundPosition,
      BackgroundRepeat => ForceParsing::BackgroundRepeat,
      BackgroundSize => ForceParsing::BackgroundSize,
    }
  }
}

impl fmt::Display for FruitKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for FruitKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    use FruitKind::*;
    Ok(match s {
      "color" => Color,
      "image" => Image,
      "length" => Length,
      "number" => Number,
      "percentage" => Percentage,
      "url" => Url,
      "background" => Background,
      "background-position" => BackgroundPosition,
      "background-repeat" => BackgroundRepeat,
      "background-size" => BackgroundSize,
      _ => return Err(format!("unknown value type '{}'", s)),
    })
  }
}

bitflags! {
  /// Value types that are always returned as structures, regardless of
  /// [ParseDeepLevel](ParseDeepLevel).
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
  pub struct ForceParsing: u16 {
    const Color = 1 << 0;
    const Image = 1 << 1;
    const Length = 1 << 2;
    const Number = 1 << 3;
    const Percentage = 1 << 4;
    const Url = 1 << 5;
    const Background = 1 << 6;
    const BackgroundPosition = 1 << 7;
    const BackgroundRepeat = 1 << 8;
    const BackgroundSize = 1 << 9;
  }
}

/// Options that control how values are analyzed.
///
/// Options are read once at the start of every parse call and never mutated by it,
/// so one value can be shared between any number of concurrent calls.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FruitOptions {
  /// What to do with properties that the receiver does not handle.
  pub irrelevant_property: IrrelevantProperty,
  /// How deep values are returned as structures.
  pub parse_deep_level: ParseDeepLevel,
  /// Value types that are always returned as structures.
  pub force_parsing: ForceParsing,
  /// Whether syntax violations are returned as errors. When false, invalid values
  /// are simply reported as absent.
  pub throw_errors: bool,
}

impl FruitOptions {
  /// Returns whether a valid value of the given kind should be returned as a structure.
  pub fn wants_structure(&self, kind: FruitKind, boundary: ParseDeepLevel) -> bool {
    self.parse_deep_level >= boundary || self.force_parsing.contains(kind.flag())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let options = FruitOptions::default();
    assert_eq!(options.irrelevant_property, IrrelevantProperty::Ignore);
    assert_eq!(options.parse_deep_level, ParseDeepLevel::VirtualLonghand);
    assert!(options.force_parsing.is_empty());
    assert!(!options.throw_errors);
  }

  #[test]
  fn test_wants_structure() {
    let mut options = FruitOptions::default();
    assert!(options.wants_structure(FruitKind::BackgroundPosition, ParseDeepLevel::VirtualLonghand));
    assert!(!options.wants_structure(FruitKind::Length, ParseDeepLevel::DataTypes));

    options.force_parsing |= ForceParsing::Length;
    assert!(options.wants_structure(FruitKind::Length, ParseDeepLevel::DataTypes));

    options.parse_deep_level = ParseDeepLevel::Shorthand;
    assert!(!options.wants_structure(FruitKind::BackgroundRepeat, ParseDeepLevel::VirtualLonghand));
    assert!(options.wants_structure(FruitKind::Background, ParseDeepLevel::Shorthand));
  }

  #[test]
  fn test_names() {
    for kind in [FruitKind::Color, FruitKind::BackgroundPosition, FruitKind::BackgroundSize] {
      assert_eq!(kind.name().parse::<FruitKind>(), Ok(kind));
    }
    assert_eq!("data-types".parse::<ParseDeepLevel>(), Ok(ParseDeepLevel::DataTypes));
    assert!("deepest".parse::<ParseDeepLevel>().is_err());
  }
}
