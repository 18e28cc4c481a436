//! CSS property values.
//!
//! [Property](Property) is the closed set of property values that can be analyzed. Use
//! [Property::parse](Property::parse) to analyze a value by property name, or the
//! [Fruit](crate::traits::Fruit) implementation of a value type directly.

pub mod background;

use self::background::*;
use crate::error::{Error, FruitError, PrinterError};
use crate::parser::{FruitOptions, IrrelevantProperty, ParseDeepLevel};
use crate::printer::Printer;
use crate::traits::{Fruit, Outcome, ToCss};
use crate::values::color::CssColor;
use crate::values::image::Image;
use crate::values::position::BackgroundPosition;

/// A property name and its unparsed value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
  /// The property name.
  pub property: String,
  /// The property value.
  pub value: String,
}

impl Declaration {
  /// Creates a declaration.
  pub fn new<P: Into<String>, V: Into<String>>(property: P, value: V) -> Declaration {
    Declaration {
      property: property.into(),
      value: value.into(),
    }
  }
}

/// A CSS property value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "property", content = "value", rename_all = "kebab-case")
)]
pub enum Property {
  /// The `background` shorthand.
  Background(Background),
  /// The `background-color` property.
  BackgroundColor(CssColor),
  /// The `background-image` property.
  BackgroundImage(Image),
  /// The `background-position` property.
  BackgroundPosition(BackgroundPosition),
  /// The `background-repeat` property.
  BackgroundRepeat(BackgroundRepeat),
  /// The `background-size` property.
  BackgroundSize(BackgroundSize),
  /// The `background-attachment` property.
  BackgroundAttachment(BackgroundAttachment),
  /// The `background-origin` property.
  BackgroundOrigin(BackgroundBox),
  /// The `background-clip` property.
  BackgroundClip(BackgroundClip),
}

impl Property {
  /// Analyzes the value of the named property.
  ///
  /// Returns `Ok(None)` for invalid values and for properties that are not handled,
  /// unless `options` ask for errors.
  pub fn parse(name: &str, value: &str, options: &FruitOptions) -> Result<Option<Outcome<Property>>, Error<FruitError>> {
    Ok(match name.trim().to_ascii_lowercase().as_str() {
      "background" => parse_fruit(value, options, Property::Background)?,
      "background-color" => parse_fruit(value, options, Property::BackgroundColor)?,
      "background-image" => parse_fruit(value, options, Property::BackgroundImage)?,
      "background-position" => parse_fruit(value, options, Property::BackgroundPosition)?,
      "background-repeat" => parse_fruit(value, options, Property::BackgroundRepeat)?,
      "background-size" => parse_fruit(value, options, Property::BackgroundSize)?,
      "background-attachment" => parse_keyword(value, options, BackgroundAttachment::from_ident, Property::BackgroundAttachment)?,
      "background-origin" => parse_keyword(value, options, BackgroundBox::from_ident, Property::BackgroundOrigin)?,
      "background-clip" => parse_keyword(value, options, BackgroundClip::from_ident, Property::BackgroundClip)?,
      _ => {
        irrelevant_property(name, options)?;
        None
      }
    })
  }

  /// Returns the property name.
  pub fn name(&self) -> &'static str {
    use Property::*;
    match self {
      Background(_) => "background",
      BackgroundColor(_) => "background-color",
      BackgroundImage(_) => "background-image",
      BackgroundPosition(_) => "background-position",
      BackgroundRepeat(_) => "background-repeat",
      BackgroundSize(_) => "background-size",
      BackgroundAttachment(_) => "background-attachment",
      BackgroundOrigin(_) => "background-origin",
      BackgroundClip(_) => "background-clip",
    }
  }

  /// Serializes the value, including the property name, e.g. `background-size: cover`.
  pub fn to_css_declaration<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    dest.write_str(self.name())?;
    dest.delim(':', false)?;
    self.to_css(dest)
  }
}

impl ToCss for Property {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    use Property::*;
    match self {
      Background(value) => value.to_css(dest),
      BackgroundColor(value) => value.to_css(dest),
      BackgroundImage(value) => value.to_css(dest),
      BackgroundPosition(value) => value.to_css(dest),
      BackgroundRepeat(value) => value.to_css(dest),
      BackgroundSize(value) => value.to_css(dest),
      BackgroundAttachment(value) => value.to_css(dest),
      BackgroundOrigin(value) => value.to_css(dest),
      BackgroundClip(value) => value.to_css(dest),
    }
  }
}

fn parse_fruit<T: Fruit>(
  value: &str,
  options: &FruitOptions,
  wrap: fn(T) -> Property,
) -> Result<Option<Outcome<Property>>, Error<FruitError>> {
  Ok(T::parse_with(value, options)?.map(|outcome| outcome.map(wrap)))
}

fn parse_keyword<T: ToCss>(
  value: &str,
  options: &FruitOptions,
  from_ident: fn(&str) -> Option<T>,
  wrap: fn(T) -> Property,
) -> Result<Option<Outcome<Property>>, Error<FruitError>> {
  let keyword = match absorb_keyword(value, options, from_ident)? {
    Some(keyword) => keyword,
    None => return Ok(None),
  };

  // Keyword longhands have no structure below the property itself.
  if options.parse_deep_level >= ParseDeepLevel::VirtualLonghand {
    return Ok(Some(Outcome::Structured(wrap(keyword))));
  }

  match keyword.to_css_string(Default::default()) {
    Ok(css) => Ok(Some(Outcome::Canonical(css))),
    Err(err) => {
      log::error!("failed to serialize '{}': {}", value, err);
      Ok(None)
    }
  }
}

/// Applies the `irrelevant_property` policy to a property that is not handled.
pub(crate) fn irrelevant_property(name: &str, options: &FruitOptions) -> Result<(), Error<FruitError>> {
  match options.irrelevant_property {
    IrrelevantProperty::Ignore => {
      log::debug!("ignoring irrelevant property '{}'", name);
      Ok(())
    }
    IrrelevantProperty::Error => Err(Error::new(FruitError::IrrelevantProperty(name.to_owned()))),
  }
}
