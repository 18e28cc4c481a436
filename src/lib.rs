//! Fruitcss analyzes CSS background values into structured data and canonical strings.
//!
//! Every value type implements the [Fruit](traits::Fruit) trait. A fruit reads a value
//! one token at a time, decides whether the tokens it consumed form a valid value, and
//! serializes itself back to its shortest canonical form via [ToCss](traits::ToCss).
//!
//! ```
//! use fruitcss::parser::FruitOptions;
//! use fruitcss::properties::Property;
//! use fruitcss::traits::{Outcome, ToCss};
//!
//! let options = FruitOptions::default();
//! let outcome = Property::parse("background-position", "top right", &options).unwrap();
//! let css = match outcome {
//!   Some(Outcome::Structured(property)) => property.to_css_string(Default::default()).unwrap(),
//!   _ => unreachable!(),
//! };
//! assert_eq!(css, "right top");
//! ```

mod macros;

pub mod error;
pub mod parser;
pub mod printer;
pub mod properties;
pub mod stem;
pub mod traits;
pub mod values;

pub use error::{Error, FruitError};
pub use parser::{FruitOptions, ParseDeepLevel};
pub use traits::{Fruit, Outcome};

#[cfg(test)]
mod tests {
  extern crate indoc;
  use self::indoc::indoc;
  use crate::error::*;
  use crate::parser::*;
  use crate::printer::PrinterOptions;
  use crate::properties::background::*;
  use crate::properties::Property;
  use crate::traits::{Fruit, Outcome, ToCss};
  use crate::values::color::CssColor;
  use crate::values::position::BackgroundPosition;

  fn serialize(name: &str, source: &str, complete: bool) -> String {
    let outcome = Property::parse(name, source, &FruitOptions::default())
      .unwrap()
      .unwrap_or_else(|| panic!("{}: {} is invalid", name, source));
    let property = outcome.structured().unwrap();
    property.to_css_string(PrinterOptions { complete }).unwrap()
  }

  fn test(name: &str, source: &str, expected: &str) {
    let res = serialize(name, source, false);
    assert_eq!(res, expected, "{}: {}", name, source);
    // The canonical form analyzes back to itself.
    assert_eq!(serialize(name, &res, false), res, "{}: {}", name, res);
  }

  fn complete_test(name: &str, source: &str, expected: &str) {
    assert_eq!(serialize(name, source, true), expected, "{}: {}", name, source);
  }

  fn error_test(name: &str, source: &str, expected: FruitError) {
    let options = FruitOptions {
      throw_errors: true,
      ..FruitOptions::default()
    };
    match Property::parse(name, source, &options) {
      Ok(_) => unreachable!("{}: {} should fail", name, source),
      Err(err) => assert_eq!(err.kind, expected, "{}: {}", name, source),
    }
    assert_eq!(Property::parse(name, source, &FruitOptions::default()), Ok(None));
  }

  #[test]
  pub fn test_background_position() {
    test("background-position", "center", "center");
    test("background-position", "center center", "center");
    test("background-position", "top", "top");
    test("background-position", "top center", "top");
    test("background-position", "top left", "left top");
    test("background-position", "10px", "10px");
    test("background-position", "10px center", "10px");
    test("background-position", "10px 20%", "10px 20%");
    test("background-position", "left 10%", "left 10%");
    test("background-position", "left 10px top", "10px top");
    test("background-position", "left 10px top 15px", "10px 15px");
    test("background-position", "right 10px bottom 20px", "right 10px bottom 20px");
    test("background-position", "bottom 20px right 10px", "right 10px bottom 20px");
    test("background-position", "center bottom 10px", "center bottom 10px");
    test("background-position", "0.5em -0.25em", ".5em -.25em");

    complete_test("background-position", "center", "center center");
    complete_test("background-position", "10px", "left 10px center");
    complete_test("background-position", "left 10%", "left top 10%");
    complete_test("background-position", "right bottom", "right bottom");
  }

  #[test]
  pub fn test_background_position_errors() {
    error_test("background-position", "left right", FruitError::DuplicateKeyword("right".into()));
    error_test("background-position", "top bottom", FruitError::DuplicateKeyword("bottom".into()));
    error_test("background-position", "left left", FruitError::DuplicateKeyword("left".into()));
    error_test("background-position", "10px 20px 30px", FruitError::ExcessiveValue("30px".into()));
    error_test("background-position", "top 10%", FruitError::IncompleteValue("top 10%".into()));
    error_test("background-position", "", FruitError::EmptyValue);
  }

  #[test]
  pub fn test_background_repeat() {
    test("background-repeat", "repeat no-repeat", "repeat-x");
    test("background-repeat", "no-repeat repeat", "repeat-y");
    test("background-repeat", "round round", "round");
    test("background-repeat", "space round", "space round");
    complete_test("background-repeat", "repeat-y", "no-repeat repeat");
    error_test("background-repeat", "repeat-x repeat-y", FruitError::ExcessiveKeyword("repeat-y".into()));
  }

  #[test]
  pub fn test_background_size() {
    test("background-size", "cover", "cover");
    test("background-size", "auto", "auto");
    test("background-size", "auto auto", "auto");
    test("background-size", "50% auto", "50%");
    test("background-size", "0px 1.50em", "0 1.5em");
    complete_test("background-size", "10px", "10px auto");
    error_test("background-size", "10px -1px", FruitError::NegativeValue("-1px".into()));
  }

  #[test]
  pub fn test_background() {
    test("background", "none", "none");
    test("background", "#FF0000", "#f00");
    test("background", "url(a.png)", "url(\"a.png\")");
    test("background", "url(a.png) no-repeat center / cover", "url(\"a.png\") center / cover no-repeat");
    test("background", "#0000ff url(a.png)", "url(\"a.png\") #00f");
    test("background", "/* top layer */ url(a.png), rgb(0 0 0 / 50%)", "url(\"a.png\"), rgba(0, 0, 0, .5)");
    test("background", "fixed border-box", "fixed border-box");
    test("background", "padding-box text", "padding-box text");
    test("background", "text", "text");
    test(
      "background",
      indoc! {r#"
        url(top.png) left top / 10px repeat-y,
        url(middle.png) right 10px bottom scroll,
        #123
      "#},
      r#"url("top.png") left top / 10px repeat-y, url("middle.png") right 10px bottom scroll, #123"#,
    );

    // A size without a position is written with the initial position.
    let mut background = Background::default();
    background.absorb("background-size", "contain", &FruitOptions::default()).unwrap();
    assert_eq!(background.to_css_string(PrinterOptions::default()).unwrap(), "0% 0% / contain");
    assert!(!background.layers[0].is_empty());
    assert_eq!(background.layers[0].position, None);
    assert_eq!(BackgroundPosition::parse_string("0% 0%").unwrap(), BackgroundPosition::initial());
  }

  #[test]
  pub fn test_background_errors() {
    error_test("background", "#fff, none", FruitError::MisplacedColor);
    error_test("background", "none,", FruitError::EmptyLayer);
    error_test("background", "url(a.png) left / left", FruitError::InvalidComponent {
      fruit: FruitKind::BackgroundSize,
      value: "/".into(),
    });
    error_test("background", "url(a.png", FruitError::UnclosedFunction("url".into()));
    error_test("background", "none none", FruitError::ExcessiveValue("none".into()));
  }

  #[test]
  pub fn test_error_context() {
    let err = Background::parse_string("url(a.png), left right").unwrap_err();
    assert_eq!(err.kind, FruitError::DuplicateKeyword("right".into()));
    assert_eq!(err.fruit, Some(FruitKind::BackgroundPosition));
    assert_eq!(err.loc, Some(ErrorLocation { offset: 17 }));
    assert_eq!(
      err.to_string(),
      "Duplicated keyword: right when analyzing <background-position> at offset 17"
    );

    // Offsets are relative to the trimmed value.
    let err = BackgroundPosition::parse_string("  left 10px top 5px center ").unwrap_err();
    assert_eq!(err.loc, Some(ErrorLocation { offset: 18 }));
  }

  #[test]
  pub fn test_totality() {
    // Any input either analyzes or fails with an error, never a panic.
    let inputs = [
      "", " ", ",", "/", "((", "url(", "rgb(", "#", "#ff", "-", "--x", "10px 10px 10px 10px 10px",
      "left 10% top 10% center", "none / cover", "\"a\"", "!important", "\\", "1e999px", "rgb(1,2,3,4,5)",
    ];
    for input in inputs {
      for name in ["background", "background-position", "background-size", "background-repeat", "background-color"] {
        let _ = Property::parse(name, input, &FruitOptions::default());
        let _ = Property::parse(
          name,
          input,
          &FruitOptions {
            throw_errors: true,
            ..FruitOptions::default()
          },
        );
      }
    }
  }

  #[test]
  pub fn test_number_precision() {
    fn structure(name: &str, source: &str) -> Property {
      let outcome = Property::parse(name, source, &FruitOptions::default()).unwrap();
      outcome.and_then(|outcome| outcome.structured()).unwrap_or_else(|| panic!("{}: {} is invalid", name, source))
    }

    let cases = [
      ("background-position", "right 33.333333%"),
      ("background-position", "33.333333% 66.666667%"),
      ("background-position", "left 0.1px top 1e30px"),
      ("background-size", "auto 12.3456789px"),
      ("background-size", "99.99999% 1e-30em"),
      ("background", "url(a.png) 0.1px 1e30px / 99.99999%"),
    ];
    for (name, source) in cases {
      let property = structure(name, source);
      for complete in [false, true] {
        let css = property.to_css_string(PrinterOptions { complete }).unwrap();
        assert_eq!(structure(name, &css), property, "{}: {} -> {}", name, source, css);
      }
    }

    // Values beyond the float range are rejected instead of written back as something else.
    let overflowing = [
      ("background-position", "1e999px"),
      ("background-position", "left -1e999%"),
      ("background-size", "auto 1e999%"),
      ("background", "url(a.png) 1e999px"),
    ];
    for (name, source) in overflowing {
      assert_eq!(Property::parse(name, source, &FruitOptions::default()), Ok(None), "{}: {}", name, source);
    }
  }

  #[test]
  pub fn test_deep_level() {
    let shorthand = FruitOptions {
      parse_deep_level: ParseDeepLevel::Shorthand,
      ..FruitOptions::default()
    };

    let outcome = Property::parse("background-position", "top left", &shorthand).unwrap().unwrap();
    assert_eq!(outcome, Outcome::Canonical("left top".into()));
    let outcome = Property::parse("background-attachment", "FIXED", &shorthand).unwrap().unwrap();
    assert_eq!(outcome.canonical(), Some("fixed"));
    let outcome = Property::parse("background", "red-ish", &shorthand).unwrap();
    assert_eq!(outcome, None);
    let outcome = Property::parse("background", "repeat-x", &shorthand).unwrap().unwrap();
    assert!(matches!(outcome, Outcome::Structured(Property::Background(_))));

    let forced = FruitOptions {
      force_parsing: ForceParsing::BackgroundPosition,
      ..shorthand.clone()
    };
    let outcome = Property::parse("background-position", "top left", &forced).unwrap().unwrap();
    assert!(matches!(outcome, Outcome::Structured(Property::BackgroundPosition(_))));

    let outcome = Property::parse("background-clip", "text", &FruitOptions::default()).unwrap().unwrap();
    assert_eq!(outcome, Outcome::Structured(Property::BackgroundClip(BackgroundClip::Text)));

    // Data types stay strings unless asked for.
    let color = CssColor::parse_with("#ABC", &FruitOptions::default()).unwrap().unwrap();
    assert_eq!(color.canonical(), Some("#abc"));
    let data_types = FruitOptions {
      parse_deep_level: ParseDeepLevel::DataTypes,
      ..FruitOptions::default()
    };
    let color = CssColor::parse_with("#ABC", &data_types).unwrap().unwrap();
    assert_eq!(color.structured(), Some(CssColor::new(0xaa, 0xbb, 0xcc, 255)));
  }

  #[test]
  pub fn test_irrelevant_property() {
    assert_eq!(Property::parse("color", "red", &FruitOptions::default()), Ok(None));

    let strict = FruitOptions {
      irrelevant_property: IrrelevantProperty::Error,
      ..FruitOptions::default()
    };
    let err = Property::parse("color", "red", &strict).unwrap_err();
    assert_eq!(err.kind, FruitError::IrrelevantProperty("color".into()));

    let outcome = Property::parse(" Background-Repeat ", "space", &strict).unwrap().unwrap();
    let property = outcome.structured().unwrap();
    assert_eq!(property.name(), "background-repeat");
    let mut css = String::new();
    property
      .to_css_declaration(&mut crate::printer::Printer::new(&mut css, PrinterOptions::default()))
      .unwrap();
    assert_eq!(css, "background-repeat: space");
  }
}
