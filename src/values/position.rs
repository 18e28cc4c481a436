//! The `background-position` analyzer.
//!
//! A position is made of one to four components, each being `center`, a side keyword
//! (`left`, `right`, `top`, `bottom`) or a `<length-percentage>` offset. What an offset
//! means depends on the components before it: `10%` alone is measured from the left,
//! `left 10%` measures it from the top, and `left 10% top` moves it back to the x axis.
//! The analyzer keeps the roles of the components seen so far and resolves each new one
//! against them.

use super::length::LengthPercentage;
use crate::error::{Error, FruitError, PrinterError};
use crate::macros::enum_property;
use crate::parser::FruitKind;
use crate::printer::Printer;
use crate::stem::{Stem, TokenKind, ValueToken};
use crate::traits::{Fruit, LoopControl, Parse, ToCss, Validity};
use smallvec::SmallVec;

enum_property! {
  /// A keyword that a position offset is measured from.
  pub enum PositionKeyword {
    /// The center of the axis.
    "center": Center,
    /// The left edge.
    "left": Left,
    /// The right edge.
    "right": Right,
    /// The top edge.
    "top": Top,
    /// The bottom edge.
    "bottom": Bottom,
  }
}

impl PositionKeyword {
  /// Returns the axis a side keyword belongs to, or `None` for `center`.
  pub fn axis(&self) -> Option<Axis> {
    match self {
      PositionKeyword::Left | PositionKeyword::Right => Some(Axis::X),
      PositionKeyword::Top | PositionKeyword::Bottom => Some(Axis::Y),
      PositionKeyword::Center => None,
    }
  }
}

/// One of the two axes of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  /// The horizontal axis.
  X,
  /// The vertical axis.
  Y,
}

/// The position along one axis: an origin keyword and an optional offset from it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundPositionValue {
  /// The keyword the offset is measured from. Only `None` before anything was analyzed.
  pub origin: Option<PositionKeyword>,
  /// The offset from the origin.
  pub offset: Option<LengthPercentage>,
}

impl BackgroundPositionValue {
  /// Creates a value without an offset.
  pub fn keyword(origin: PositionKeyword) -> BackgroundPositionValue {
    BackgroundPositionValue {
      origin: Some(origin),
      offset: None,
    }
  }

  /// Creates a value with an offset.
  pub fn offset(origin: PositionKeyword, offset: LengthPercentage) -> BackgroundPositionValue {
    BackgroundPositionValue {
      origin: Some(origin),
      offset: Some(offset),
    }
  }
}

impl ToCss for BackgroundPositionValue {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    self.origin.unwrap_or(PositionKeyword::Center).to_css(dest)?;
    if let Some(offset) = &self.offset {
      dest.whitespace()?;
      offset.to_css(dest)?;
    }
    Ok(())
  }
}

/// A [`background-position`](https://www.w3.org/TR/css-backgrounds-3/#background-position) value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundPosition {
  /// The horizontal position.
  pub x: BackgroundPositionValue,
  /// The vertical position.
  pub y: BackgroundPositionValue,
}

impl BackgroundPosition {
  /// Creates a position from its two axes.
  pub fn new(x: BackgroundPositionValue, y: BackgroundPositionValue) -> BackgroundPosition {
    BackgroundPosition { x, y }
  }

  /// Returns the position of both axes at their center.
  pub fn center() -> BackgroundPosition {
    BackgroundPosition::new(
      BackgroundPositionValue::keyword(PositionKeyword::Center),
      BackgroundPositionValue::keyword(PositionKeyword::Center),
    )
  }

  /// Returns the initial value, `0% 0%`.
  pub fn initial() -> BackgroundPosition {
    BackgroundPosition::new(
      BackgroundPositionValue::offset(PositionKeyword::Left, LengthPercentage::zero_percent()),
      BackgroundPositionValue::offset(PositionKeyword::Top, LengthPercentage::zero_percent()),
    )
  }

  fn claims(&self, axis: Axis) -> bool {
    let value = match axis {
      Axis::X => &self.x,
      Axis::Y => &self.y,
    };
    value.origin.and_then(|origin| origin.axis()) == Some(axis)
  }

  /// Moves the offset that was provisionally bound to y over to the x axis.
  fn settle_on_x(&mut self) {
    self.x.offset = self.y.offset.take();
    self.y.origin = Some(PositionKeyword::Center);
  }

  /// Resolves one component against the roles of the components seen before it.
  pub(crate) fn transition(&mut self, state: &mut PositionState, component: Component) -> Result<(), FruitError> {
    use PositionKeyword::Center;
    use Role::*;

    let binding = state.binding;
    let role = match (state.roles.as_slice(), component) {
      // The first component. The other axis defaults to its center.
      ([], Component::Center) => {
        *self = BackgroundPosition::center();
        state.valid = true;
        Role::Center
      }
      ([], Component::Side(Axis::X, keyword)) => {
        self.x = BackgroundPositionValue::keyword(keyword);
        self.y = BackgroundPositionValue::keyword(Center);
        state.valid = true;
        XSide
      }
      ([], Component::Side(Axis::Y, keyword)) => {
        self.x = BackgroundPositionValue::keyword(Center);
        self.y = BackgroundPositionValue::keyword(keyword);
        state.valid = true;
        YSide
      }
      ([], Component::Offset(offset)) => {
        self.x = BackgroundPositionValue::offset(PositionKeyword::Left, offset);
        self.y = BackgroundPositionValue::keyword(Center);
        state.binding = Some(Binding::Final(Axis::X));
        state.valid = true;
        Offset
      }

      // The second component.
      ([_], Component::Center) => {
        // Whichever axis is still free already sits at its center.
        state.valid = true;
        Role::Center
      }
      ([Role::Center | YSide], Component::Side(Axis::X, keyword)) => {
        self.x = BackgroundPositionValue::keyword(keyword);
        state.valid = true;
        XSide
      }
      ([Role::Center | XSide | Offset], Component::Side(Axis::Y, keyword)) => {
        self.y = BackgroundPositionValue::keyword(keyword);
        state.valid = true;
        YSide
      }
      ([Role::Center | Offset], Component::Offset(offset)) => {
        self.y = BackgroundPositionValue::offset(PositionKeyword::Top, offset);
        state.binding = Some(Binding::Final(Axis::Y));
        state.valid = true;
        Offset
      }
      ([XSide], Component::Offset(offset)) => {
        // `left 10%` is a complete two value position, unless a y keyword follows.
        self.y = BackgroundPositionValue::offset(PositionKeyword::Top, offset);
        state.binding = Some(Binding::Provisional(Axis::Y));
        state.valid = true;
        Offset
      }
      ([YSide], Component::Offset(offset)) => {
        // `top 10%` needs an x component to be complete.
        self.y.offset = Some(offset);
        state.binding = Some(Binding::Pending(Axis::Y));
        state.valid = false;
        Offset
      }

      // The third component settles a provisional or pending offset...
      ([XSide, Offset], Component::Side(Axis::Y, keyword)) if binding == Some(Binding::Provisional(Axis::Y)) => {
        self.settle_on_x();
        self.y = BackgroundPositionValue::keyword(keyword);
        state.binding = Some(Binding::Final(Axis::X));
        state.valid = true;
        YSide
      }
      ([XSide, Offset], Component::Center) if binding == Some(Binding::Provisional(Axis::Y)) => {
        self.settle_on_x();
        state.binding = Some(Binding::Final(Axis::X));
        state.valid = true;
        Role::Center
      }
      ([YSide, Offset], Component::Side(Axis::X, keyword)) if binding == Some(Binding::Pending(Axis::Y)) => {
        self.x = BackgroundPositionValue::keyword(keyword);
        state.binding = Some(Binding::Final(Axis::Y));
        state.valid = true;
        XSide
      }
      ([YSide, Offset], Component::Center) if binding == Some(Binding::Pending(Axis::Y)) => {
        self.x = BackgroundPositionValue::keyword(Center);
        state.binding = Some(Binding::Final(Axis::Y));
        state.valid = true;
        Role::Center
      }
      // ...or is the offset of the keyword right before it.
      ([Role::Center | YSide, XSide], Component::Offset(offset)) => {
        self.x.offset = Some(offset);
        state.binding = Some(Binding::Final(Axis::X));
        state.valid = true;
        Offset
      }
      ([Role::Center | XSide, YSide], Component::Offset(offset)) => {
        self.y.offset = Some(offset);
        state.binding = Some(Binding::Final(Axis::Y));
        state.valid = true;
        Offset
      }

      // The fourth component is the offset of the second keyword.
      ([XSide, Offset, YSide], Component::Offset(offset)) => {
        self.y.offset = Some(offset);
        state.binding = Some(Binding::Final(Axis::Y));
        state.valid = true;
        Offset
      }
      ([YSide, Offset, XSide], Component::Offset(offset)) => {
        self.x.offset = Some(offset);
        state.binding = Some(Binding::Final(Axis::X));
        state.valid = true;
        Offset
      }

      (_, Component::Side(axis, keyword)) => {
        return Err(if self.claims(axis) {
          FruitError::DuplicateKeyword(keyword.as_str().into())
        } else {
          FruitError::ExcessiveKeyword(keyword.as_str().into())
        })
      }
      (_, Component::Center) => return Err(FruitError::ExcessiveKeyword("center".into())),
      (_, Component::Offset(_)) => return Err(FruitError::ExcessiveValue(state.source.clone())),
    };

    state.roles.push(role);
    Ok(())
  }

  /// Returns whether the shortest form can be written as `<offset> [<keyword>]`.
  fn write_shortest<W>(&self, dest: &mut Printer<W>) -> Result<bool, PrinterError>
  where
    W: std::fmt::Write,
  {
    use PositionKeyword::*;

    let (x, y) = (&self.x, &self.y);
    match (x.origin, &x.offset, y.origin, &y.offset) {
      // Keywords only. A centered axis can be left out.
      (Some(Center), None, Some(Center), None) => dest.write_str("center")?,
      (Some(origin), None, Some(Center), None) | (Some(Center), None, Some(origin), None) => origin.to_css(dest)?,
      (Some(x_origin), None, Some(y_origin), None) => {
        x_origin.to_css(dest)?;
        dest.whitespace()?;
        y_origin.to_css(dest)?;
      }
      // An offset from the left edge, optionally followed by the y component.
      (Some(Left), Some(x_offset), Some(y_origin), None) => {
        x_offset.to_css(dest)?;
        if y_origin != Center {
          dest.whitespace()?;
          y_origin.to_css(dest)?;
        }
      }
      (Some(Left), Some(x_offset), Some(Top), Some(y_offset)) => {
        x_offset.to_css(dest)?;
        dest.whitespace()?;
        y_offset.to_css(dest)?;
      }
      // A bare x keyword followed by an offset from the top.
      (Some(x_origin), None, Some(Top), Some(y_offset)) => {
        x_origin.to_css(dest)?;
        dest.whitespace()?;
        y_offset.to_css(dest)?;
      }
      _ => return Ok(false),
    }
    Ok(true)
  }
}

impl ToCss for BackgroundPosition {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    if !dest.complete && self.write_shortest(dest)? {
      return Ok(());
    }

    self.x.to_css(dest)?;
    dest.whitespace()?;
    self.y.to_css(dest)
  }
}

/// A classified position component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Component {
  Center,
  Side(Axis, PositionKeyword),
  Offset(LengthPercentage),
}

impl Component {
  /// Classifies a word, or returns `None` if it cannot be part of a position.
  pub(crate) fn classify(token: &ValueToken) -> Option<Component> {
    if token.kind != TokenKind::Word {
      return None;
    }

    if let Some(keyword) = PositionKeyword::from_ident(&token.text) {
      return Some(match keyword.axis() {
        Some(axis) => Component::Side(axis, keyword),
        None => Component::Center,
      });
    }

    LengthPercentage::from_word(&token.text).map(Component::Offset)
  }
}

/// The part a component played in a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
  Center,
  XSide,
  YSide,
  Offset,
}

/// How the most recent offset is bound to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Binding {
  /// The offset belongs to the axis.
  Final(Axis),
  /// The offset belongs to the axis unless a keyword for that axis follows.
  Provisional(Axis),
  /// The offset belongs to the axis, but the other axis must still be given.
  Pending(Axis),
}

/// The working state of the `background-position` analyzer.
#[derive(Debug, Clone, Default)]
pub struct PositionState {
  roles: SmallVec<[Role; 4]>,
  binding: Option<Binding>,
  valid: bool,
  source: String,
}

impl PositionState {
  /// Returns the number of components consumed.
  pub fn count(&self) -> usize {
    self.roles.len()
  }
}

impl Validity for PositionState {
  fn is_valid(&self) -> bool {
    self.valid
  }
}

impl Fruit for BackgroundPosition {
  const KIND: FruitKind = FruitKind::BackgroundPosition;
  type State = PositionState;

  fn analyze_in_loop(
    &mut self,
    state: &mut PositionState,
    token: &ValueToken,
    _stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    if token.is_skippable() {
      return Ok(LoopControl::Next);
    }

    let component = match Component::classify(token) {
      Some(component) => component,
      None => return Ok(LoopControl::Break),
    };

    state.source.clone_from(&token.text);
    self.transition(state, component).map_err(Error::new)?;
    Ok(LoopControl::Next)
  }

  fn finish(&mut self, state: &mut PositionState) {
    // Nothing can follow any more, so a provisional offset keeps its axis.
    if let Some(Binding::Provisional(axis)) = state.binding {
      state.binding = Some(Binding::Final(axis));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::printer::PrinterOptions;
  use crate::values::length::LengthValue;
  use crate::values::percentage::Percentage;
  use PositionKeyword::*;

  fn pct(value: f32) -> LengthPercentage {
    LengthPercentage::Percentage(Percentage(value))
  }

  fn px(value: f32) -> LengthPercentage {
    LengthPercentage::Dimension(LengthValue::Px(value))
  }

  fn kw(origin: PositionKeyword) -> BackgroundPositionValue {
    BackgroundPositionValue::keyword(origin)
  }

  fn off(origin: PositionKeyword, offset: LengthPercentage) -> BackgroundPositionValue {
    BackgroundPositionValue::offset(origin, offset)
  }

  fn parse(value: &str) -> BackgroundPosition {
    BackgroundPosition::parse_string(value).unwrap()
  }

  fn error(value: &str) -> FruitError {
    BackgroundPosition::parse_string(value).unwrap_err().kind
  }

  fn css(position: &BackgroundPosition, complete: bool) -> String {
    position.to_css_string(PrinterOptions { complete }).unwrap()
  }

  fn run(components: &[&str]) -> (BackgroundPosition, PositionState) {
    let mut position = BackgroundPosition::default();
    let mut state = PositionState::default();
    for text in components {
      let token = ValueToken::new(TokenKind::Word, *text, 0);
      let component = Component::classify(&token).unwrap();
      position.transition(&mut state, component).unwrap();
    }
    (position, state)
  }

  #[test]
  fn test_one_value() {
    assert_eq!(parse("center"), BackgroundPosition::center());
    assert_eq!(parse("left"), BackgroundPosition::new(kw(Left), kw(Center)));
    assert_eq!(parse("RIGHT"), BackgroundPosition::new(kw(Right), kw(Center)));
    assert_eq!(parse("top"), BackgroundPosition::new(kw(Center), kw(Top)));
    assert_eq!(parse("bottom"), BackgroundPosition::new(kw(Center), kw(Bottom)));
    assert_eq!(parse("40%"), BackgroundPosition::new(off(Left, pct(0.4)), kw(Center)));
    assert_eq!(parse("10px"), BackgroundPosition::new(off(Left, px(10.0)), kw(Center)));
  }

  #[test]
  fn test_two_values() {
    assert_eq!(parse("left top"), BackgroundPosition::new(kw(Left), kw(Top)));
    assert_eq!(parse("top left"), BackgroundPosition::new(kw(Left), kw(Top)));
    assert_eq!(parse("center center"), BackgroundPosition::center());
    assert_eq!(parse("left center"), BackgroundPosition::new(kw(Left), kw(Center)));
    assert_eq!(parse("center left"), BackgroundPosition::new(kw(Left), kw(Center)));
    assert_eq!(parse("top center"), BackgroundPosition::new(kw(Center), kw(Top)));
    assert_eq!(parse("center bottom"), BackgroundPosition::new(kw(Center), kw(Bottom)));
    assert_eq!(parse("10% 20%"), BackgroundPosition::new(off(Left, pct(0.1)), off(Top, pct(0.2))));
    assert_eq!(parse("10px center"), BackgroundPosition::new(off(Left, px(10.0)), kw(Center)));
    assert_eq!(parse("10px bottom"), BackgroundPosition::new(off(Left, px(10.0)), kw(Bottom)));
    assert_eq!(parse("center 10%"), BackgroundPosition::new(kw(Center), off(Top, pct(0.1))));
    assert_eq!(parse("left 10%"), BackgroundPosition::new(kw(Left), off(Top, pct(0.1))));
    assert_eq!(parse("right 2em"), BackgroundPosition::new(kw(Right), off(Top, LengthPercentage::Dimension(LengthValue::Em(2.0)))));
  }

  #[test]
  fn test_three_values() {
    assert_eq!(parse("left 10% top"), BackgroundPosition::new(off(Left, pct(0.1)), kw(Top)));
    assert_eq!(parse("right 10% bottom"), BackgroundPosition::new(off(Right, pct(0.1)), kw(Bottom)));
    assert_eq!(parse("left 10% center"), BackgroundPosition::new(off(Left, pct(0.1)), kw(Center)));
    assert_eq!(parse("top 10% left"), BackgroundPosition::new(kw(Left), off(Top, pct(0.1))));
    assert_eq!(parse("top 10% center"), BackgroundPosition::new(kw(Center), off(Top, pct(0.1))));
    assert_eq!(parse("left top 10%"), BackgroundPosition::new(kw(Left), off(Top, pct(0.1))));
    assert_eq!(parse("top left 10%"), BackgroundPosition::new(off(Left, pct(0.1)), kw(Top)));
    assert_eq!(parse("center left 10%"), BackgroundPosition::new(off(Left, pct(0.1)), kw(Center)));
    assert_eq!(parse("center top 10%"), BackgroundPosition::new(kw(Center), off(Top, pct(0.1))));
    assert_eq!(parse("right bottom 5px"), BackgroundPosition::new(kw(Right), off(Bottom, px(5.0))));
  }

  #[test]
  fn test_four_values() {
    let expected = BackgroundPosition::new(off(Left, pct(0.1)), off(Top, pct(0.2)));
    assert_eq!(parse("left 10% top 20%"), expected);
    assert_eq!(parse("top 20% left 10%"), expected);
    assert_eq!(
      parse("right 10px bottom 20px"),
      BackgroundPosition::new(off(Right, px(10.0)), off(Bottom, px(20.0)))
    );
    assert_eq!(
      parse("bottom 20px right 10px"),
      BackgroundPosition::new(off(Right, px(10.0)), off(Bottom, px(20.0)))
    );
    assert_eq!(parse("left /* x */ 10%  top\t20%"), expected);
  }

  #[test]
  fn test_axis_symmetry() {
    for (a, b) in [
      ("left 10% top 20%", "top 20% left 10%"),
      ("right 1px bottom 2px", "bottom 2px right 1px"),
      ("left top", "top left"),
      ("right bottom 5%", "bottom 5% right"),
      ("center left", "left center"),
    ] {
      assert_eq!(parse(a), parse(b), "{} and {}", a, b);
    }
  }

  #[test]
  fn test_rejections() {
    assert_eq!(error("left right"), FruitError::DuplicateKeyword("right".into()));
    assert_eq!(error("top bottom"), FruitError::DuplicateKeyword("bottom".into()));
    assert_eq!(error("10% left"), FruitError::DuplicateKeyword("left".into()));
    assert_eq!(error("left 10% right"), FruitError::DuplicateKeyword("right".into()));
    assert_eq!(error("center center center"), FruitError::ExcessiveKeyword("center".into()));
    assert_eq!(error("left center top"), FruitError::ExcessiveKeyword("top".into()));
    assert_eq!(error("10% 20% 30%"), FruitError::ExcessiveValue("30%".into()));
    assert_eq!(error("left center 10%"), FruitError::ExcessiveValue("10%".into()));
    assert_eq!(error("left 10% top 20% 30%"), FruitError::ExcessiveValue("30%".into()));
    assert_eq!(error("left 10% center 20%"), FruitError::ExcessiveValue("20%".into()));
    assert_eq!(error("top 10%"), FruitError::IncompleteValue("top 10%".into()));
    assert_eq!(error(""), FruitError::EmptyValue);
    assert_eq!(error("left red"), FruitError::UnconsumedTokens("left red".into()));
    assert_eq!(error("left, top"), FruitError::UnconsumedTokens("left, top".into()));

    let err = BackgroundPosition::parse_string("left 10% right").unwrap_err();
    assert_eq!(err.fruit, Some(FruitKind::BackgroundPosition));
    assert_eq!(err.loc.map(|loc| loc.offset), Some(9));
  }

  #[test]
  fn test_bindings() {
    let (_, state) = run(&["left", "10%"]);
    assert_eq!(state.binding, Some(Binding::Provisional(Axis::Y)));
    assert!(state.valid);

    let (position, state) = run(&["left", "10%", "bottom"]);
    assert_eq!(state.binding, Some(Binding::Final(Axis::X)));
    assert_eq!(position, BackgroundPosition::new(off(Left, pct(0.1)), kw(Bottom)));

    let (_, state) = run(&["top", "10%"]);
    assert_eq!(state.binding, Some(Binding::Pending(Axis::Y)));
    assert!(!state.valid);

    let (_, state) = run(&["top", "10%", "center"]);
    assert_eq!(state.binding, Some(Binding::Final(Axis::Y)));
    assert!(state.valid);
    assert_eq!(state.count(), 3);

    // Only a provisional offset moves to the other axis.
    let (mut position, mut state) = run(&["left", "10%"]);
    state.binding = Some(Binding::Final(Axis::Y));
    let bottom = Component::classify(&ValueToken::new(TokenKind::Word, "bottom", 0)).unwrap();
    assert!(position.transition(&mut state, bottom).is_err());
    assert_eq!(position, BackgroundPosition::new(kw(Left), off(Top, pct(0.1))));

    let mut position = BackgroundPosition::default();
    let mut stem = Stem::new("left 10%");
    assert!(position.analyze(&mut stem).unwrap());
    assert_eq!(position, BackgroundPosition::new(kw(Left), off(Top, pct(0.1))));
  }

  #[test]
  fn test_stops_at_foreign_tokens() {
    let mut position = BackgroundPosition::default();
    let mut stem = Stem::new("left top / cover");
    assert!(position.analyze(&mut stem).unwrap());
    assert_eq!(position, BackgroundPosition::new(kw(Left), kw(Top)));
    assert!(stem.head().unwrap().is_div("/"));
  }

  #[test]
  fn test_serialize() {
    let cases = [
      ("center", "center", "center center"),
      ("left", "left", "left center"),
      ("bottom", "bottom", "center bottom"),
      ("top left", "left top", "left top"),
      ("10%", "10%", "left 10% center"),
      ("10px 20px", "10px 20px", "left 10px top 20px"),
      ("left 10% top", "10% top", "left 10% top"),
      ("left 10%", "left 10%", "left top 10%"),
      ("center 10%", "center 10%", "center top 10%"),
      ("right 10% center", "right 10% center", "right 10% center"),
      ("right 10px bottom 20px", "right 10px bottom 20px", "right 10px bottom 20px"),
      ("bottom 20px left", "left bottom 20px", "left bottom 20px"),
      ("top 20% left 10%", "10% 20%", "left 10% top 20%"),
      ("left 0 top 0", "0 0", "left 0 top 0"),
      ("right .5em top", "right .5em top", "right .5em top"),
    ];

    for (input, shortest, complete) in cases {
      let position = parse(input);
      assert_eq!(css(&position, false), shortest, "shortest form of '{}'", input);
      assert_eq!(css(&position, true), complete, "complete form of '{}'", input);
      // Both forms analyze back to the same position.
      assert_eq!(parse(shortest), position, "'{}' re-analyzed", shortest);
      assert_eq!(parse(complete), position, "'{}' re-analyzed", complete);
    }

    assert_eq!(css(&BackgroundPosition::initial(), false), "0% 0%");
  }
}
