//! CSS properties related to backgrounds.

use super::{irrelevant_property, Declaration};
use crate::error::{Error, FruitError, PrinterError};
use crate::macros::enum_property;
use crate::parser::{FruitKind, FruitOptions, ParseDeepLevel};
use crate::printer::Printer;
use crate::stem::{Stem, TokenKind, ValueToken};
use crate::traits::{CountState, Fruit, LoopControl, Parse, ToCss, Validity};
use crate::values::color::CssColor;
use crate::values::image::Image;
use crate::values::length::{LengthPercentage, LengthPercentageOrAuto};
use crate::values::position::{BackgroundPosition, PositionKeyword};
use smallvec::SmallVec;

/// A value for the [background-size](https://www.w3.org/TR/css-backgrounds-3/#background-size) property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", rename_all = "kebab-case")
)]
pub enum BackgroundSize {
  /// An explicit background size.
  Explicit {
    /// The width of the background.
    width: LengthPercentageOrAuto,
    /// The height of the background.
    height: LengthPercentageOrAuto,
  },
  /// The `cover` keyword. Scales the background image to cover both the width and height of the element.
  Cover,
  /// The `contain` keyword. Scales the background image so that it fits within the element.
  Contain,
}

impl Default for BackgroundSize {
  fn default() -> BackgroundSize {
    BackgroundSize::Explicit {
      width: LengthPercentageOrAuto::Auto,
      height: LengthPercentageOrAuto::Auto,
    }
  }
}

impl Fruit for BackgroundSize {
  const KIND: FruitKind = FruitKind::BackgroundSize;
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

    if token.kind != TokenKind::Word {
      return Ok(LoopControl::Break);
    }

    let keyword = if token.is_keyword("cover") {
      Some(BackgroundSize::Cover)
    } else if token.is_keyword("contain") {
      Some(BackgroundSize::Contain)
    } else {
      None
    };

    if let Some(keyword) = keyword {
      if state.count > 0 {
        return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone())));
      }
      *self = keyword;
      state.count = 2;
      state.valid = true;
      return Ok(LoopControl::Next);
    }

    let value = if token.is_keyword("auto") {
      LengthPercentageOrAuto::Auto
    } else if let Some(value) = LengthPercentage::from_word(&token.text) {
      if value.is_negative() {
        return Err(Error::new(FruitError::NegativeValue(token.text.clone())));
      }
      LengthPercentageOrAuto::LengthPercentage(value)
    } else {
      return Ok(LoopControl::Break);
    };

    if state.count == 0 {
      *self = BackgroundSize::Explicit {
        width: value,
        height: LengthPercentageOrAuto::Auto,
      };
    } else if let (1, BackgroundSize::Explicit { height, .. }) = (state.count, &mut *self) {
      *height = value;
    } else if let BackgroundSize::Explicit { .. } = self {
      return Err(Error::new(FruitError::ExcessiveValue(token.text.clone())));
    } else {
      return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone())));
    }

    state.count += 1;
    state.valid = true;
    Ok(LoopControl::Next)
  }
}

impl ToCss for BackgroundSize {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    use BackgroundSize::*;

    match &self {
      Cover => dest.write_str("cover"),
      Contain => dest.write_str("contain"),
      Explicit { width, height } => {
        width.to_css(dest)?;
        if *height != LengthPercentageOrAuto::Auto || dest.complete {
          dest.whitespace()?;
          height.to_css(dest)?;
        }
        Ok(())
      }
    }
  }
}

enum_property! {
  /// A [`<repeat-style>`](https://www.w3.org/TR/css-backgrounds-3/#typedef-repeat-style) value,
  /// used within the `background-repeat` property to represent how a background image is repeated
  /// in a single direction.
  pub enum BackgroundRepeatKeyword {
    /// The image is repeated in this direction.
    "repeat": Repeat,
    /// The image is repeated so that it fits, and then spaced apart evenly.
    "space": Space,
    /// The image is scaled so that it repeats an even number of times.
    "round": Round,
    /// The image is placed once and not repeated in this direction.
    "no-repeat": NoRepeat,
  }
}

/// A value for the [background-repeat](https://www.w3.org/TR/css-backgrounds-3/#background-repeat) property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundRepeat {
  /// A repeat style for the x direction.
  pub x: BackgroundRepeatKeyword,
  /// A repeat style for the y direction.
  pub y: BackgroundRepeatKeyword,
}

impl Default for BackgroundRepeat {
  fn default() -> BackgroundRepeat {
    BackgroundRepeat {
      x: BackgroundRepeatKeyword::Repeat,
      y: BackgroundRepeatKeyword::Repeat,
    }
  }
}

impl Fruit for BackgroundRepeat {
  const KIND: FruitKind = FruitKind::BackgroundRepeat;
  type State = CountState;

  fn analyze_in_loop(
    &mut self,
    state: &mut CountState,
    token: &ValueToken,
    _stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    use BackgroundRepeatKeyword::*;

    if token.is_skippable() {
      return Ok(LoopControl::Next);
    }

    if token.kind != TokenKind::Word {
      return Ok(LoopControl::Break);
    }

    let pair = if token.is_keyword("repeat-x") {
      Some((Repeat, NoRepeat))
    } else if token.is_keyword("repeat-y") {
      Some((NoRepeat, Repeat))
    } else {
      None
    };

    if let Some((x, y)) = pair {
      // `repeat-x` and `repeat-y` fill both directions at once.
      if state.count > 0 {
        return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone())));
      }
      self.x = x;
      self.y = y;
      state.count += 2;
      state.valid = true;
      return Ok(LoopControl::Next);
    }

    let keyword = match BackgroundRepeatKeyword::from_ident(&token.text) {
      Some(keyword) => keyword,
      None => return Ok(LoopControl::Break),
    };

    match state.count {
      0 => {
        self.x = keyword;
        self.y = keyword;
      }
      1 => self.y = keyword,
      _ => return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone()))),
    }

    state.count += 1;
    state.valid = true;
    Ok(LoopControl::Next)
  }
}

impl ToCss for BackgroundRepeat {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    use BackgroundRepeatKeyword::*;

    if !dest.complete {
      match (&self.x, &self.y) {
        (Repeat, NoRepeat) => return dest.write_str("repeat-x"),
        (NoRepeat, Repeat) => return dest.write_str("repeat-y"),
        (x, y) if x == y => return x.to_css(dest),
        _ => {}
      }
    }

    self.x.to_css(dest)?;
    dest.whitespace()?;
    self.y.to_css(dest)
  }
}

enum_property! {
  /// A value for the [background-attachment](https://www.w3.org/TR/css-backgrounds-3/#background-attachment) property.
  pub enum BackgroundAttachment {
    /// The background scrolls with the container.
    "scroll": Scroll,
    /// The background is fixed to the viewport.
    "fixed": Fixed,
    /// The background is fixed with regard to the element's contents.
    "local": Local,
  }
}

impl Default for BackgroundAttachment {
  fn default() -> BackgroundAttachment {
    BackgroundAttachment::Scroll
  }
}

enum_property! {
  /// A value for the [background-origin](https://www.w3.org/TR/css-backgrounds-3/#background-origin) property.
  pub enum BackgroundBox {
    /// The background is relative to the border box.
    "border-box": BorderBox,
    /// The background is relative to the padding box.
    "padding-box": PaddingBox,
    /// The background is relative to the content box.
    "content-box": ContentBox,
  }
}

enum_property! {
  /// A value for the [background-clip](https://drafts.csswg.org/css-backgrounds-4/#background-clip) property.
  pub enum BackgroundClip {
    /// The background is clipped to the border box.
    "border-box": BorderBox,
    /// The background is clipped to the padding box.
    "padding-box": PaddingBox,
    /// The background is clipped to the content box.
    "content-box": ContentBox,
    /// The background is clipped to the area painted by the border.
    "border": Border,
    /// The background is clipped to the text content of the element.
    "text": Text,
  }
}

impl BackgroundClip {
  /// Returns the equivalent `<box>` value, if there is one.
  pub fn as_box(&self) -> Option<BackgroundBox> {
    match self {
      BackgroundClip::BorderBox => Some(BackgroundBox::BorderBox),
      BackgroundClip::PaddingBox => Some(BackgroundBox::PaddingBox),
      BackgroundClip::ContentBox => Some(BackgroundBox::ContentBox),
      BackgroundClip::Border | BackgroundClip::Text => None,
    }
  }
}

/// A single layer of the [background](https://www.w3.org/TR/css-backgrounds-3/#background) shorthand.
///
/// Components that were not given are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct BackgroundLayer {
  /// The background image.
  pub image: Option<Image>,
  /// The background position.
  pub position: Option<BackgroundPosition>,
  /// The size of the background image.
  pub size: Option<BackgroundSize>,
  /// How the background image is repeated.
  pub repeat: Option<BackgroundRepeat>,
  /// How the background image scrolls.
  pub attachment: Option<BackgroundAttachment>,
  /// The box the background is positioned relative to.
  pub origin: Option<BackgroundBox>,
  /// How the background is clipped.
  pub clip: Option<BackgroundClip>,
}

impl BackgroundLayer {
  /// Returns whether no component was given.
  pub fn is_empty(&self) -> bool {
    *self == BackgroundLayer::default()
  }

  fn to_css_with_color<W>(&self, color: Option<&CssColor>, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let mut needs_space = false;
    macro_rules! component {
      ($value: expr) => {
        if needs_space {
          dest.whitespace()?;
        }
        $value.to_css(dest)?;
        needs_space = true;
      };
    }

    if let Some(image) = &self.image {
      component!(image);
    }

    if self.position.is_some() || self.size.is_some() {
      let initial = BackgroundPosition::initial();
      component!(self.position.as_ref().unwrap_or(&initial));
      if let Some(size) = &self.size {
        dest.delim('/', true)?;
        size.to_css(dest)?;
      }
    }

    if let Some(repeat) = &self.repeat {
      component!(repeat);
    }

    if let Some(attachment) = &self.attachment {
      component!(attachment);
    }

    if let Some(origin) = &self.origin {
      component!(origin);
    }

    if let Some(clip) = &self.clip {
      component!(clip);
    }

    if let Some(color) = color {
      component!(color);
    }

    if !needs_space {
      dest.write_str("none")?;
    }

    Ok(())
  }
}

/// A value for the [background](https://www.w3.org/TR/css-backgrounds-3/#background) shorthand property.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Background {
  /// The background layers, from top to bottom.
  pub layers: SmallVec<[BackgroundLayer; 1]>,
  /// The background color, which belongs to the final layer.
  pub color: Option<CssColor>,
}

/// A component of a background layer, recognized by its first token.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LayerComponent {
  Color,
  Image,
  Position,
  Repeat,
  Attachment(BackgroundAttachment),
  Box(BackgroundClip),
}

impl LayerComponent {
  fn classify(token: &ValueToken) -> Option<LayerComponent> {
    match token.kind {
      TokenKind::Function if token.is_function("url") => Some(LayerComponent::Image),
      TokenKind::Function if token.is_function("rgb") || token.is_function("rgba") => Some(LayerComponent::Color),
      TokenKind::Word => {
        let word = token.text.as_str();
        if word.starts_with('#') {
          Some(LayerComponent::Color)
        } else if token.is_keyword("none") {
          Some(LayerComponent::Image)
        } else if PositionKeyword::from_ident(word).is_some() || LengthPercentage::from_word(word).is_some() {
          Some(LayerComponent::Position)
        } else if BackgroundRepeatKeyword::from_ident(word).is_some()
          || token.is_keyword("repeat-x")
          || token.is_keyword("repeat-y")
        {
          Some(LayerComponent::Repeat)
        } else if let Some(attachment) = BackgroundAttachment::from_ident(word) {
          Some(LayerComponent::Attachment(attachment))
        } else {
          BackgroundClip::from_ident(word).map(LayerComponent::Box)
        }
      }
      _ => None,
    }
  }
}

/// The working state of the `background` analyzer.
#[derive(Debug, Clone, Default)]
pub struct BackgroundState {
  /// Whether the previous component was a position, so a `/ <size>` may follow.
  after_position: bool,
  /// Whether the current layer has at least one component.
  valid: bool,
}

impl Validity for BackgroundState {
  fn is_valid(&self) -> bool {
    self.valid
  }
}

fn analyze_component<T: Fruit>(stem: &mut Stem, token: &ValueToken) -> Result<T, Error<FruitError>> {
  let mut value = T::default();
  if value.analyze(stem)? {
    Ok(value)
  } else {
    Err(Error::new(FruitError::InvalidComponent {
      fruit: T::KIND,
      value: token.text.clone(),
    }))
  }
}

fn duplicate(token: &ValueToken) -> Error<FruitError> {
  Error::new(FruitError::ExcessiveValue(token.text.clone()))
}

impl Background {
  fn current_layer(&mut self) -> &mut BackgroundLayer {
    if self.layers.is_empty() {
      self.layers.push(BackgroundLayer::default());
    }
    let last = self.layers.len() - 1;
    &mut self.layers[last]
  }

  fn next_layer(&mut self, state: &mut BackgroundState, stem: &Stem) -> Result<(), Error<FruitError>> {
    let trailing = stem.remaining().iter().skip(1).all(ValueToken::is_skippable);
    if !state.valid || trailing {
      return Err(Error::new(FruitError::EmptyLayer));
    }
    if self.color.is_some() {
      return Err(Error::new(FruitError::MisplacedColor));
    }
    self.layers.push(BackgroundLayer::default());
    state.valid = false;
    Ok(())
  }

  /// Parses a background longhand and applies it to the final layer.
  ///
  /// `background` itself replaces the whole value. Invalid values are skipped unless
  /// `options.throw_errors` is set; other properties follow `options.irrelevant_property`.
  pub fn absorb(&mut self, property: &str, value: &str, options: &FruitOptions) -> Result<(), Error<FruitError>> {
    match property.trim().to_ascii_lowercase().as_str() {
      "background" => {
        if let Some(background) = absorb_value::<Background>(value, options)? {
          *self = background;
        }
      }
      "background-color" => {
        if let Some(color) = absorb_value::<CssColor>(value, options)? {
          self.color = Some(color);
        }
      }
      "background-image" => {
        if let Some(image) = absorb_value::<Image>(value, options)? {
          self.current_layer().image = Some(image);
        }
      }
      "background-position" => {
        if let Some(position) = absorb_value::<BackgroundPosition>(value, options)? {
          self.current_layer().position = Some(position);
        }
      }
      "background-size" => {
        if let Some(size) = absorb_value::<BackgroundSize>(value, options)? {
          self.current_layer().size = Some(size);
        }
      }
      "background-repeat" => {
        if let Some(repeat) = absorb_value::<BackgroundRepeat>(value, options)? {
          self.current_layer().repeat = Some(repeat);
        }
      }
      "background-attachment" => {
        if let Some(attachment) = absorb_keyword(value, options, BackgroundAttachment::from_ident)? {
          self.current_layer().attachment = Some(attachment);
        }
      }
      "background-origin" => {
        if let Some(origin) = absorb_keyword(value, options, BackgroundBox::from_ident)? {
          self.current_layer().origin = Some(origin);
        }
      }
      "background-clip" => {
        if let Some(clip) = absorb_keyword(value, options, BackgroundClip::from_ident)? {
          self.current_layer().clip = Some(clip);
        }
      }
      _ => irrelevant_property(property, options)?,
    }

    Ok(())
  }

  /// Applies a list of declarations in order.
  pub fn absorb_all(&mut self, declarations: &[Declaration], options: &FruitOptions) -> Result<(), Error<FruitError>> {
    for declaration in declarations {
      self.absorb(&declaration.property, &declaration.value, options)?;
    }
    Ok(())
  }
}

fn absorb_value<T: Fruit>(value: &str, options: &FruitOptions) -> Result<Option<T>, Error<FruitError>> {
  match T::parse_string(value) {
    Ok(value) => Ok(Some(value)),
    Err(err) if options.throw_errors => Err(err),
    Err(err) => {
      log::debug!("skipping invalid <{}> '{}': {}", T::KIND, value, err);
      Ok(None)
    }
  }
}

pub(crate) fn absorb_keyword<T>(
  value: &str,
  options: &FruitOptions,
  from_ident: fn(&str) -> Option<T>,
) -> Result<Option<T>, Error<FruitError>> {
  if let Some(keyword) = from_ident(value.trim()) {
    return Ok(Some(keyword));
  }

  let err = Error {
    kind: FruitError::InvalidComponent {
      fruit: FruitKind::Background,
      value: value.trim().to_owned(),
    },
    fruit: Some(FruitKind::Background),
    loc: None,
  };
  if options.throw_errors {
    return Err(err);
  }
  log::debug!("skipping invalid keyword '{}': {}", value, err);
  Ok(None)
}

impl Fruit for Background {
  const KIND: FruitKind = FruitKind::Background;
  const DEEP_LEVEL: ParseDeepLevel = ParseDeepLevel::Shorthand;
  type State = BackgroundState;

  fn analyze_in_loop(
    &mut self,
    state: &mut BackgroundState,
    token: &ValueToken,
    stem: &mut Stem,
  ) -> Result<LoopControl, Error<FruitError>> {
    if token.is_skippable() {
      return Ok(LoopControl::Next);
    }

    let after_position = std::mem::take(&mut state.after_position);

    if token.kind == TokenKind::Div {
      return match token.text.as_str() {
        "," => {
          self.next_layer(state, stem)?;
          Ok(LoopControl::Next)
        }
        "/" if after_position => {
          stem.advance();
          let size = analyze_component::<BackgroundSize>(stem, token)?;
          self.current_layer().size = Some(size);
          Ok(LoopControl::Stay)
        }
        delim => Err(Error::new(FruitError::UnexpectedDelimiter(delim.to_owned()))),
      };
    }

    let component = match LayerComponent::classify(token) {
      Some(component) => component,
      None => return Ok(LoopControl::Break),
    };

    let control = match component {
      LayerComponent::Color => {
        if self.color.is_some() {
          return Err(duplicate(token));
        }
        self.color = Some(analyze_component::<CssColor>(stem, token)?);
        LoopControl::Stay
      }
      LayerComponent::Image => {
        if self.current_layer().image.is_some() {
          return Err(duplicate(token));
        }
        let image = analyze_component::<Image>(stem, token)?;
        self.current_layer().image = Some(image);
        LoopControl::Stay
      }
      LayerComponent::Position => {
        if self.current_layer().position.is_some() {
          return Err(duplicate(token));
        }
        let position = analyze_component::<BackgroundPosition>(stem, token)?;
        self.current_layer().position = Some(position);
        state.after_position = true;
        LoopControl::Stay
      }
      LayerComponent::Repeat => {
        if self.current_layer().repeat.is_some() {
          return Err(duplicate(token));
        }
        let repeat = analyze_component::<BackgroundRepeat>(stem, token)?;
        self.current_layer().repeat = Some(repeat);
        LoopControl::Stay
      }
      LayerComponent::Attachment(attachment) => {
        let layer = self.current_layer();
        if layer.attachment.is_some() {
          return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone())));
        }
        layer.attachment = Some(attachment);
        LoopControl::Next
      }
      LayerComponent::Box(value) => {
        let layer = self.current_layer();
        // The first `<box>` keyword is the origin, anything after it the clip.
        match (value.as_box(), layer.origin) {
          (Some(origin), None) => layer.origin = Some(origin),
          _ if layer.clip.is_none() => layer.clip = Some(value),
          _ => return Err(Error::new(FruitError::ExcessiveKeyword(token.text.clone()))),
        }
        LoopControl::Next
      }
    };

    state.valid = true;
    Ok(control)
  }
}

impl ToCss for Background {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    if self.layers.is_empty() {
      return match &self.color {
        Some(color) => color.to_css(dest),
        None => dest.write_str("none"),
      };
    }

    let last = self.layers.len() - 1;
    for (i, layer) in self.layers.iter().enumerate() {
      if i > 0 {
        dest.delim(',', false)?;
      }
      let color = if i == last { self.color.as_ref() } else { None };
      layer.to_css_with_color(color, dest)?;
    }
    Ok(())
  }
}
