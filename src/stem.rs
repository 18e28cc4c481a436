//! Value token streams.
//!
//! Values are split into tokens by [cssparser](cssparser), then adapted into a flat
//! stream of [ValueToken](ValueToken)s: words, strings, delimiters, spaces, comments,
//! and functions that carry their arguments as a nested stream. Analyzers walk the
//! stream through a [Stem](Stem) cursor, which only ever moves forward.

use cssparser::{ParseError, Parser, ParserInput, Token};
use std::rc::Rc;

/// The kind of a [ValueToken](ValueToken).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// An identifier, number, dimension, percentage, hash, or any other bare run of text.
  Word,
  /// A quoted string.
  String,
  /// A `,`, `/` or `:` delimiter.
  Div,
  /// A run of whitespace.
  Space,
  /// A `/* ... */` comment.
  Comment,
  /// A function or a bare parenthesized block.
  Function,
}

/// A single token of a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueToken {
  /// The kind of token.
  pub kind: TokenKind,
  /// The token text. Strings hold their unescaped contents, comments their body,
  /// and functions their name.
  pub text: String,
  /// The byte offset of the token within the value.
  pub source_offset: usize,
  /// Whitespace before a delimiter, or after the opening parenthesis of a function.
  pub before: String,
  /// Whitespace after a delimiter, or before the closing parenthesis of a function.
  pub after: String,
  /// The quote character of a string.
  pub quote: Option<char>,
  /// Whether a function was left unclosed at the end of input.
  pub unclosed: bool,
  /// The arguments of a function.
  pub children: Rc<[ValueToken]>,
}

impl ValueToken {
  /// Creates a token without surrounding whitespace or children.
  pub fn new<S: Into<String>>(kind: TokenKind, text: S, source_offset: usize) -> ValueToken {
    ValueToken {
      kind,
      text: text.into(),
      source_offset,
      before: String::new(),
      after: String::new(),
      quote: None,
      unclosed: false,
      children: Rc::from(Vec::new()),
    }
  }

  /// Returns whether this is a space or a comment.
  #[inline]
  pub fn is_skippable(&self) -> bool {
    matches!(self.kind, TokenKind::Space | TokenKind::Comment)
  }

  /// Returns whether this is a word matching the keyword, ignoring ASCII case.
  pub fn is_keyword(&self, keyword: &str) -> bool {
    self.kind == TokenKind::Word && self.text.eq_ignore_ascii_case(keyword)
  }

  /// Returns whether this is a function with the given name, ignoring ASCII case.
  pub fn is_function(&self, name: &str) -> bool {
    self.kind == TokenKind::Function && self.text.eq_ignore_ascii_case(name)
  }

  /// Returns whether this is the given delimiter.
  pub fn is_div(&self, delim: &str) -> bool {
    self.kind == TokenKind::Div && self.text == delim
  }

  /// Returns the arguments of a function, without spaces and comments.
  pub fn arguments(&self) -> impl Iterator<Item = &ValueToken> {
    self.children.iter().filter(|token| !token.is_skippable())
  }
}

/// Splits a value into tokens.
pub fn tokenize(value: &str) -> Vec<ValueToken> {
  let mut input = ParserInput::new(value);
  let mut parser = Parser::new(&mut input);
  collect_tokens(&mut parser)
}

fn collect_tokens<'i, 't>(parser: &mut Parser<'i, 't>) -> Vec<ValueToken> {
  let mut tokens: Vec<ValueToken> = Vec::new();

  loop {
    let start = parser.position();
    let offset = start.byte_index();
    let token = match parser.next_including_whitespace_and_comments() {
      Ok(token) => token.clone(),
      Err(_) => break,
    };

    let value_token = match token {
      Token::WhiteSpace(space) => {
        // Whitespace right after a delimiter belongs to the delimiter.
        if let Some(div) = tokens
          .last_mut()
          .filter(|last| last.kind == TokenKind::Div && last.after.is_empty())
        {
          div.after.push_str(space);
          continue;
        }
        ValueToken::new(TokenKind::Space, space, offset)
      }
      Token::Comment(comment) => ValueToken::new(TokenKind::Comment, comment, offset),
      Token::QuotedString(ref value) => {
        let mut string = ValueToken::new(TokenKind::String, value.as_ref(), offset);
        string.quote = parser.slice_from(start).chars().next();
        string
      }
      Token::Comma => div_token(&mut tokens, ",", offset),
      Token::Colon => div_token(&mut tokens, ":", offset),
      Token::Delim('/') => div_token(&mut tokens, "/", offset),
      Token::Function(ref name) => function_token(parser, name.to_string(), offset),
      Token::ParenthesisBlock => function_token(parser, String::new(), offset),
      Token::UnquotedUrl(ref url) => url_token(parser.slice_from(start), url.as_ref(), offset),
      Token::SquareBracketBlock | Token::CurlyBracketBlock => {
        // The block is kept as one opaque word. Its contents are skipped, and the
        // closure never fails, so there is no error to report.
        parser
          .parse_nested_block(|input| {
            while input.next_including_whitespace_and_comments().is_ok() {}
            Ok::<_, ParseError<'i, ()>>(())
          })
          .ok();
        ValueToken::new(TokenKind::Word, parser.slice_from(start), offset)
      }
      _ => ValueToken::new(TokenKind::Word, parser.slice_from(start), offset),
    };

    tokens.push(value_token);
  }

  tokens
}

fn div_token(tokens: &mut Vec<ValueToken>, text: &str, offset: usize) -> ValueToken {
  let mut div = ValueToken::new(TokenKind::Div, text, offset);
  // Whitespace right before a delimiter belongs to the delimiter.
  if tokens.last().map_or(false, |last| last.kind == TokenKind::Space) {
    if let Some(space) = tokens.pop() {
      div.before = space.text;
    }
  }
  div
}

fn function_token<'i, 't>(parser: &mut Parser<'i, 't>, name: String, offset: usize) -> ValueToken {
  let nested = parser.parse_nested_block(|input| {
    let children = collect_tokens(input);
    Ok::<_, ParseError<'i, ()>>((children, input.position().byte_index()))
  });
  let end = parser.position().byte_index();
  let (mut children, inner_end) = match nested {
    Ok(nested) => nested,
    Err(_) => (Vec::new(), end),
  };

  let mut function = ValueToken::new(TokenKind::Function, name, offset);
  // The closing parenthesis is the only thing consumed after the block contents.
  function.unclosed = end == inner_end;
  if children.first().map_or(false, |first| first.kind == TokenKind::Space) {
    function.before = children.remove(0).text;
  }
  if children.last().map_or(false, |last| last.kind == TokenKind::Space) {
    if let Some(space) = children.pop() {
      function.after = space.text;
    }
  }
  function.children = children.into();
  function
}

fn url_token(source: &str, url: &str, offset: usize) -> ValueToken {
  let open = source.find('(').map_or(source.len(), |i| i + 1);
  let name = source[..open].trim_end_matches('(');
  let body = &source[open..];
  let unclosed = !body.ends_with(')');
  let body = body.strip_suffix(')').unwrap_or(body);
  let trimmed_start = body.trim_start();
  let before = &body[..body.len() - trimmed_start.len()];
  let after = &trimmed_start[trimmed_start.trim_end().len()..];

  let mut function = ValueToken::new(TokenKind::Function, name, offset);
  function.unclosed = unclosed;
  function.before = before.to_owned();
  function.after = after.to_owned();
  function.children = Rc::from(vec![ValueToken::new(
    TokenKind::Word,
    url,
    offset + open + before.len(),
  )]);
  function
}

/// A forward-only cursor over a token stream.
#[derive(Debug, Clone)]
pub struct Stem {
  nodes: Rc<[ValueToken]>,
  pos: usize,
}

impl Stem {
  /// Tokenizes a value and places the cursor on its first token.
  pub fn new(value: &str) -> Stem {
    Stem::from_tokens(tokenize(value))
  }

  /// Creates a cursor over already tokenized input, e.g. the arguments of a function.
  pub fn from_tokens<T: Into<Rc<[ValueToken]>>>(tokens: T) -> Stem {
    Stem {
      nodes: tokens.into(),
      pos: 0,
    }
  }

  /// Returns the current token.
  #[inline]
  pub fn head(&self) -> Option<&ValueToken> {
    self.nodes.get(self.pos)
  }

  /// Consumes the current token and returns the next one.
  pub fn advance(&mut self) -> Option<&ValueToken> {
    if self.pos < self.nodes.len() {
      self.pos += 1;
    }
    self.head()
  }

  /// Returns the index of the current token.
  #[inline]
  pub fn position(&self) -> usize {
    self.pos
  }

  /// Returns the tokens that have not been consumed yet.
  pub fn remaining(&self) -> &[ValueToken] {
    &self.nodes[self.pos..]
  }

  /// Returns whether only spaces and comments are left.
  pub fn is_exhausted(&self) -> bool {
    self.remaining().iter().all(ValueToken::is_skippable)
  }

  /// Returns a shared handle to the whole stream, so a token can be borrowed
  /// while the cursor itself is moved.
  pub(crate) fn nodes(&self) -> Rc<[ValueToken]> {
    Rc::clone(&self.nodes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn kinds(tokens: &[ValueToken]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
  }

  #[test]
  fn test_words_and_spaces() {
    use TokenKind::*;
    let tokens = tokenize("left 10% top -2.5em");
    assert_eq!(kinds(&tokens), vec![Word, Space, Word, Space, Word, Space, Word]);
    assert_eq!(tokens[2].text, "10%");
    assert_eq!(tokens[2].source_offset, 5);
    assert_eq!(tokens[6].text, "-2.5em");
    assert!(tokens[4].is_keyword("TOP"));
  }

  #[test]
  fn test_functions() {
    let tokens = tokenize("rgb( 1, 2 ,3 )");
    assert_eq!(tokens.len(), 1);
    let rgb = &tokens[0];
    assert!(rgb.is_function("rgb"));
    assert!(!rgb.unclosed);
    assert_eq!(rgb.before, " ");
    assert_eq!(rgb.after, " ");
    let children: Vec<&str> = rgb.children.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(children, vec!["1", ",", "2", ",", "3"]);
    assert_eq!(rgb.children[1].after, " ");
    assert_eq!(rgb.children[3].before, " ");
    assert_eq!(rgb.children[0].source_offset, 5);
  }

  #[test]
  fn test_unclosed_functions() {
    assert!(tokenize("rgb(1, 2, 3")[0].unclosed);
    assert!(tokenize("f(g()")[0].unclosed);
    assert!(!tokenize("f(g())")[0].unclosed);
    assert!(tokenize("url(\"a.png\"")[0].unclosed);
    assert!(tokenize("url(a.png")[0].unclosed);
  }

  #[test]
  fn test_urls() {
    let tokens = tokenize("url(img/a.png) url( 'b.png' )");
    assert_eq!(kinds(&tokens), vec![TokenKind::Function, TokenKind::Space, TokenKind::Function]);
    assert!(tokens[0].is_function("url"));
    assert_eq!(tokens[0].children[0].kind, TokenKind::Word);
    assert_eq!(tokens[0].children[0].text, "img/a.png");
    assert_eq!(tokens[2].children[0].kind, TokenKind::String);
    assert_eq!(tokens[2].children[0].quote, Some('\''));
    assert_eq!(tokens[2].children[0].text, "b.png");
  }

  #[test]
  fn test_delimiters_and_comments() {
    use TokenKind::*;
    let tokens = tokenize("left / cover, /* note */ \"x\"");
    assert_eq!(kinds(&tokens), vec![Word, Div, Word, Div, Comment, Space, String]);
    assert_eq!(tokens[1].before, " ");
    assert_eq!(tokens[1].after, " ");
    assert_eq!(tokens[3].text, ",");
    assert_eq!(tokens[4].text, " note ");
    assert_eq!(tokens[6].quote, Some('"'));
  }

  #[test]
  fn test_blocks_are_words() {
    use TokenKind::*;
    let tokens = tokenize("[a b] {c}");
    assert_eq!(kinds(&tokens), vec![Word, Space, Word]);
    assert_eq!(tokens[0].text, "[a b]");
    assert_eq!(tokens[2].text, "{c}");
    assert_eq!(tokens[2].source_offset, 6);
  }

  #[test]
  fn test_stem_cursor() {
    let mut stem = Stem::new("a b");
    assert_eq!(stem.head().map(|token| token.text.as_str()), Some("a"));
    stem.advance();
    assert!(!stem.is_exhausted());
    stem.advance();
    assert_eq!(stem.position(), 2);
    stem.advance();
    stem.advance();
    assert_eq!(stem.position(), 3);
    assert!(stem.head().is_none());
    assert!(stem.is_exhausted());
  }
}
