//! Error kinds and positional parse errors.

use std::fmt;

/// What went wrong while lexing or parsing a range script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  ExpectedLeftBracket,
  ExpectedRightBracket,
  ExpectedString,
  InvalidNumber,
  InvalidRange,
  InvertedRange,
  ExpectedSingleCharacter,
  UnexpectedEndOfInput,
  InvalidToken,
  StrayRightBracket,
  MissingRightBracket,
  UnexpectedToken,
}

impl ErrorKind {
  pub fn message(self) -> &'static str {
    match self {
      ErrorKind::ExpectedLeftBracket => "Expected left bracket.",
      ErrorKind::ExpectedRightBracket => "Expected right bracket.",
      ErrorKind::ExpectedString => "Expected a string.",
      ErrorKind::InvalidNumber => "Invalid number or out of bounds.",
      ErrorKind::InvalidRange => "The range is not valid.",
      ErrorKind::InvertedRange => "The range is inverted.",
      ErrorKind::ExpectedSingleCharacter => "Expected a single character.",
      ErrorKind::UnexpectedEndOfInput => "Unexpected end of input.",
      ErrorKind::InvalidToken => "Invalid token.",
      ErrorKind::StrayRightBracket => "Stray right bracket ')' without a matching '('.",
      ErrorKind::MissingRightBracket => "Missing right bracket ')'.",
      ErrorKind::UnexpectedToken => "Unexpected token.",
    }
  }
}

/// Parse failure carrying the byte offset into the source at which it
/// occurred. The caller owns turning the offset into a line number and
/// a readable snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
  pub kind: ErrorKind,
  pub offset: usize,
}

impl ParseError {
  pub fn new(kind: ErrorKind, offset: usize) -> Self {
    ParseError { kind, offset }
  }
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.kind.message())
  }
}

impl std::error::Error for ParseError {}

/// 1-based line number of a byte offset.
pub fn line_of(source: &str, offset: usize) -> usize {
  let offset = offset.min(source.len());
  source.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Split the line containing `offset` at the offset, for rendering
/// `before ERROR --> after`.
pub fn split_line(source: &str, offset: usize) -> (&str, &str) {
  let offset = offset.min(source.len());
  let start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
  let end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
  (&source[start..offset], &source[offset..end])
}
