//! Error taxonomy and the position-carrying parse error.
use thiserror::Error;

/// The reason a document failed to parse.
///
/// Kinds are mutually exclusive and first-match-wins: the parser halts at the
/// first error it encounters and every routine propagates the kind unchanged
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The input was empty or only whitespace where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// A malformed literal, number, or container token.
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace content followed the single root value.
    #[error("root is not singular")]
    RootNotSingular,
    /// An unrecognized character followed `\` in a string.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A `\u` escape was not followed by four hex digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A lone or malformed surrogate in a `\u` escape sequence.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// A colon, comma, or value appeared in an object with no pending key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing ':' after object key")]
    MissColon,
    /// An element or member was not followed by `,` or a closing bracket.
    #[error("expected ',' or closing bracket")]
    CommaOrCurlyBracket,
    /// An object repeated a key of an earlier member.
    #[error("duplicate object key")]
    DuplicateKey,
}

/// A parse failure with the position of the first unconsumed character.
///
/// `line` and `column` are 1-based and derived from the consumed prefix of
/// the input; lines are separated by line feeds and columns count characters,
/// not bytes.
///
/// # Examples
///
/// ```
/// use jsonprism::{parse, ErrorKind};
///
/// let err = parse("[1,\n2,]").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::InvalidValue);
/// assert_eq!((err.line, err.column), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset of the first unconsumed character.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure.
    pub column: usize,
}
