//! The recursive-descent grammar routines and the [`parse`] entry point.
//!
//! One routine per grammar production, all sharing a [`Cursor`]. Dispatch is
//! by lookahead character: `n`/`t`/`f` route to exact literal matches, `"`
//! to the string parser, `[`/`{` to the container parsers, and everything
//! else to the number lexer (which rejects non-numeric input). Containers
//! recurse through [`parse_value`] for each element or member value.
//!
//! Routines return a bare [`ErrorKind`]; the entry point attaches the
//! cursor's position to build the public [`ParseError`].

use alloc::string::String;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    escape::decode_escape,
    number::parse_number,
    value::{Array, Map, Value},
};

/// Parses one JSON document into a [`Value`] tree.
///
/// The input must contain exactly one value, optionally surrounded by
/// whitespace. On failure the error carries the kind and the position of the
/// first unconsumed character; no partial value is returned.
///
/// # Errors
///
/// Returns a [`ParseError`] whose [`ErrorKind`] identifies the first
/// violation encountered.
///
/// # Examples
///
/// ```
/// use jsonprism::{parse, ErrorKind, Value};
///
/// let value = parse(r#"[1, "two", null]"#).unwrap();
/// assert_eq!(value.element(1), Some(&Value::String("two".into())));
///
/// let err = parse("true false").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::RootNotSingular);
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut cur = Cursor::new(text);
    parse_document(&mut cur).map_err(|kind| {
        let (line, column) = cur.line_column();
        ParseError {
            kind,
            offset: cur.offset(),
            line,
            column,
        }
    })
}

fn parse_document(cur: &mut Cursor<'_>) -> Result<Value, ErrorKind> {
    cur.skip_whitespace();
    let value = parse_value(cur)?;
    cur.skip_whitespace();
    if !cur.is_at_end() {
        return Err(ErrorKind::RootNotSingular);
    }
    Ok(value)
}

/// Routes on the current character to the production it begins.
fn parse_value(cur: &mut Cursor<'_>) -> Result<Value, ErrorKind> {
    match cur.peek() {
        None => Err(ErrorKind::ExpectValue),
        Some('n') => parse_literal(cur, "null", Value::Null),
        Some('t') => parse_literal(cur, "true", Value::Boolean(true)),
        Some('f') => parse_literal(cur, "false", Value::Boolean(false)),
        Some('"') => parse_string(cur).map(Value::String),
        Some('[') => parse_array(cur),
        Some('{') => parse_object(cur),
        Some(_) => parse_number(cur).map(Value::Number),
    }
}

/// Matches `literal` exactly, consuming it whole or nothing at all.
fn parse_literal(
    cur: &mut Cursor<'_>,
    literal: &'static str,
    value: Value,
) -> Result<Value, ErrorKind> {
    if cur.rest().starts_with(literal) {
        cur.advance(literal.len());
        Ok(value)
    } else {
        Err(ErrorKind::InvalidValue)
    }
}

/// Parses a string token and returns its decoded payload.
///
/// Also used by the object parser for keys, which is why it returns the raw
/// `String` rather than a [`Value`].
fn parse_string(cur: &mut Cursor<'_>) -> Result<String, ErrorKind> {
    match cur.peek() {
        None => return Err(ErrorKind::ExpectValue),
        Some('"') => {
            cur.bump();
        }
        Some(_) => return Err(ErrorKind::InvalidValue),
    }
    let mut decoded = String::new();
    loop {
        match cur.bump() {
            // Input ended before the closing quote.
            None => return Err(ErrorKind::InvalidValue),
            Some('"') => return Ok(decoded),
            Some('\\') => decoded.push(decode_escape(cur)?),
            Some(c) => decoded.push(c),
        }
    }
}

fn parse_array(cur: &mut Cursor<'_>) -> Result<Value, ErrorKind> {
    cur.bump(); // consume '['
    cur.skip_whitespace();
    let mut elements = Array::new();
    if cur.eat(']') {
        return Ok(Value::Array(elements));
    }
    loop {
        // A comma must be followed by a value, so a trailing comma fails in
        // dispatch: `]` lexes as a malformed number, end of input as a
        // missing value.
        elements.push(parse_value(cur)?);
        cur.skip_whitespace();
        if cur.eat(',') {
            cur.skip_whitespace();
        } else if cur.eat(']') {
            return Ok(Value::Array(elements));
        } else {
            return Err(ErrorKind::CommaOrCurlyBracket);
        }
    }
}

fn parse_object(cur: &mut Cursor<'_>) -> Result<Value, ErrorKind> {
    cur.bump(); // consume '{'
    cur.skip_whitespace();
    let mut members = Map::new();
    if cur.eat('}') {
        return Ok(Value::Object(members));
    }
    loop {
        // Member position: only a string token can open a key. A colon,
        // comma, closing brace, or non-string value here has no pending key.
        if cur.peek() != Some('"') {
            return Err(ErrorKind::MissKey);
        }
        let key = parse_string(cur)?;
        cur.skip_whitespace();
        if !cur.eat(':') {
            return Err(ErrorKind::MissColon);
        }
        cur.skip_whitespace();
        let value = parse_value(cur)?;
        if members.iter().any(|(existing, _)| *existing == key) {
            return Err(ErrorKind::DuplicateKey);
        }
        members.push((key, value));
        cur.skip_whitespace();
        if cur.eat(',') {
            cur.skip_whitespace();
        } else if cur.eat('}') {
            return Ok(Value::Object(members));
        } else {
            return Err(ErrorKind::CommaOrCurlyBracket);
        }
    }
}
