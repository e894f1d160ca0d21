//! String escape decoding, including `\u` hex escapes and surrogate pairs.
//!
//! [`decode_escape`] is entered with the cursor just past a backslash and
//! returns the decoded character. Four-digit hex escapes are accumulated a
//! digit at a time into a `u32`; a high surrogate must be followed
//! immediately by a `\u`-escaped low surrogate, and the two combine into one
//! scalar value.

use crate::{cursor::Cursor, error::ErrorKind};

const SURROGATE_HIGH: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const SURROGATE_LOW: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some((c as u32) - ('0' as u32)),
        'a'..='f' => Some((c as u32) - ('a' as u32) + 10),
        'A'..='F' => Some((c as u32) - ('A' as u32) + 10),
        _ => None,
    }
}

/// Reads exactly four hex digits and returns the accumulated code unit.
///
/// Fails with [`ErrorKind::InvalidUnicodeHex`] on a non-hex character or when
/// fewer than four characters remain; the cursor stops at the offending
/// position.
fn hex4(cur: &mut Cursor<'_>) -> Result<u32, ErrorKind> {
    let mut acc = 0u32;
    for _ in 0..4 {
        let d = cur
            .peek()
            .and_then(hex_val)
            .ok_or(ErrorKind::InvalidUnicodeHex)?;
        cur.bump();
        acc = (acc << 4) | d;
    }
    Ok(acc)
}

/// Decodes one escape sequence following a backslash.
///
/// The recognized single-character escapes are `b f n r t v \ " /`; `\u`
/// begins a four-digit hex escape. An unrecognized escape character fails
/// with [`ErrorKind::InvalidStringEscape`] and end of input fails with
/// [`ErrorKind::InvalidValue`], matching the enclosing string contract.
pub(crate) fn decode_escape(cur: &mut Cursor<'_>) -> Result<char, ErrorKind> {
    let Some(c) = cur.peek() else {
        // Input ended mid-escape.
        return Err(ErrorKind::InvalidValue);
    };
    let decoded = match c {
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{000B}',
        '\\' => '\\',
        '"' => '"',
        '/' => '/',
        'u' => {
            cur.bump();
            return decode_unicode(cur);
        }
        _ => return Err(ErrorKind::InvalidStringEscape),
    };
    cur.bump();
    Ok(decoded)
}

/// Decodes the hex portion of a `\u` escape, combining surrogate pairs.
fn decode_unicode(cur: &mut Cursor<'_>) -> Result<char, ErrorKind> {
    let unit = hex4(cur)?;
    if SURROGATE_LOW.contains(&unit) {
        return Err(ErrorKind::InvalidUnicodeSurrogate);
    }
    if SURROGATE_HIGH.contains(&unit) {
        // A high surrogate is only meaningful with a low surrogate escaped
        // right behind it.
        if !(cur.eat('\\') && cur.eat('u')) {
            return Err(ErrorKind::InvalidUnicodeSurrogate);
        }
        let low = hex4(cur)?;
        if !SURROGATE_LOW.contains(&low) {
            return Err(ErrorKind::InvalidUnicodeSurrogate);
        }
        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or(ErrorKind::InvalidUnicodeSurrogate);
    }
    char::from_u32(unit).ok_or(ErrorKind::InvalidUnicodeSurrogate)
}
