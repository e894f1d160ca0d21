//! The number lexer.
//!
//! Matches the JSON numeric grammar over the raw bytes of the remaining
//! input, then converts the matched slice with the platform's text-to-double
//! conversion:
//!
//! ```text
//! number := '-'? int frac? exp?
//! int    := '0' | [1-9] digit*
//! frac   := '.' digit+
//! exp    := [eE] [+-]? digit+
//! ```

use crate::{cursor::Cursor, error::ErrorKind};

/// Lexes one numeric literal and converts it to a double.
///
/// The cursor consumes exactly the matched bytes on success; anything after
/// the literal is left for the caller. On a grammar violation the cursor
/// stops at the offending byte and the lexer fails with
/// [`ErrorKind::InvalidValue`].
pub(crate) fn parse_number(cur: &mut Cursor<'_>) -> Result<f64, ErrorKind> {
    let rest = cur.rest();
    let bytes = rest.as_bytes();
    let mut i = 0;

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        // A leading zero stands alone: `0123` lexes as `0` and leaves `123`.
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => {
            cur.advance(i);
            return Err(ErrorKind::InvalidValue);
        }
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            cur.advance(i);
            return Err(ErrorKind::InvalidValue);
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            cur.advance(i);
            return Err(ErrorKind::InvalidValue);
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    // Overflow saturates to infinity in the platform conversion, which is
    // accepted; a conversion failure is a malformed value.
    let number = rest[..i].parse::<f64>().map_err(|_| ErrorKind::InvalidValue)?;
    cur.advance(i);
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::parse_number;
    use crate::{cursor::Cursor, error::ErrorKind};

    fn lex(text: &str) -> Result<(f64, usize), ErrorKind> {
        let mut cur = Cursor::new(text);
        parse_number(&mut cur).map(|n| (n, cur.offset()))
    }

    #[test]
    fn integers() {
        assert_eq!(lex("0"), Ok((0.0, 1)));
        assert_eq!(lex("1"), Ok((1.0, 1)));
        assert_eq!(lex("7890"), Ok((7890.0, 4)));
        assert_eq!(lex("-12"), Ok((-12.0, 3)));
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let (n, _) = lex("-0").unwrap();
        assert_eq!(n, 0.0);
        assert!(n.is_sign_negative());
    }

    #[test]
    fn fractions_and_exponents() {
        assert_eq!(lex("3.14"), Ok((3.14, 4)));
        assert_eq!(lex("1e10"), Ok((1e10, 4)));
        assert_eq!(lex("1E10"), Ok((1e10, 4)));
        assert_eq!(lex("1e+1"), Ok((10.0, 4)));
        assert_eq!(lex("-1.5e-3"), Ok((-1.5e-3, 7)));
    }

    #[test]
    fn stops_at_the_first_non_numeric_byte() {
        assert_eq!(lex("0123"), Ok((0.0, 1)));
        assert_eq!(lex("12,"), Ok((12.0, 2)));
        assert_eq!(lex("1e1.5"), Ok((10.0, 3)));
    }

    #[test]
    fn rejects_missing_digits() {
        assert_eq!(lex(""), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("-"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("+1"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex(".5"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("1."), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("1.e5"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("1e"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("1e+"), Err(ErrorKind::InvalidValue));
        assert_eq!(lex("-a"), Err(ErrorKind::InvalidValue));
    }

    #[test]
    fn huge_exponent_saturates() {
        let (n, _) = lex("1e400").unwrap();
        assert!(n.is_infinite());
        let (n, _) = lex("-1e400").unwrap();
        assert!(n.is_infinite() && n.is_sign_negative());
    }

    #[test]
    fn matches_the_platform_conversion() {
        for lit in ["0", "-0", "3.14", "1e10", "-1.5e-3", "2.2250738585072014e-308"] {
            let (n, consumed) = lex(lit).unwrap();
            assert_eq!(consumed, lit.len());
            assert_eq!(n.to_bits(), lit.parse::<f64>().unwrap().to_bits(), "{lit}");
        }
    }
}
