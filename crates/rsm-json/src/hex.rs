//! Hexadecimal integer literals.
//!
//! Reassembly serializes some integers as bare `0x..` tokens, which the JSON
//! grammar rejects. Before parsing, every such token is rewritten into a
//! string literal that starts with the escape `\u0023` (`#`); after
//! serializing, those strings are turned back into bare tokens. `serde_json`
//! never writes `#` as `\u0023` itself, so the reserved form cannot collide
//! with a typed string field.

use std::borrow::Cow;

use super::error::JsonError;
use super::util::{closing_quote, token_end};

/// Opening of a string literal carrying a hex token.
pub(crate) const HEX_MARKER: &str = "\\u0023";

/// Returns `true` for tokens of the form `-?0[xX][0-9a-fA-F]+`.
pub fn is_hex_literal(token: &str) -> bool {
    is_hex_token(token.as_bytes())
}

fn is_hex_token(token: &[u8]) -> bool {
    let digits = match token {
        [b'-', rest @ ..] => rest,
        _ => token,
    };
    match digits {
        [b'0', b'x' | b'X', hex @ ..] => !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit),
        _ => false,
    }
}

/// Parses a decimal or hexadecimal integer token.
///
/// Returns `None` for anything else, including floats and quoted strings.
pub fn parse_int_literal(token: &str) -> Option<i64> {
    let token = token.trim();
    if !is_hex_literal(token) {
        return token.parse().ok();
    }
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let magnitude = i64::from_str_radix(&unsigned[2..], 16).ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

/// Rewrites every bare hex token outside string literals into its reserved
/// string form.
///
/// Input without hex tokens is returned borrowed. Fails only on an
/// unterminated string literal.
pub fn escape_hex_literals(input: &[u8]) -> Result<Cow<'_, [u8]>, JsonError> {
    let mut out: Option<Vec<u8>> = None;
    let mut copied = 0;
    let mut x = 0;
    while x < input.len() {
        match input[x] {
            b'"' => x = closing_quote(input, x + 1)? + 1,
            b'-' | b'0'..=b'9' => {
                let end = token_end(input, x);
                let token = &input[x..end];
                if is_hex_token(token) {
                    let buf = out.get_or_insert_with(|| Vec::with_capacity(input.len() + 32));
                    buf.extend_from_slice(&input[copied..x]);
                    buf.push(b'"');
                    buf.extend_from_slice(HEX_MARKER.as_bytes());
                    buf.extend_from_slice(token);
                    buf.push(b'"');
                    copied = end;
                }
                x = end;
            }
            _ => x += 1,
        }
    }
    Ok(match out {
        None => Cow::Borrowed(input),
        Some(mut buf) => {
            buf.extend_from_slice(&input[copied..]);
            Cow::Owned(buf)
        }
    })
}

/// Turns reserved hex strings back into bare tokens.
///
/// Only string literals whose entire body is the marker followed by a hex
/// token are rewritten; everything else is copied verbatim.
pub fn restore_hex_literals(text: &str) -> Cow<'_, str> {
    if !text.contains(HEX_MARKER) {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut x = 0;
    while x < bytes.len() {
        if bytes[x] != b'"' {
            x += 1;
            continue;
        }
        let Ok(end) = closing_quote(bytes, x + 1) else {
            break;
        };
        if let Some(token) = text[x + 1..end].strip_prefix(HEX_MARKER) {
            if is_hex_literal(token) {
                out.push_str(&text[copied..x]);
                out.push_str(token);
                copied = end + 1;
            }
        }
        x = end + 1;
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}
