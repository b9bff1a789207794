//! Byte scanning helpers shared by the hex passes.

use super::error::JsonError;

/// Index of the `"` closing the string literal whose body starts at `start`.
///
/// A backslash always consumes the byte after it, so `\"` stays inside the
/// literal and `\\` does not escape what follows. Fails with the input
/// length when the literal never closes.
pub(crate) fn closing_quote(data: &[u8], start: usize) -> Result<usize, JsonError> {
    let mut escaped = false;
    for (offset, &b) in data.iter().enumerate().skip(start) {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Ok(offset),
            _ => {}
        }
    }
    Err(JsonError::Invalid(data.len()))
}

/// End (exclusive) of the bare token starting at `x`: numbers, literals and
/// the producer's hex integers.
pub(crate) fn token_end(data: &[u8], x: usize) -> usize {
    let mut end = x + 1;
    while end < data.len() && is_token_byte(data[end]) {
        end += 1;
    }
    end
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-')
}
