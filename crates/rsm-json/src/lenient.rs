//! `serde_json` entry points that understand hex integer literals.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::JsonError;
use super::hex::{escape_hex_literals, restore_hex_literals};

/// Deserializes `T` from producer-form JSON bytes.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonError> {
    let escaped = escape_hex_literals(bytes)?;
    Ok(serde_json::from_slice(&escaped)?)
}

/// Serializes `value` to compact JSON, writing hex literals back as bare
/// tokens.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    let json = serde_json::to_string(value)?;
    Ok(restore_hex_literals(&json).into_owned())
}

/// Same as [`to_string`], as bytes.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, JsonError> {
    to_string(value).map(String::into_bytes)
}
