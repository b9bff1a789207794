//! [`OpaqueValue`]: a raw JSON value carried without interpretation.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use super::error::JsonError;
use super::hex::{escape_hex_literals, is_hex_literal, parse_int_literal, restore_hex_literals};

/// A single JSON value kept as its serialized text.
///
/// Used for fields whose type the producer does not keep stable: block
/// idents and colors that are sometimes hex tokens, command flags that are a
/// bare string for one flag and an array for several. Decoding accepts any
/// JSON shape; encoding writes the original text back unchanged. Hex tokens
/// are stored in their escaped form and restored by [`OpaqueValue::raw`] and
/// by [`crate::to_string`].
///
/// Two values are equal when their text is equal, so `1` and `1.0` differ.
#[derive(Clone)]
pub struct OpaqueValue(Box<RawValue>);

impl OpaqueValue {
    /// Builds a value from producer-form text, hex tokens allowed.
    pub fn from_raw(text: &str) -> Result<Self, JsonError> {
        let escaped = escape_hex_literals(text.as_bytes())?;
        let escaped = std::str::from_utf8(&escaped).map_err(|_| JsonError::InvalidUtf8)?;
        Ok(Self(RawValue::from_string(escaped.to_owned())?))
    }

    /// Builds a value from anything serializable.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, JsonError> {
        Ok(Self(serde_json::value::to_raw_value(value)?))
    }

    /// The value as the producer wrote it, hex tokens included.
    pub fn raw(&self) -> Cow<'_, str> {
        restore_hex_literals(self.0.get())
    }

    pub fn is_null(&self) -> bool {
        self.0.get() == "null"
    }

    pub fn is_hex_literal(&self) -> bool {
        is_hex_literal(&self.raw())
    }

    /// Integer reading of a decimal or hex scalar.
    pub fn as_int(&self) -> Option<i64> {
        parse_int_literal(&self.raw())
    }

    /// Interprets the value as `T`.
    ///
    /// Hex tokens nested in the value read as strings prefixed with `#`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, JsonError> {
        Ok(serde_json::from_str(self.0.get())?)
    }

    /// Interprets a value that is either one `T` or an array of `T`.
    pub fn decode_one_or_many<T: DeserializeOwned>(&self) -> Result<Vec<T>, JsonError> {
        if self.0.get().starts_with('[') {
            self.decode()
        } else {
            Ok(vec![self.decode()?])
        }
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.get() == other.0.get()
    }
}

impl Eq for OpaqueValue {}

impl Hash for OpaqueValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.get().hash(state);
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.raw()).finish()
    }
}

impl fmt::Display for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl FromStr for OpaqueValue {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw(s)
    }
}

impl Serialize for OpaqueValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OpaqueValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(Self)
    }
}
