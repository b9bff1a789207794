//! Blueprint error type.

use std::io;

use rsm_json::JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Bytes did not match the record shape. `kind` names the record
    /// (`"ship"`, `"fleet"`, `"format probe"`); the source names the field
    /// or position that failed.
    #[error("invalid {kind}: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: JsonError,
    },
    /// A builder was given NaN or an infinity, which JSON cannot represent.
    #[error("non-finite {field}")]
    NonFinite { field: &'static str },
}

impl BlueprintError {
    pub(crate) fn decode(kind: &'static str, source: JsonError) -> Self {
        BlueprintError::Decode { kind, source }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, BlueprintError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
