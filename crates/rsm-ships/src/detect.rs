//! Fleet/ship format detection.

use log::debug;

use crate::error::{BlueprintError, Result};
use crate::model::FormatProbe;

/// `true` when `bytes` hold a fleet file.
///
/// Only the presence of a top-level `name` key is checked, whatever its
/// value. Anything else, including arrays and objects that look like
/// neither format, is reported as not a fleet. Fails when `bytes` are not
/// JSON or hold a bare scalar.
pub fn is_fleet(bytes: &[u8]) -> Result<bool> {
    let probe: FormatProbe =
        rsm_json::from_slice(bytes).map_err(|e| BlueprintError::decode("format probe", e))?;
    let fleet = probe.is_fleet();
    debug!("format probe: {}", if fleet { "fleet" } else { "ship" });
    Ok(fleet)
}
