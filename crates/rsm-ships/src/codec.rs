//! Ship and fleet encoders/decoders.
//!
//! Decoding accepts the game's JSON dialect (hex integers, unknown keys);
//! encoding writes compact JSON with hex integers restored. Optional fields
//! that are absent, and the zero-means-unset fields (`angle` on a ship,
//! `bindingId`, command `faction`), are left out of the output.
//!
//! Floats are written with the shortest representation that reads back to
//! the same bits. NaN and infinities have no JSON form and come out as
//! `null`, which does not decode; the `Block` and `Ship` builders refuse
//! them, only direct field writes can get one in.

use serde::Serialize;

use crate::compress::{Compress, Decompress, Gzip};
use crate::detect::is_fleet;
use crate::error::{BlueprintError, Result};
use crate::model::{Blueprint, Fleet, Ship};

/// Decodes a ship file and drops blocks without an ident.
pub fn decode_ship(bytes: &[u8]) -> Result<Ship> {
    let ship: Ship = rsm_json::from_slice(bytes).map_err(|e| BlueprintError::decode("ship", e))?;
    Ok(ship.into_normalized())
}

/// Encodes `ship` as is; normalize first if needed.
///
/// Fields must hold finite floats for the output to decode again.
pub fn encode_ship(ship: &Ship) -> Vec<u8> {
    encode(ship)
}

/// Decodes a fleet file. Blueprints are not normalized, see
/// [`crate::normalize::normalize_fleet`].
pub fn decode_fleet(bytes: &[u8]) -> Result<Fleet> {
    rsm_json::from_slice(bytes).map_err(|e| BlueprintError::decode("fleet", e))
}

pub fn encode_fleet(fleet: &Fleet) -> Vec<u8> {
    encode(fleet)
}

/// [`encode_fleet`] followed by gzip at maximum compression.
pub fn encode_fleet_compressed(fleet: &Fleet) -> Result<Vec<u8>> {
    encode_fleet_compressed_with(fleet, &Gzip::BEST)
}

pub fn encode_fleet_compressed_with<C: Compress + ?Sized>(
    fleet: &Fleet,
    compressor: &C,
) -> Result<Vec<u8>> {
    Ok(compressor.compress(&encode_fleet(fleet))?)
}

/// Decompresses a gzip fleet file, then [`decode_fleet`].
pub fn decode_fleet_compressed(bytes: &[u8]) -> Result<Fleet> {
    decode_fleet_compressed_with(bytes, &Gzip::default())
}

pub fn decode_fleet_compressed_with<D: Decompress + ?Sized>(
    bytes: &[u8],
    decompressor: &D,
) -> Result<Fleet> {
    decode_fleet(&decompressor.decompress(bytes)?)
}

/// Detects the file kind and decodes accordingly. Ships are normalized,
/// fleets are not.
pub fn decode_blueprint(bytes: &[u8]) -> Result<Blueprint> {
    if is_fleet(bytes)? {
        decode_fleet(bytes).map(Blueprint::Fleet)
    } else {
        decode_ship(bytes).map(Blueprint::Ship)
    }
}

pub fn encode_blueprint(blueprint: &Blueprint) -> Vec<u8> {
    match blueprint {
        Blueprint::Ship(ship) => encode_ship(ship),
        Blueprint::Fleet(fleet) => encode_fleet(fleet),
    }
}

fn encode<T: Serialize>(value: &T) -> Vec<u8> {
    // Records hold only strings, numbers and raw values, which always serialize.
    rsm_json::to_vec(value).unwrap_or_default()
}
