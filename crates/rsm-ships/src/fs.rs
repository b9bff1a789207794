//! File helpers. Ship files use `.json`; fleet files use `.json` or
//! `.json.gz`.
//!
//! Writes create or truncate the target. I/O failures are returned as
//! [`BlueprintError::Io`](crate::BlueprintError::Io) without retry.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::codec::{
    decode_blueprint, decode_fleet, decode_fleet_compressed, decode_ship, encode_fleet,
    encode_fleet_compressed, encode_ship,
};
use crate::compress::{Decompress, Gzip};
use crate::detect::is_fleet;
use crate::error::Result;
use crate::model::{Blueprint, Fleet, Ship};

fn read(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    trace!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Reads a ship file; blocks without an ident are dropped.
pub fn read_ship(path: impl AsRef<Path>) -> Result<Ship> {
    decode_ship(&read(path.as_ref())?)
}

pub fn write_ship(path: impl AsRef<Path>, ship: &Ship) -> Result<()> {
    write(path.as_ref(), &encode_ship(ship))
}

/// Plain JSON files only; see [`is_fleet`].
pub fn is_fleet_file(path: impl AsRef<Path>) -> Result<bool> {
    is_fleet(&read(path.as_ref())?)
}

/// Reads a plain or gzip-compressed fleet file.
pub fn read_fleet(path: impl AsRef<Path>) -> Result<Fleet> {
    let bytes = read(path.as_ref())?;
    if Gzip::is_gzip(&bytes) {
        decode_fleet_compressed(&bytes)
    } else {
        decode_fleet(&bytes)
    }
}

pub fn write_fleet(path: impl AsRef<Path>, fleet: &Fleet) -> Result<()> {
    write(path.as_ref(), &encode_fleet(fleet))
}

/// Writes a gzip fleet file at maximum compression. The game reads these
/// even though it only writes plain JSON itself.
pub fn write_fleet_gzip(path: impl AsRef<Path>, fleet: &Fleet) -> Result<()> {
    write(path.as_ref(), &encode_fleet_compressed(fleet)?)
}

/// Reads either kind of blueprint file, compressed or not.
pub fn read_blueprint(path: impl AsRef<Path>) -> Result<Blueprint> {
    let bytes = read(path.as_ref())?;
    if Gzip::is_gzip(&bytes) {
        decode_blueprint(&Gzip::default().decompress(&bytes)?)
    } else {
        decode_blueprint(&bytes)
    }
}
