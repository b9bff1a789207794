//! Read and write Reassembly blueprint files.
//!
//! A blueprint is either a single [`Ship`] or a [`Fleet`] of ships. Both are
//! JSON written in the game's dialect: integers such as block idents and
//! colors may appear as bare hex tokens, and command flags are a string for
//! one flag and an array for several. Such fields are kept as
//! [`OpaqueValue`]s so they come back out exactly as they went in.
//!
//! ```no_run
//! use rsm_ships::{codec, fs, normalize};
//!
//! let ship = fs::read_ship("interceptor.json")?;
//! let template = fs::read_fleet("tournament.json")?;
//! let fleet = normalize::assemble_fleet(&template, vec![ship]);
//! fs::write_fleet_gzip("entry.json.gz", &fleet)?;
//! assert!(!codec::encode_fleet(&fleet).is_empty());
//! # Ok::<(), rsm_ships::BlueprintError>(())
//! ```

pub mod codec;
pub mod compress;
pub mod detect;
mod error;
pub mod fs;
pub mod model;
pub mod normalize;

pub use codec::{
    decode_blueprint, decode_fleet, decode_fleet_compressed, decode_ship, encode_blueprint,
    encode_fleet, encode_fleet_compressed, encode_ship,
};
pub use compress::{Compress, Decompress, Gzip};
pub use detect::is_fleet;
pub use error::{BlueprintError, Result};
pub use model::{
    Block, Blueprint, Command, FireMode, Fleet, FormatProbe, Ship, ShipData, WeaponGroup,
};
pub use normalize::{assemble_fleet, normalize_fleet, remove_nil_ids};
pub use rsm_json::{JsonError, OpaqueValue};
