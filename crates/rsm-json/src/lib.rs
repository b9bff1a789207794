//! Lenient JSON layer for Reassembly blueprint files.
//!
//! The game writes JSON that is *almost* standard: integers such as block
//! idents and colors are sometimes emitted as bare hexadecimal tokens
//! (`0x2a4d6b`), and a few fields change shape between a scalar and an array
//! depending on how many entries they hold. This crate makes such documents
//! readable by `serde_json` and writes them back in the producer's form.
//!
//! - [`escape_hex_literals`] / [`restore_hex_literals`] move hex tokens in and
//!   out of a reserved string form that standard JSON accepts.
//! - [`OpaqueValue`] carries one raw JSON value through a decode/encode cycle
//!   without committing to a type.
//! - [`from_slice`] / [`to_string`] wrap `serde_json` with both passes.

mod error;
mod hex;
mod lenient;
mod opaque;
mod util;

pub use error::JsonError;
pub use hex::{escape_hex_literals, is_hex_literal, parse_int_literal, restore_hex_literals};
pub use lenient::{from_slice, to_string, to_vec};
pub use opaque::OpaqueValue;
