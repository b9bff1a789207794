//! Compression collaborators for `.json.gz` fleet files.

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Leading bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub trait Compress {
    fn compress(&self, bytes: &[u8]) -> io::Result<Vec<u8>>;
}

pub trait Decompress {
    fn decompress(&self, bytes: &[u8]) -> io::Result<Vec<u8>>;
}

/// Gzip at a fixed level, `0..=9`. The default is maximum effort, which is
/// what the game expects for compressed fleets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gzip {
    pub level: u32,
}

impl Gzip {
    pub const BEST: Gzip = Gzip { level: 9 };

    /// Levels above 9 are clamped.
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(9),
        }
    }

    pub fn is_gzip(bytes: &[u8]) -> bool {
        bytes.starts_with(&GZIP_MAGIC)
    }
}

impl Default for Gzip {
    fn default() -> Self {
        Self::BEST
    }
}

impl Compress for Gzip {
    fn compress(&self, bytes: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(bytes)?;
        encoder.finish()
    }
}

impl Decompress for Gzip {
    fn decompress(&self, bytes: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_at_every_level() {
        let payload = br#"{"blueprints":[],"faction":1,"name":"Red Fleet"}"#.repeat(20);
        for level in 0..=9 {
            let gzip = Gzip::new(level);
            let packed = gzip.compress(&payload).unwrap();
            assert!(Gzip::is_gzip(&packed));
            assert_eq!(gzip.decompress(&packed).unwrap(), payload);
        }
    }

    #[test]
    fn level_is_clamped() {
        assert_eq!(Gzip::new(42), Gzip::BEST);
        assert_eq!(Gzip::default().level, 9);
    }

    #[test]
    fn garbage_fails_as_io_error() {
        assert!(Gzip::default().decompress(b"\x1f\x8bnot gzip").is_err());
        assert!(!Gzip::is_gzip(b"{}"));
    }
}
