//! Component H: the on-disk archive header.
//!
//! Layout, little-endian regardless of host: 4-byte magic `"Lzip"`, 4-byte
//! version, 8-byte original size, 256-byte canonical length table.
//! Grounded on `original_source/src/meta.hpp` (magic/version constants)
//! and `utils.hpp::{writeIntLE,readIntLE}`.

use crate::Error;

pub const MAGIC: [u8; 4] = *b"Lzip";
pub const VERSION: u32 = 1;
pub const TABLE_LEN: usize = 256;
pub const HEADER_LEN: usize = 4 + 4 + 8 + TABLE_LEN;

/// Parsed archive header.
#[derive(Clone, Debug)]
pub struct Header {
    pub original_size: u64,
    pub lengths: [u8; 256],
}

impl Header {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN);
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&VERSION.to_le_bytes());
        buf.extend_from_slice(&self.original_size.to_le_bytes());
        buf.extend_from_slice(&self.lengths);
        buf
    }

    /// Parses a header from exactly `HEADER_LEN` bytes. Any mismatch on
    /// the magic, or a short buffer, is `Error::NotAnArchive`. An
    /// unrecognized version is logged and otherwise tolerated, per the
    /// format's forward-compatibility stance.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < HEADER_LEN || buf[0..4] != MAGIC {
            return Err(Error::NotAnArchive);
        }
        let version = u32::from_le_bytes(buf[4..8].try_into().unwrap());
        if version != VERSION {
            log::debug!(
                "archive version {version} differs from current {VERSION}; proceeding anyway"
            );
        }
        let original_size = u64::from_le_bytes(buf[8..16].try_into().unwrap());
        let mut lengths = [0u8; 256];
        lengths.copy_from_slice(&buf[16..16 + TABLE_LEN]);
        Ok(Header {
            original_size,
            lengths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let mut lengths = [0u8; 256];
        lengths[b'a' as usize] = 1;
        lengths[b'b' as usize] = 2;
        let header = Header {
            original_size: 12345,
            lengths,
        };
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), HEADER_LEN);
        let parsed = Header::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.original_size, 12345);
        assert_eq!(parsed.lengths, lengths);
    }

    #[test]
    fn corrupt_magic_is_not_an_archive() {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[0..4].copy_from_slice(b"Liz!");
        let err = Header::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::NotAnArchive));
    }

    #[test]
    fn truncated_header_is_not_an_archive() {
        let bytes = vec![0u8; HEADER_LEN - 1];
        let err = Header::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::NotAnArchive));
    }
}
