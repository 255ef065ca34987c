//! # lzip
//!
//! A length-limited canonical Huffman file compressor.
//!
//! * `huffman` builds an optimal, length-limited canonical prefix code over
//!   the 256 possible byte values and (de)serializes it as a 256-entry
//!   length table.
//! * `bitstream` packs/unpacks codewords into a byte buffer, carrying
//!   fractional-byte state across chunk boundaries.
//! * `container` describes the on-disk archive header.
//! * `lzip` is the driver: it wires the above into `compress`/`expand`
//!   functions generic over `Read + Seek` / `Write + Seek`.
//!
//! ## Buffer example
//!
//! ```
//! use lzip::{compress_slice, expand_slice, STD_OPTIONS};
//! let data = b"I am Sam. Sam I am. I do not like this Sam I am.\n";
//! let archive = compress_slice(data, &STD_OPTIONS).expect("compression failed");
//! let restored = expand_slice(&archive).expect("expansion failed");
//! assert_eq!(data.to_vec(), restored);
//! ```

pub mod bitstream;
pub mod cli;
pub mod container;
pub mod huffman;
pub mod lzip;

pub use lzip::{compress, compress_slice, expand, expand_slice};

/// Convenience alias matching the fallible core operations, which never
/// surface raw I/O errors of their own (they operate on buffers); only the
/// driver and CLI layers touch the filesystem.
pub type DYNERR = Box<dyn std::error::Error>;

/// Error taxonomy for the core and its driver.
///
/// The core never panics or aborts on these; every fallible operation
/// returns a `Result` carrying one of these kinds, per the propagation
/// policy in the specification's error-handling design.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("path could not be made absolute/canonical: {0}")]
    PathInvalid(String),
    #[error("could not open or create file: {0}")]
    OpenFailed(#[from] std::io::Error),
    #[error("input is not an lzip archive")]
    NotAnArchive,
    #[error("code length limiter could not reduce below the cap")]
    CodeTooLong,
    #[error("max code length {0} exceeds the hard ceiling of 64 bits")]
    BadMaxLen(u16),
    #[error("overwrite declined by user")]
    UserCancelled,
}

/// Options controlling compression.
///
/// Mirrors `retrocompressor::lzss_huff::Options`'s `Options`/
/// `STD_OPTIONS` pattern.
#[derive(Clone, Debug)]
pub struct Options {
    /// Maximum canonical code length in bits. Default 24, hard ceiling 64.
    pub max_code_len: u16,
    /// Size, in bytes, of each streamed chunk during encode/decode.
    pub chunk_size: usize,
}

pub const STD_OPTIONS: Options = Options {
    max_code_len: 24,
    chunk_size: 1 << 20,
};
