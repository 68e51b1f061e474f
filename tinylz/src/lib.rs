//! # tinylz: Byte-Oriented LZ77 Compression
//!
//! A small LZ77-style codec with a fixed 2-byte token format. The encoder
//! performs a greedy longest-match search over a 31-byte sliding window and
//! emits one token per step; the decoder replays the back-references,
//! including self-overlapping (run-length style) copies, to reconstruct the
//! input exactly.
//!
//! ## Token format
//!
//! Every token is exactly 2 bytes:
//!
//! ```text
//! byte 0: [ offset (5 bits) | length (3 bits) ]
//! byte 1: literal
//! ```
//!
//! `offset` is the backward distance (0-31, 0 meaning "no match") to the
//! start of a previously emitted run, `length` (0-7) the number of bytes to
//! copy from there, and `literal` a raw byte always appended after the
//! copied run. A serialized stream is a flat concatenation of these records
//! with no header or checksum.
//!
//! ## Example
//!
//! ```rust
//! use tinylz::{compress, decompress};
//!
//! let original = b"abracadabra abracadabra";
//!
//! let packed = compress(original);
//! assert!(packed.len() < original.len() * 2);
//!
//! let restored = decompress(&packed).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! ## Guarantees
//!
//! - `decompress(&compress(x)) == x` for every byte sequence `x`,
//!   including the empty one.
//! - The encoder emits at most one token per input byte.
//! - Decoding validates every back-reference before following it; a corrupt
//!   or truncated stream is reported as an error, never as silently wrong
//!   output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
pub mod error;
pub mod stream;
mod token;

pub use decoder::decode;
pub use encoder::encode;
pub use error::{Result, TinyLzError};
pub use token::{MAX_MATCH, TOKEN_SIZE, Token, WINDOW_SIZE, pack, unpack};

/// Compress a byte slice into a serialized token stream.
///
/// Equivalent to [`encode`] followed by [`stream::to_bytes`]. The result is
/// `2 * token_count` bytes; for incompressible input this is up to twice
/// the input size (every token still carries its 1-byte back-reference
/// field).
///
/// # Example
///
/// ```rust
/// use tinylz::compress;
///
/// let packed = compress(b"aaaaaaaa");
/// assert_eq!(packed.len(), 4); // two tokens
/// ```
pub fn compress(input: &[u8]) -> Vec<u8> {
    stream::to_bytes(&encode(input))
}

/// Decompress a serialized token stream back into the original bytes.
///
/// Equivalent to [`stream::from_bytes`] followed by [`decode`].
///
/// # Errors
///
/// Returns [`TinyLzError::TruncatedStream`] for an odd-length stream and
/// [`TinyLzError::InvalidDistance`] for an out-of-range back-reference.
///
/// # Example
///
/// ```rust
/// use tinylz::{compress, decompress};
///
/// let data = b"Hello Hello Hello";
/// assert_eq!(decompress(&compress(data)).unwrap(), data);
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decode(&stream::from_bytes(data)?)
}
