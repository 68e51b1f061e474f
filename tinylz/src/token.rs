//! Token codec: the packed 2-byte token representation.
//!
//! A token is one back-reference plus one trailing literal byte:
//!
//! ```text
//! byte 0: [ offset (5 bits) | length (3 bits) ]
//! byte 1: literal
//! ```
//!
//! The 5/3 bit split caps the backward reach at 31 bytes and the copied run
//! at 7 bytes per token. It is the single reach-versus-overhead trade-off
//! baked into the format; widening either field changes the wire format.
//! Both fields are single bytes, so there is no endianness concern.

use crate::error::{Result, TinyLzError};

/// Maximum backward distance a token can express (5-bit field).
pub const WINDOW_SIZE: usize = 31;

/// Maximum run length a token can express (3-bit field).
pub const MAX_MATCH: usize = 7;

/// Size of one serialized token in bytes.
pub const TOKEN_SIZE: usize = 2;

/// Number of low bits holding the length field in the packed byte.
const LENGTH_BITS: u32 = 3;

/// Mask selecting the length field.
const LENGTH_MASK: u8 = (1 << LENGTH_BITS) - 1;

/// Pack an (offset, length) pair into a single byte.
///
/// Fails if either field exceeds its bit width. A correct encoder never
/// produces such values (the window and match bounds hard-cap them).
pub fn pack(offset: u8, length: u8) -> Result<u8> {
    if offset as usize > WINDOW_SIZE || length as usize > MAX_MATCH {
        return Err(TinyLzError::field_out_of_range(
            offset as usize,
            length as usize,
        ));
    }
    Ok((offset << LENGTH_BITS) | length)
}

/// Unpack a packed byte into its (offset, length) pair.
///
/// Total function: every byte value decodes to an in-range pair.
pub fn unpack(byte: u8) -> (u8, u8) {
    (byte >> LENGTH_BITS, byte & LENGTH_MASK)
}

/// One back-reference plus trailing literal.
///
/// A constructed token always holds in-range fields; tokens are plain
/// values, produced in order by the encoder and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Backward distance to the start of the matched run (0 = no match).
    offset: u8,
    /// Number of bytes to copy before emitting the literal.
    length: u8,
    /// Raw byte emitted after the copied run.
    literal: u8,
}

impl Token {
    /// Create a token, validating the field ranges.
    pub fn new(offset: u8, length: u8, literal: u8) -> Result<Self> {
        pack(offset, length)?;
        Ok(Self {
            offset,
            length,
            literal,
        })
    }

    /// Create a literal-only token (no back-reference).
    pub fn literal_only(literal: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal,
        }
    }

    /// Construct from fields the caller has already bounded.
    ///
    /// The encoder's window and match caps guarantee the ranges hold.
    pub(crate) fn from_parts(offset: u8, length: u8, literal: u8) -> Self {
        debug_assert!(offset as usize <= WINDOW_SIZE);
        debug_assert!(length as usize <= MAX_MATCH);
        Self {
            offset,
            length,
            literal,
        }
    }

    /// Backward distance to the matched run (0 means no match).
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Number of bytes to copy from the back-reference.
    pub fn length(&self) -> u8 {
        self.length
    }

    /// The trailing literal byte.
    pub fn literal(&self) -> u8 {
        self.literal
    }

    /// Serialize to the fixed 2-byte layout: packed byte, then literal.
    pub fn to_bytes(&self) -> [u8; TOKEN_SIZE] {
        // Ranges are enforced at construction, so packing cannot fail.
        [(self.offset << LENGTH_BITS) | self.length, self.literal]
    }

    /// Deserialize from the fixed 2-byte layout.
    ///
    /// Total function: any byte pair is a structurally valid token. Whether
    /// its back-reference is satisfiable is checked at decode time.
    pub fn from_bytes(bytes: [u8; TOKEN_SIZE]) -> Self {
        let (offset, length) = unpack(bytes[0]);
        Self {
            offset,
            length,
            literal: bytes[1],
        }
    }
}
