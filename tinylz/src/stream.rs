//! Token stream persistence: a flat concatenation of 2-byte records.
//!
//! The serialized form carries no header, length prefix, or checksum; the
//! stream is exactly `2 * token_count` bytes in emission order. A stream
//! whose byte length is odd is malformed and is rejected before any token
//! is decoded.

use std::io::{Read, Write};

use crate::error::{Result, TinyLzError};
use crate::token::{TOKEN_SIZE, Token};

/// Serialize tokens to their flat byte representation.
///
/// Infallible: field ranges are enforced when tokens are constructed.
pub fn to_bytes(tokens: &[Token]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(tokens.len() * TOKEN_SIZE);
    for token in tokens {
        bytes.extend_from_slice(&token.to_bytes());
    }
    bytes
}

/// Parse a flat byte stream back into tokens.
///
/// # Errors
///
/// Returns [`TinyLzError::TruncatedStream`] if the byte length is not a
/// multiple of the token size; no partial result is produced.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Token>> {
    if bytes.len() % TOKEN_SIZE != 0 {
        return Err(TinyLzError::truncated_stream(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(TOKEN_SIZE)
        .map(|pair| Token::from_bytes([pair[0], pair[1]]))
        .collect())
}

/// Write a token stream to a sink in its flat byte form.
pub fn write_to<W: Write>(writer: &mut W, tokens: &[Token]) -> Result<()> {
    writer.write_all(&to_bytes(tokens))?;
    Ok(())
}

/// Read a complete token stream from a source.
///
/// Reads to end of stream; the same truncation rule as [`from_bytes`]
/// applies to the bytes read.
pub fn read_from<R: Read>(reader: &mut R) -> Result<Vec<Token>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_stream() {
        assert!(to_bytes(&[]).is_empty());
        assert!(from_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let tokens = vec![
            Token::literal_only(b'a'),
            Token::new(4, 3, b'b').unwrap(),
            Token::new(31, 7, 0xFF).unwrap(),
        ];

        let bytes = to_bytes(&tokens);
        assert_eq!(bytes.len(), tokens.len() * TOKEN_SIZE);
        assert_eq!(from_bytes(&bytes).unwrap(), tokens);
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = from_bytes(&[0x21, b'a', 0x09]).unwrap_err();
        assert!(matches!(err, TinyLzError::TruncatedStream { len: 3 }));
    }

    #[test]
    fn test_reader_writer_roundtrip() {
        let tokens = vec![Token::literal_only(b'x'), Token::new(1, 6, b'y').unwrap()];

        let mut sink = Vec::new();
        write_to(&mut sink, &tokens).unwrap();

        let mut cursor = Cursor::new(sink);
        assert_eq!(read_from(&mut cursor).unwrap(), tokens);
    }

    #[test]
    fn test_truncated_reader_rejected() {
        let mut cursor = Cursor::new(vec![0x21]);
        assert!(read_from(&mut cursor).is_err());
    }
}
