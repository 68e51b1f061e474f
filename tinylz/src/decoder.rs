//! LZ77 decoder: replays back-references into a growable output buffer.

use crate::error::{Result, TinyLzError};
use crate::token::Token;

/// Decode a token sequence back into the original bytes.
///
/// Back-reference copies are performed byte-by-byte in forward order: when
/// a token's offset is smaller than its length, bytes written earlier in
/// the same copy are read again later in it, which is how run-length style
/// repetition (e.g. offset 1, length 5) is expressed.
///
/// # Errors
///
/// Returns [`TinyLzError::InvalidDistance`] for a token whose back-reference
/// points before the start of the output produced so far. Such a stream is
/// corrupt and cannot be self-healed; no partial output is returned.
///
/// # Example
///
/// ```rust
/// use tinylz::{decode, encode};
///
/// let input = b"to be or not to be";
/// let output = decode(&encode(input)).unwrap();
/// assert_eq!(output, input);
/// ```
pub fn decode(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(tokens.len() * 2);

    for token in tokens {
        let length = token.length() as usize;

        if length > 0 {
            let offset = token.offset() as usize;
            if offset == 0 || offset > output.len() {
                return Err(TinyLzError::invalid_distance(offset, output.len()));
            }

            let start = output.len() - offset;
            for i in 0..length {
                let byte = output[start + i];
                output.push(byte);
            }
        }

        output.push(token.literal());
    }

    Ok(output)
}
