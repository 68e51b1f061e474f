//! LZ77 encoder: greedy single-pass longest-match search.
//!
//! For each cursor position the encoder scans a window of at most
//! [`WINDOW_SIZE`] already-consumed bytes for the longest run matching the
//! lookahead, caps it at [`MAX_MATCH`], and emits one token carrying the
//! back-reference plus the next literal byte. Matches are allowed to run
//! past the cursor into the lookahead itself; the decoder's forward
//! byte-at-a-time copy replays those self-overlapping runs correctly.

use crate::token::{MAX_MATCH, Token, WINDOW_SIZE};

/// Length of the common prefix of `input[s..]` and `input[pos..]`, capped.
///
/// `s < pos` always holds, so reads through `s + cap` stay in bounds
/// whenever `pos + cap` does.
fn match_length(input: &[u8], s: usize, pos: usize, cap: usize) -> usize {
    let mut len = 0;
    while len < cap && input[s + len] == input[pos + len] {
        len += 1;
    }
    len
}

/// Find the longest match for `input[pos..]` in the sliding window.
///
/// Returns `(start, length)` of the best match, `(pos, 0)` when nothing
/// matches. Candidates are scanned oldest-to-newest and only a strictly
/// longer match replaces the current best, so on ties the oldest window
/// position (largest offset) wins. This tie-break is part of the output
/// format contract: changing it changes the emitted token stream.
fn find_longest_match(input: &[u8], pos: usize) -> (usize, usize) {
    let window_start = pos.saturating_sub(WINDOW_SIZE);
    let cap = MAX_MATCH.min(input.len() - pos);

    let mut best_len = 0;
    let mut best_start = pos;

    for s in window_start..pos {
        let len = match_length(input, s, pos, cap);
        if len > best_len {
            best_len = len;
            best_start = s;
        }
    }

    (best_start, best_len)
}

/// Encode a byte slice into a sequence of tokens.
///
/// Pure function: empty input yields no tokens, and every token consumes at
/// least one input byte via its literal, so the token count never exceeds
/// the input length.
///
/// # Example
///
/// ```rust
/// use tinylz::{decode, encode};
///
/// let tokens = encode(b"abcabcabc");
/// assert!(tokens.len() < 9);
/// assert_eq!(decode(&tokens).unwrap(), b"abcabcabc");
/// ```
pub fn encode(input: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let (start, mut len) = find_longest_match(input, pos);

        // Tail clamp: the trailing literal must fit inside the input, so a
        // match reaching the final byte is shortened to leave it free. At
        // the very last byte this collapses the match to zero.
        len = len.min(input.len() - pos - 1);

        let offset = if len > 0 { pos - start } else { 0 };
        tokens.push(Token::from_parts(
            offset as u8,
            len as u8,
            input[pos + len],
        ));

        pos += len + 1;
    }

    tokens
}
