//! Lowercase hexadecimal codec over caller-owned byte buffers.
//!
//! Decoding is strict: only `0-9` and `a-f` are accepted. Running out of
//! input early is not an error here, it just yields a short count. Callers
//! that need an exact length go through [`decode_exact`].

use thiserror::Error;

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";
const HEX_PREFIX: &str = "0x";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("Invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },
    #[error("Input does not fit in {capacity} bytes ({remaining} characters left over)")]
    LengthMismatch { capacity: usize, remaining: usize },
    #[error("Expected {expected} bytes, decoded {decoded}")]
    Truncated { expected: usize, decoded: usize },
    #[error("Missing 0x prefix")]
    MissingPrefix,
}

/// Maps one ASCII character to its nibble value.
fn nibble(character: u8) -> Option<u8> {
    match character {
        b'0'..=b'9' => Some(character - b'0'),
        b'a'..=b'f' => Some(character - b'a' + 10),
        _ => None,
    }
}

fn invalid_at(hex: &str, index: usize) -> HexError {
    // index always lands on a char boundary: every byte before it was ASCII.
    let character = hex[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    HexError::InvalidHexCharacter { character, index }
}

/// Decodes `hex` into `out`, two characters per byte, and returns how many
/// bytes were written.
///
/// Stops when `out` is full or when fewer than two characters remain. If
/// `out` fills up while input is left, that is a [`HexError::LengthMismatch`].
/// On error the contents of `out` are unspecified.
pub fn decode(hex: &str, out: &mut [u8]) -> Result<usize, HexError> {
    let input = hex.as_bytes();
    let mut decoded = 0;

    for (slot, pair) in out.iter_mut().zip(input.chunks_exact(2)) {
        let index = decoded * 2;
        let high = nibble(pair[0]).ok_or_else(|| invalid_at(hex, index))?;
        let low = nibble(pair[1]).ok_or_else(|| invalid_at(hex, index + 1))?;
        *slot = (high << 4) | low;
        decoded += 1;
    }

    let consumed = decoded * 2;
    if decoded == out.len() && consumed < input.len() {
        return Err(HexError::LengthMismatch {
            capacity: out.len(),
            remaining: input.len() - consumed,
        });
    }

    Ok(decoded)
}

/// Decodes exactly `N` bytes. A short decode is a [`HexError::Truncated`].
pub fn decode_exact<const N: usize>(hex: &str) -> Result<[u8; N], HexError> {
    let mut buf = [0u8; N];
    let decoded = decode(hex, &mut buf)?;
    if decoded != N {
        return Err(HexError::Truncated {
            expected: N,
            decoded,
        });
    }
    Ok(buf)
}

/// Encodes `bytes` as lowercase hex, high nibble first, no prefix.
pub fn encode(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        encoded.push(HEX_ALPHABET[(byte >> 4) as usize] as char);
        encoded.push(HEX_ALPHABET[(byte & 0x0f) as usize] as char);
    }
    encoded
}

/// Returns the part of `arg` after a leading `0x`.
pub fn strip_prefix(arg: &str) -> Result<&str, HexError> {
    arg.strip_prefix(HEX_PREFIX).ok_or(HexError::MissingPrefix)
}
