use sha2::{Digest, Sha256};

use crate::ecc::MESSAGE_SIZE;

/// Single SHA-256, for signing text messages instead of ready-made digests.
pub fn sha256(data: &[u8]) -> [u8; MESSAGE_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
