use std::fmt::Display;

use secp256k1::{Message, Secp256k1, SecretKey, SignOnly};

use super::{MESSAGE_SIZE, SECRET_KEY_SIZE, error::Error};
use crate::codec;

pub const COMPACT_SIGNATURE_SIZE: usize = 64;
pub const RECOVERABLE_SIGNATURE_SIZE: usize = COMPACT_SIGNATURE_SIZE + 1; // 65 bytes

/// A recoverable ECDSA signature: the 64-byte compact form (`r` then `s`,
/// big-endian) plus the recovery id needed to rebuild the public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    compact: [u8; COMPACT_SIGNATURE_SIZE],
    recovery_id: u8,
}

impl Display for RecoverableSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", codec::encode(&self.to_bytes()))
    }
}

impl RecoverableSignature {
    pub fn new(compact: [u8; COMPACT_SIGNATURE_SIZE], recovery_id: i32) -> Result<Self, Error> {
        let recovery_id = match recovery_id {
            0..=3 => recovery_id as u8,
            _ => return Err(Error::InvalidRecoveryId(recovery_id)),
        };
        Ok(Self {
            compact,
            recovery_id,
        })
    }

    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// `r || s || recovery_id`
    pub fn to_bytes(&self) -> [u8; RECOVERABLE_SIGNATURE_SIZE] {
        let mut result = [0u8; RECOVERABLE_SIGNATURE_SIZE];
        result[..COMPACT_SIGNATURE_SIZE].copy_from_slice(&self.compact);
        result[COMPACT_SIGNATURE_SIZE] = self.recovery_id;
        result
    }
}

/// A secp256k1 private key, checked by libsecp256k1 to be a valid scalar.
#[derive(Debug, Clone, Copy)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    pub fn from_bytes(bytes: &[u8; SECRET_KEY_SIZE]) -> Result<Self, Error> {
        let secret = SecretKey::from_slice(bytes).map_err(Error::InvalidSecretKey)?;
        Ok(Self { secret })
    }
}

/// Signing context over libsecp256k1.
pub struct Signer {
    secp: Secp256k1<SignOnly>,
}

impl Default for Signer {
    fn default() -> Self {
        Self::new()
    }
}

impl Signer {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::signing_only(),
        }
    }

    /// Signs a 32-byte digest. The nonce is derived per RFC 6979 and `s` is
    /// normalized to the lower half of the order.
    pub fn sign(
        &self,
        key: &PrivateKey,
        digest: &[u8; MESSAGE_SIZE],
    ) -> Result<RecoverableSignature, Error> {
        let message = Message::from_digest(*digest);
        let signature = self.secp.sign_ecdsa_recoverable(&message, &key.secret);
        let (recovery_id, compact) = signature.serialize_compact();
        RecoverableSignature::new(compact, recovery_id.to_i32())
    }
}
