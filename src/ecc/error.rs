use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Secret Key: {0}")]
    InvalidSecretKey(secp256k1::Error),
    #[error("Invalid Recovery Id {0}")]
    InvalidRecoveryId(i32),
}
