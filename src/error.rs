use thiserror::Error;

use crate::{codec::HexError, ecc};

pub const EXIT_KEY: u8 = 3;
pub const EXIT_MESSAGE: u8 = 4;
pub const EXIT_CRYPTO_INIT: u8 = 5;
pub const EXIT_SIGNING: u8 = 6;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Hardcoded private key does not decode to 32 bytes: {0}")]
    Key(#[source] HexError),
    #[error("Message is not a 0x-prefixed 32-byte hex digest: {0}")]
    Message(#[source] HexError),
    #[error("Signer rejected the private key: {0}")]
    CryptoInit(#[source] ecc::error::Error),
    #[error("Signing failed: {0}")]
    Signing(#[source] ecc::error::Error),
    #[error("Failed to serialize signature: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write signature: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code. Usage errors exit with 2 through clap before any of
    /// these can occur.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Key(_) => EXIT_KEY,
            Error::Message(_) => EXIT_MESSAGE,
            Error::CryptoInit(_) => EXIT_CRYPTO_INIT,
            Error::Signing(_) | Error::Serialize(_) | Error::Io(_) => EXIT_SIGNING,
        }
    }
}
