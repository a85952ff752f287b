use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, info};

use crate::{
    config::{Args, Config, MessageInput},
    ecc::{
        MESSAGE_SIZE, SECRET_KEY_SIZE, TEST_PRIVATE_KEY,
        ecdsa::{PrivateKey, Signer},
    },
    error::Error,
};

mod codec;
mod config;
mod ecc;
mod error;
mod logging;
mod output;
mod utils;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.verbosity);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let raw_key = codec::decode_exact::<SECRET_KEY_SIZE>(TEST_PRIVATE_KEY).map_err(Error::Key)?;
    let digest = message_digest(&config.input)?;
    debug!(digest = %codec::encode(&digest), "decoded message digest");

    let key = PrivateKey::from_bytes(&raw_key).map_err(Error::CryptoInit)?;
    let signature = Signer::new().sign(&key, &digest).map_err(Error::Signing)?;
    info!(recovery_id = signature.recovery_id(), "signed message digest");
    debug!(%signature);

    let line = output::render(&signature, config.output_format)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;
    Ok(())
}

fn message_digest(input: &MessageInput) -> Result<[u8; MESSAGE_SIZE], Error> {
    match input {
        MessageInput::Digest(arg) => {
            let hex = codec::strip_prefix(arg).map_err(Error::Message)?;
            codec::decode_exact::<MESSAGE_SIZE>(hex).map_err(Error::Message)
        }
        MessageInput::Text(text) => Ok(utils::sha256::sha256(text.as_bytes())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::HexError;

    fn digest(arg: &str) -> Result<[u8; MESSAGE_SIZE], Error> {
        message_digest(&MessageInput::Digest(arg.to_string()))
    }

    #[test]
    fn zero_digest_is_accepted() {
        let arg = format!("0x{}", "0".repeat(64));
        assert_eq!(digest(&arg).unwrap(), [0u8; MESSAGE_SIZE]);
    }

    #[test]
    fn short_digest_is_a_message_error() {
        let err = digest(&format!("0x{}", "ab".repeat(31))).unwrap_err();
        assert!(matches!(
            err,
            Error::Message(HexError::Truncated {
                expected: 32,
                decoded: 31
            })
        ));
        assert_eq!(err.exit_code(), error::EXIT_MESSAGE);
    }

    #[test]
    fn long_digest_is_a_message_error() {
        let err = digest(&format!("0x{}", "ab".repeat(33))).unwrap_err();
        assert!(matches!(
            err,
            Error::Message(HexError::LengthMismatch {
                capacity: 32,
                remaining: 2
            })
        ));
    }

    #[test]
    fn unprefixed_digest_is_rejected() {
        let err = digest(&"ab".repeat(32)).unwrap_err();
        assert!(matches!(err, Error::Message(HexError::MissingPrefix)));
    }

    #[test]
    fn uppercase_digest_is_rejected() {
        let err = digest(&format!("0x{}", "AB".repeat(32))).unwrap_err();
        assert!(matches!(
            err,
            Error::Message(HexError::InvalidHexCharacter {
                character: 'A',
                index: 0
            })
        ));
    }

    #[test]
    fn text_input_is_hashed() {
        let digest = message_digest(&MessageInput::Text("hello".to_string())).unwrap();
        assert_eq!(
            codec::encode(&digest),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
