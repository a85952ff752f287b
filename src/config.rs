use clap::{ArgAction, Parser, ValueEnum};

/// Sign a 32-byte digest with the built-in secp256k1 test key and print a
/// 65-byte recoverable signature.
#[derive(Debug, Parser)]
#[command(name = "recoverable-sign", version)]
pub struct Args {
    /// Digest to sign: `0x` followed by 64 lowercase hex characters.
    pub message: String,

    /// Treat MESSAGE as UTF-8 text and sign its SHA-256 digest.
    #[arg(long)]
    pub sha256: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Hex,
        env = "RECOVERABLE_SIGN_OUTPUT"
    )]
    pub output_format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `0x` + r || s || recovery id
    Hex,
    /// `{"signature":"0x..."}`
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageInput {
    /// `0x`-prefixed hex digest, decoded as-is.
    Digest(String),
    /// Free text, hashed with SHA-256 before signing.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: MessageInput,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let input = if args.sha256 {
            MessageInput::Text(args.message)
        } else {
            MessageInput::Digest(args.message)
        };
        Self {
            input,
            output_format: args.output_format,
            verbosity: args.verbose,
        }
    }
}
