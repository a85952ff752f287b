pub mod ecdsa;
pub mod error;

/// Hardcoded signing key.
///
/// Test-only: it is public knowledge and must never guard anything of value.
pub const TEST_PRIVATE_KEY: &str =
    "0a031e3eceb7a152beb34c5323e1b74d7d8cb58a96f69cba7e6dd20ed9a26249";

pub const SECRET_KEY_SIZE: usize = 32;
pub const MESSAGE_SIZE: usize = 32;
