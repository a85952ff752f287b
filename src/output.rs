use serde::Serialize;

use crate::{config::OutputFormat, ecc::ecdsa::RecoverableSignature};

#[derive(Debug, Serialize)]
struct SignatureOutput {
    signature: String,
}

/// Renders the single line printed on success, without the trailing newline.
pub fn render(
    signature: &RecoverableSignature,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let hex = signature.to_string();
    match format {
        OutputFormat::Hex => Ok(hex),
        OutputFormat::Json => serde_json::to_string(&SignatureOutput { signature: hex }),
    }
}
