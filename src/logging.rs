use std::{env, io};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const LOG_FILTER: &str = "RUST_LOG";

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a stderr-only subscriber. Stdout is reserved for the signature.
///
/// `RUST_LOG` takes precedence over `-v` when it is set and valid.
pub fn init(verbosity: u8) {
    let fallback = || EnvFilter::default().add_directive(level_for(verbosity).into());
    let filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
        None => fallback(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
