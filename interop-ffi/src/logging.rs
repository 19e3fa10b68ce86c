//! Tracing setup shared by Rust hosts and C callers.

use std::io::{self, Write};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{InteropConfig, LogConfig, LogFormat, LOG_ENV_VAR};
use crate::error::{InteropResult, INTEROP_OK};

/// Build the filter: `INTEROP_LOG` when set, otherwise the configured directive.
pub fn build_filter(config: &LogConfig) -> InteropResult<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> InteropResult<()> {
    let (plain, json) = match config.format {
        LogFormat::Plain => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(build_filter(config)?)
        .with(plain)
        .with(json)
        .try_init()?;
    Ok(())
}

/// Load configuration and install tracing; 0 on success, -1 on failure
#[no_mangle]
pub extern "C" fn interop_init_logging() -> i32 {
    let result = InteropConfig::load(None).and_then(|config| init_tracing(&config.log));
    match result {
        Ok(()) => {
            tracing::debug!("logging initialized");
            INTEROP_OK
        }
        Err(e) => {
            // No subscriber may be listening; stderr is the only reliable sink.
            let _ = writeln!(io::stderr(), "interop: {e}");
            e.to_code()
        }
    }
}
