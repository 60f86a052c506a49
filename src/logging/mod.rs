// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the tracing subscriber for structured logging
///
/// The subscriber is configured with:
/// - JSON or human-readable formatting, per `logging.format`
/// - Filtering from `RUST_LOG`, falling back to `logging.level`
/// - Output to stderr so rendered markup on stdout stays clean
///
/// Calling this more than once is not an error; the first subscriber wins.
///
/// # Examples
///
/// ```
/// use referral_banner::config::LoggingConfig;
/// use referral_banner::logging::init_subscriber;
///
/// init_subscriber(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    // A global subscriber may already be installed (tests, embedding hosts)
    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already initialized");
    }

    Ok(())
}
