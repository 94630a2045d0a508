//! Core library for the oc-otp tool
//!
//! This crate resolves an `otpauth://` provisioning URL from a sealed or
//! systemd-injected credential, generates a single TOTP/HOTP code and writes
//! it into an OpenConnect config file.

pub mod error;
pub mod types;

pub mod config;
pub mod otp;
pub mod pipeline;
pub mod secret;

pub use pipeline::create_config;

/// Environment variable holding the stderr log filter
pub const LOG_FILTER_ENV: &str = "OC_OTP_LOG";

/// Initialize logging infrastructure
///
/// Under systemd (`JOURNAL_STREAM` set) logs go to the journal at INFO.
/// Otherwise logs go to stderr, filtered by `OC_OTP_LOG` (default `warn`);
/// stdout is reserved for the result message.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    #[cfg(target_os = "linux")]
    {
        if std::env::var_os("JOURNAL_STREAM").is_some() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(tracing_subscriber::filter::LevelFilter::INFO)
                .try_init()?;
            return Ok(());
        }
    }

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
