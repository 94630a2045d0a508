//! OpenConnect config generation (secret → code → file)
//!
//! Runs the whole single-shot flow: resolve the provisioning URL, generate
//! one OTP code and write it into the OpenConnect config.

use crate::config::writer::{ensure_target, write_config};
use crate::error::OcOtpError;
use crate::otp;
use crate::secret::{CommandRunner, SecretResolver};
use std::path::Path;
use std::time::SystemTime;
use tracing::info;

/// Create the OpenConnect config at `target`
///
/// # Errors
///
/// Returns the first error hit by any stage; nothing is retried. The
/// target is only created or truncated once a code has been generated.
pub fn create_config<R: CommandRunner>(
    resolver: &SecretResolver<R>,
    target: &Path,
    otp_auth: &str,
    form_entry_key: &str,
    now: SystemTime,
) -> Result<(), OcOtpError> {
    ensure_target(target)?;

    let url = resolver.resolve_str(otp_auth)?;
    let code = otp::generate_from_url(&url, now)?;
    info!("Generated OTP code for form entry {}", form_entry_key);

    write_config(target, form_entry_key, &code)
}
