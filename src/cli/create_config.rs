//! Config generation command implementation
//!
//! Resolves the provisioning URL, generates a code and writes the
//! OpenConnect config at the requested location.

use oc_otp_core::create_config;
use oc_otp_core::error::OcOtpError;
use oc_otp_core::secret::SecretResolver;
use std::path::Path;
use std::time::SystemTime;
use tracing::info;

/// Run config generation with the process environment and current time
pub fn run_create_config(config: &str, otp_auth: &str, form_entry: &str) -> Result<(), OcOtpError> {
    info!("Creating OpenConnect config at {:?}", config);

    let resolver = SecretResolver::from_env();
    create_config(&resolver, Path::new(config), otp_auth, form_entry, SystemTime::now())
}
