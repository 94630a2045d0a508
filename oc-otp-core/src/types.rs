//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};
use std::fmt;

/// Wrapper for an `otpauth://` provisioning URL
///
/// The URL embeds the shared secret in its query string, so it is treated
/// as a secret from the moment it is read until it is parsed.
#[derive(Clone, Debug)]
pub struct OtpAuthUrl(Secret<String>);

impl OtpAuthUrl {
    /// Create a new OtpAuthUrl, trimming surrounding whitespace
    pub fn new(url: &str) -> Self {
        Self(Secret::new(url.trim().to_string()))
    }

    /// Expose the URL value (use with caution!)
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpAuthUrl {
    fn from(url: String) -> Self {
        Self::new(&url)
    }
}

/// Wrapper for the decoded (binary) OTP shared secret
pub struct OtpSecret(Secret<Vec<u8>>);

impl OtpSecret {
    /// Create a new OtpSecret from raw key bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Secret::new(bytes))
    }

    /// Expose the key bytes (use with caution!)
    ///
    /// This should only be called when passing the key to the HMAC.
    pub fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }

    /// Whether the decoded key is empty
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for OtpSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpSecret([REDACTED])")
    }
}

/// Wrapper for a generated TOTP/HOTP code
///
/// Generated codes are treated as sensitive data and never logged,
/// even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct OtpCode(Secret<String>);

impl OtpCode {
    /// Create a new OtpCode from a generated, zero-padded code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when writing the code to the config file.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}
