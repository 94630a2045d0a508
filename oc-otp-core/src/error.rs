//! Error types for the oc-otp tool
//!
//! This module defines all error types used throughout the application.
//! Every failure carries its underlying cause and propagates unchanged
//! up to the entry point.

use std::path::PathBuf;
use thiserror::Error;

use crate::secret::command::CommandError;

/// Main error type for the oc-otp application
#[derive(Error, Debug)]
pub enum OcOtpError {
    /// Errors related to acquiring the provisioning URL
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Errors related to OTP parsing and generation
    #[error(transparent)]
    Otp(#[from] OtpError),

    /// Errors related to rendering and writing the OpenConnect config
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Secret acquisition errors
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("invalid \"otp-auth\" prefix, must be \"file:\" or \"key:\"")]
    InvalidLocatorScheme,

    #[error("error executing \"systemd-creds\" for {}: {source}", path.display())]
    DecryptionFailed {
        path: PathBuf,
        #[source]
        source: CommandError,
    },

    #[error("environment variable \"{variable}\" is not set")]
    MissingCredentialsDirectory { variable: &'static str },

    #[error("error reading secret \"{name}\": {source}")]
    CredentialReadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// OTP/TOTP/HOTP operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("error parsing OTPAuthURL: {reason}")]
    InvalidProvisioningUrl { reason: String },

    #[error("error creating TOTP config: {reason}")]
    InvalidTotpConfig { reason: String },

    #[error("error creating HOTP config: {reason}")]
    InvalidHotpConfig { reason: String },

    #[error("unknown OTP type \"{kind}\"")]
    UnsupportedOtpType { kind: String },

    #[error("System time error")]
    TimeError,
}

/// OpenConnect config file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config location is not set")]
    EmptyTargetPath,

    #[error("error creating config directory {}: {source}", path.display())]
    ConfigDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating config {}: {source}", path.display())]
    ConfigCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error rendering config template: {source}")]
    ConfigRenderFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OcOtpError>;
