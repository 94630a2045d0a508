//! OTP module
//!
//! Parses `otpauth://` provisioning URLs and generates a single TOTP
//! (RFC 6238) or HOTP (RFC 4226) code from them.

pub mod base32;
pub mod hotp;
pub mod provisioning;
pub mod totp;

pub use hotp::HotpConfig;
pub use provisioning::{OtpKind, ProvisioningDescriptor};
pub use totp::TotpConfig;

use crate::error::OtpError;
use crate::types::{OtpAuthUrl, OtpCode};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Acceptance window, in time steps, used when verifying TOTP codes
pub const DEFAULT_TOTP_SKEW: u32 = 2;

/// RFC 6238 default time step in seconds
pub const DEFAULT_PERIOD: u64 = 30;

/// Default code width
pub const DEFAULT_DIGITS: u32 = 6;

/// Smallest and largest accepted code widths
pub const MIN_DIGITS: u32 = 6;
pub const MAX_DIGITS: u32 = 8;

/// Hash algorithm for HOTP/TOTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Name as written in provisioning URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(format!("unsupported hash algorithm \"{}\"", s)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seconds since the Unix epoch for the given instant
pub fn unix_time(now: SystemTime) -> Result<u64, OtpError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| OtpError::TimeError)
}

/// Generate one code for a parsed descriptor
///
/// TOTP codes use `now`; HOTP codes use the descriptor's counter, which is
/// read but never advanced.
pub fn generate(descriptor: &ProvisioningDescriptor, now: SystemTime) -> Result<OtpCode, OtpError> {
    match &descriptor.kind {
        OtpKind::Totp => {
            let config = TotpConfig::new(
                &descriptor.algorithm,
                descriptor.digits,
                descriptor.period,
                DEFAULT_TOTP_SKEW,
            )?;
            debug!(
                "Generating TOTP code: algorithm={}, digits={}, period={}s, issuer={:?}",
                config.algorithm(),
                config.digits(),
                config.period(),
                descriptor.issuer
            );
            config.generate(&descriptor.secret, unix_time(now)?)
        }
        OtpKind::Hotp => {
            let config = HotpConfig::new(&descriptor.algorithm, descriptor.digits)?;
            debug!(
                "Generating HOTP code: algorithm={}, digits={}, counter={}, issuer={:?}",
                config.algorithm(),
                config.digits(),
                descriptor.counter,
                descriptor.issuer
            );
            config.generate(&descriptor.secret, descriptor.counter)
        }
        OtpKind::Other(kind) => Err(OtpError::UnsupportedOtpType { kind: kind.clone() }),
    }
}

/// Parse a provisioning URL and generate one code from it
pub fn generate_from_url(url: &OtpAuthUrl, now: SystemTime) -> Result<OtpCode, OtpError> {
    let descriptor = ProvisioningDescriptor::parse(url)?;
    generate(&descriptor, now)
}

/// Check a requested width against the accepted range
pub(crate) fn check_digits(digits: u32) -> Result<(), String> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(format!(
            "digits must be between {} and {}, got {}",
            MIN_DIGITS, MAX_DIGITS, digits
        ));
    }
    Ok(())
}
