//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 using the totp-lite crate for secure
//! OTP token generation from stored secrets.

use crate::error::OtpError;
use crate::otp::hotp::hotp_code;
use crate::otp::{check_digits, HashAlgorithm};
use crate::types::{OtpCode, OtpSecret};

/// Validated TOTP parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotpConfig {
    algorithm: HashAlgorithm,
    digits: u32,
    period: u64,
    skew: u32,
}

impl TotpConfig {
    /// Validate TOTP parameters
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidTotpConfig` for an unsupported hash
    /// algorithm, a zero period or a digit count outside 6..=8.
    pub fn new(algorithm: &str, digits: u32, period: u64, skew: u32) -> Result<Self, OtpError> {
        let algorithm = algorithm
            .parse::<HashAlgorithm>()
            .map_err(|reason| OtpError::InvalidTotpConfig { reason })?;
        check_digits(digits).map_err(|reason| OtpError::InvalidTotpConfig { reason })?;

        if period == 0 {
            return Err(OtpError::InvalidTotpConfig {
                reason: "period must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            algorithm,
            digits,
            period,
            skew,
        })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn skew(&self) -> u32 {
        self.skew
    }

    /// Time step containing `unix_time`
    pub fn time_step(&self, unix_time: u64) -> u64 {
        unix_time / self.period
    }

    /// Generate the code valid at `unix_time` (seconds since the epoch)
    pub fn generate(&self, secret: &OtpSecret, unix_time: u64) -> Result<OtpCode, OtpError> {
        if secret.is_empty() {
            return Err(OtpError::InvalidTotpConfig {
                reason: "empty secret".to_string(),
            });
        }

        Ok(hotp_code(
            self.algorithm,
            self.digits,
            secret.expose(),
            self.time_step(unix_time),
        ))
    }

    /// Check `code` against the time steps within ±skew of `unix_time`
    pub fn verify(&self, secret: &OtpSecret, code: &str, unix_time: u64) -> bool {
        if secret.is_empty() || code.len() != self.digits as usize {
            return false;
        }

        let current = self.time_step(unix_time);
        let skew = u64::from(self.skew);
        let first = current.saturating_sub(skew);
        let last = current.saturating_add(skew);

        (first..=last).any(|step| {
            hotp_code(self.algorithm, self.digits, secret.expose(), step).expose() == code
        })
    }
}
