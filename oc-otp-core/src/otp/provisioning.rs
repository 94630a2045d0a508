//! `otpauth://` provisioning URL parsing
//!
//! Follows the Key URI format used by authenticator apps:
//!
//! ```text
//! otpauth://TYPE/[ISSUER:]ACCOUNT?secret=BASE32[&issuer=..][&algorithm=..][&digits=..][&period=..][&counter=..]
//! ```

use crate::error::OtpError;
use crate::otp::{base32, DEFAULT_DIGITS, DEFAULT_PERIOD};
use crate::types::{OtpAuthUrl, OtpSecret};
use std::fmt;
use url::Url;

const OTPAUTH_SCHEME: &str = "otpauth";

/// OTP type declared by the URL host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpKind {
    Totp,
    Hotp,
    /// Any other declared type; rejected at generation time
    Other(String),
}

impl From<&str> for OtpKind {
    fn from(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "totp" => Self::Totp,
            "hotp" => Self::Hotp,
            _ => Self::Other(kind.to_string()),
        }
    }
}

impl fmt::Display for OtpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Totp => f.write_str("totp"),
            Self::Hotp => f.write_str("hotp"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// Parameters carried by a provisioning URL
///
/// The algorithm is kept as written so that an unsupported value surfaces
/// as a TOTP/HOTP configuration error rather than a parse error.
#[derive(Debug)]
pub struct ProvisioningDescriptor {
    pub kind: OtpKind,
    pub algorithm: String,
    pub digits: u32,
    pub issuer: Option<String>,
    pub account: String,
    pub period: u64,
    pub counter: u64,
    pub secret: OtpSecret,
}

impl ProvisioningDescriptor {
    /// Parse a provisioning URL
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidProvisioningUrl` if:
    /// - the value is not a URL or its scheme is not `otpauth`
    /// - the OTP type is missing
    /// - `secret` is missing, empty or not Base32
    /// - `digits`, `period` or `counter` are not unsigned integers
    pub fn parse(url: &OtpAuthUrl) -> Result<Self, OtpError> {
        let parsed = Url::parse(url.expose()).map_err(|e| invalid(e.to_string()))?;

        if parsed.scheme() != OTPAUTH_SCHEME {
            return Err(invalid(format!(
                "unexpected scheme \"{}\", expected \"{}\"",
                parsed.scheme(),
                OTPAUTH_SCHEME
            )));
        }

        let kind = match parsed.host_str() {
            Some(host) if !host.is_empty() => OtpKind::from(host),
            _ => return Err(invalid("missing OTP type")),
        };

        let label = percent_encoding::percent_decode_str(parsed.path().trim_start_matches('/'))
            .decode_utf8()
            .map_err(|e| invalid(format!("label is not UTF-8: {}", e)))?;
        let (label_issuer, account) = match label.split_once(':') {
            Some((issuer, account)) => {
                (Some(issuer.trim().to_string()), account.trim().to_string())
            }
            None => (None, label.trim().to_string()),
        };

        let mut descriptor = Self {
            kind,
            algorithm: crate::otp::HashAlgorithm::default().as_str().to_string(),
            digits: DEFAULT_DIGITS,
            issuer: label_issuer.filter(|issuer| !issuer.is_empty()),
            account,
            period: DEFAULT_PERIOD,
            counter: 0,
            secret: OtpSecret::new(Vec::new()),
        };

        let mut encoded_secret = None;
        for (key, value) in parsed.query_pairs() {
            match &*key {
                "secret" => encoded_secret = Some(value.into_owned()),
                "algorithm" => descriptor.algorithm = value.into_owned(),
                "digits" => descriptor.digits = parse_number(&key, &value)?,
                "period" => descriptor.period = parse_number(&key, &value)?,
                "counter" => descriptor.counter = parse_number(&key, &value)?,
                "issuer" if !value.is_empty() => descriptor.issuer = Some(value.into_owned()),
                _ => {}
            }
        }

        let encoded_secret = encoded_secret.ok_or_else(|| invalid("missing secret"))?;
        descriptor.secret = OtpSecret::new(base32::decode_base32(&encoded_secret)?);
        if descriptor.secret.is_empty() {
            return Err(invalid("empty secret"));
        }

        Ok(descriptor)
    }
}

fn invalid(reason: impl Into<String>) -> OtpError {
    OtpError::InvalidProvisioningUrl {
        reason: reason.into(),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, OtpError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(format!("invalid \"{}\" value \"{}\"", key, value)))
}
