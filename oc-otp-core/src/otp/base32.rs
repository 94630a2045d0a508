//! Base32 decoding for `otpauth://` shared secrets
//!
//! Authenticator exports are inconsistent about case, grouping spaces and
//! padding, so decoding is lenient:
//! 1. Remove all whitespace characters
//! 2. Re-apply padding to 8-character boundaries
//! 3. Decode case-insensitively

use crate::error::OtpError;
use data_encoding::BASE32;

/// Clean whitespace and any existing padding from input string
fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_end_matches('=')
        .to_string()
}

/// Pad input string to 8-character boundaries
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Decode a Base32 secret to bytes
pub fn decode_base32(input: &str) -> Result<Vec<u8>, OtpError> {
    let padded = pad(&clean(input));

    BASE32
        .decode(padded.to_uppercase().as_bytes())
        .map_err(|e| OtpError::InvalidProvisioningUrl {
            reason: format!("invalid base32 secret: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_whitespace() {
        assert_eq!(clean("JBSW Y3DP\tEHPK 3PXP\n"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_clean_strips_padding() {
        assert_eq!(clean("JBSWY3DPEE======"), "JBSWY3DPEE");
    }

    #[test]
    fn test_pad_formula() {
        assert_eq!(pad("JBSWY3DPEHPK3PXP"), "JBSWY3DPEHPK3PXP");
        assert_eq!(pad("JBSWY3DPEHPK3P"), "JBSWY3DPEHPK3P==");
        assert_eq!(pad("A").len(), 8);
        assert_eq!(pad("ABCDEFG").len(), 8);
        assert_eq!(pad("ABCDEFGH").len(), 8);
    }

    #[test]
    fn test_decode_rfc6238_secret() {
        let bytes = decode_base32("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
        assert_eq!(bytes, b"12345678901234567890");
    }

    #[test]
    fn test_decode_is_lenient() {
        let expected = b"Hello!".to_vec();
        for input in ["JBSWY3DPEE", "jbswy3dpee", "JbSw Y3Dp Ee", "JBSWY3DPEE======"] {
            assert_eq!(decode_base32(input).unwrap(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_decode_invalid() {
        let result = decode_base32("INVALID@CHARS!");
        assert!(matches!(result, Err(OtpError::InvalidProvisioningUrl { .. })));
    }
}
