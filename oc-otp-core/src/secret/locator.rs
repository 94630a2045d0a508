//! Secret locator parsing
//!
//! A locator is `file:<path>` for a TPM2-sealed credential file or
//! `key:<name>` for a credential inside `$CREDENTIALS_DIRECTORY`.

use crate::error::SecretError;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

const SEALED_FILE_PREFIX: &str = "file:";
const RUNTIME_CREDENTIAL_PREFIX: &str = "key:";

/// Where the provisioning URL is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretLocator {
    /// Encrypted credential file, decrypted with `systemd-creds`
    SealedFile(PathBuf),

    /// Credential name relative to `$CREDENTIALS_DIRECTORY`
    RuntimeCredential(String),
}

impl FromStr for SecretLocator {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix(SEALED_FILE_PREFIX) {
            return Ok(Self::SealedFile(clean_path(path)));
        }

        if let Some(name) = s.strip_prefix(RUNTIME_CREDENTIAL_PREFIX) {
            return Ok(Self::RuntimeCredential(name.to_string()));
        }

        Err(SecretError::InvalidLocatorScheme)
    }
}

impl fmt::Display for SecretLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SealedFile(path) => write!(f, "{}{}", SEALED_FILE_PREFIX, path.display()),
            Self::RuntimeCredential(name) => write!(f, "{}{}", RUNTIME_CREDENTIAL_PREFIX, name),
        }
    }
}

/// Lexically normalize a path
///
/// Repeated separators and `.` elements are dropped and `..` consumes the
/// preceding element. `..` directly under the root is discarded. An empty
/// result becomes `.`. The filesystem is never consulted.
pub fn clean_path(raw: &str) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.into_iter().collect()
}
