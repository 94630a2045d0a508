//! Provisioning URL resolution
//!
//! Each resolution performs a single attempt: one `systemd-creds` call for a
//! sealed file, or one read from the runtime credentials directory.

use crate::error::{OcOtpError, SecretError};
use crate::secret::command::{CommandRunner, SystemCommandRunner};
use crate::secret::locator::{clean_path, SecretLocator};
use crate::secret::{CREDENTIALS_DIRECTORY_ENV, DECRYPT_PROGRAM};
use crate::types::OtpAuthUrl;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Resolves secret locators into provisioning URLs
#[derive(Debug, Clone)]
pub struct SecretResolver<R = SystemCommandRunner> {
    runner: R,
    credentials_dir: Option<PathBuf>,
}

impl SecretResolver<SystemCommandRunner> {
    /// Resolver using the real `systemd-creds` and `$CREDENTIALS_DIRECTORY`
    pub fn from_env() -> Self {
        let credentials_dir = std::env::var_os(CREDENTIALS_DIRECTORY_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self::new(SystemCommandRunner, credentials_dir)
    }
}

impl<R: CommandRunner> SecretResolver<R> {
    /// Create a resolver with an explicit runner and credentials directory
    pub fn new(runner: R, credentials_dir: Option<PathBuf>) -> Self {
        Self {
            runner,
            credentials_dir,
        }
    }

    /// Resolve a locator into its provisioning URL
    pub fn resolve(&self, locator: &SecretLocator) -> Result<OtpAuthUrl, OcOtpError> {
        match locator {
            SecretLocator::SealedFile(path) => self.decrypt(path),
            SecretLocator::RuntimeCredential(name) => self.read_credential(name),
        }
    }

    /// Parse a raw locator string and resolve it
    pub fn resolve_str(&self, locator: &str) -> Result<OtpAuthUrl, OcOtpError> {
        let locator: SecretLocator = locator.parse()?;
        self.resolve(&locator)
    }

    fn decrypt(&self, path: &Path) -> Result<OtpAuthUrl, OcOtpError> {
        info!("Decrypting sealed credential {}", path.display());

        let path_arg = path.to_string_lossy();
        let args = ["--with-key=tpm2", "decrypt", &*path_arg, "-"];

        let stdout = self
            .runner
            .run(DECRYPT_PROGRAM, &args)
            .map_err(|e| SecretError::DecryptionFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(OtpAuthUrl::new(&String::from_utf8_lossy(&stdout)))
    }

    fn read_credential(&self, name: &str) -> Result<OtpAuthUrl, OcOtpError> {
        let dir = self
            .credentials_dir
            .as_ref()
            .ok_or(SecretError::MissingCredentialsDirectory {
                variable: CREDENTIALS_DIRECTORY_ENV,
            })?;

        let path = credential_path(dir, name);
        debug!("Reading runtime credential {}", path.display());

        let contents =
            std::fs::read_to_string(&path).map_err(|e| SecretError::CredentialReadFailed {
                name: name.to_string(),
                source: e,
            })?;

        Ok(OtpAuthUrl::new(&contents))
    }
}

/// Join a credential name below `dir`, treating a rooted name as relative
fn credential_path(dir: &Path, name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();

    clean_path(&dir.join(relative).to_string_lossy())
}
