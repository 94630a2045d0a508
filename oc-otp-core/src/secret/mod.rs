//! Secret acquisition module
//!
//! Turns a secret locator (`file:` or `key:`) into the `otpauth://`
//! provisioning URL, either by decrypting a sealed systemd credential or by
//! reading a credential that systemd injected at service start.

pub mod command;
pub mod locator;
pub mod resolver;

pub use command::{CommandError, CommandRunner, SystemCommandRunner};
pub use locator::SecretLocator;
pub use resolver::SecretResolver;

/// Environment variable naming the directory systemd fills with credentials
pub const CREDENTIALS_DIRECTORY_ENV: &str = "CREDENTIALS_DIRECTORY";

/// Program used to decrypt sealed credentials
pub const DECRYPT_PROGRAM: &str = "systemd-creds";
