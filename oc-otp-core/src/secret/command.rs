//! External command execution
//!
//! Decrypting a sealed credential is delegated to `systemd-creds`. The call
//! goes through [`CommandRunner`] so tests can substitute the TPM-backed tool.

use std::process::Command;
use tracing::debug;

/// Error types for external command execution
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to spawn \"{program}\": {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{program}\" exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Runs an external program and returns its standard output
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        debug!("Executing {} with {} argument(s)", program, args.len());

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CommandError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(CommandError::NonZeroExit {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
