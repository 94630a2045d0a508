//! OpenConnect config file output
//!
//! Writes the rendered `form-entry` line to the target path, creating
//! missing parent directories. An existing file is truncated.

use crate::config::{render_line, RenderContext};
use crate::error::{ConfigError, OcOtpError};
use crate::types::OtpCode;
use std::fs::{DirBuilder, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reject an empty target path
pub fn ensure_target(target: &Path) -> Result<(), ConfigError> {
    if target.as_os_str().is_empty() {
        return Err(ConfigError::EmptyTargetPath);
    }
    Ok(())
}

/// Render and write the OpenConnect config
///
/// The template is rendered before anything on disk is touched.
pub fn write_config(target: &Path, form_entry_key: &str, code: &OtpCode) -> Result<(), OcOtpError> {
    ensure_target(target)?;

    let line = render_line(&RenderContext::new(form_entry_key, code))?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring config directory {} exists", parent.display());
        create_dir_all(parent).map_err(|e| ConfigError::ConfigDirCreateFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(target).map_err(|e| ConfigError::ConfigCreateFailed {
        path: target.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", line)
        .and_then(|_| writer.flush())
        .map_err(|e| ConfigError::ConfigRenderFailed {
            source: Box::new(e),
        })?;

    info!("Wrote OpenConnect config {}", target.display());
    Ok(())
}

fn create_dir_all(path: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::config::DEFAULT_DIRECTORY_MODE);
    }

    builder.create(path)
}
