//! OpenConnect config module
//!
//! Renders the generated code into the single `form-entry` line that
//! OpenConnect reads from its config file.

use crate::error::ConfigError;
use crate::types::OtpCode;
use serde::Serialize;
use tinytemplate::TinyTemplate;

pub mod writer;

/// Default OpenConnect `form-entry` key
pub const DEFAULT_FORM_ENTRY_KEY: &str = "main:secondary_password";

/// Mode for created config directories (subject to umask)
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// OpenConnect config template; surrounding whitespace is trimmed before use
pub const OPENCONNECT_CONFIG_TEMPLATE: &str = "
form-entry={form_entry_key}={form_entry_value}
";

const TEMPLATE_NAME: &str = "config";

/// Values substituted into the config template
#[derive(Serialize)]
pub struct RenderContext<'a> {
    pub form_entry_key: &'a str,
    pub form_entry_value: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(form_entry_key: &'a str, code: &'a OtpCode) -> Self {
        Self {
            form_entry_key,
            form_entry_value: code.expose(),
        }
    }
}

/// Render the config line, without a trailing newline
///
/// Values are inserted verbatim; OpenConnect does not unescape them.
pub fn render_line(context: &RenderContext<'_>) -> Result<String, ConfigError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, OPENCONNECT_CONFIG_TEMPLATE.trim())
        .map_err(render_failed)?;

    tt.render(TEMPLATE_NAME, context).map_err(render_failed)
}

fn render_failed(e: tinytemplate::error::Error) -> ConfigError {
    ConfigError::ConfigRenderFailed {
        source: Box::new(e),
    }
}
