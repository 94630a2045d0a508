//! Command-line flag spelling
//!
//! Long flags are accepted with one dash (`-config x`, `-config=x`) as well
//! as two (`--config x`). One-dash spellings are rewritten before clap sees
//! them.

use std::ffi::OsString;

/// Long flag names understood by the parser
const LONG_FLAGS: [&str; 5] = ["config", "otp-auth", "form-entry", "version", "help"];

/// Rewrite `-name[=value]` to `--name[=value]` for known long flags
///
/// Arguments after a bare `--` are left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }

            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(text) if is_single_dash_long_flag(text) => Some(format!("-{}", text)),
                _ => None,
            };

            rewritten.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
        return false;
    };

    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
