//! Build metadata for `-version`
//!
//! `build.rs` exports the git revision, commit time and dirty flag at
//! compile time; any of them may be missing.

const REVISION_LENGTH: usize = 10;

/// Version string: `<revision>[-<commit unix time>][-dirty]`, or `unknown`
pub fn version() -> String {
    format_vcs_info(
        option_env!("OC_OTP_VCS_REVISION"),
        option_env!("OC_OTP_VCS_TIME"),
        option_env!("OC_OTP_VCS_MODIFIED"),
    )
}

fn format_vcs_info(revision: Option<&str>, time: Option<&str>, modified: Option<&str>) -> String {
    let Some(revision) = revision.map(str::trim).filter(|r| !r.is_empty()) else {
        return "unknown".to_string();
    };

    let mut info: String = revision.chars().take(REVISION_LENGTH).collect();

    if let Some(timestamp) = time.and_then(|t| t.trim().parse::<i64>().ok()) {
        info.push_str(&format!("-{}", timestamp));
    }

    if modified.is_some_and(|m| m.trim().eq_ignore_ascii_case("true")) {
        info.push_str("-dirty");
    }

    info
}
