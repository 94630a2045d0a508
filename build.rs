//! Records git metadata for `oc-otp -version`
//!
//! Every value is optional: builds outside a git checkout (or without git
//! installed) simply report `unknown`.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if value.is_empty() {
        return None;
    }
    Some(value)
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let Some(revision) = git(&["rev-parse", "HEAD"]) else {
        return;
    };
    println!("cargo:rustc-env=OC_OTP_VCS_REVISION={}", revision);

    if let Some(time) = git(&["log", "-1", "--format=%ct"]) {
        println!("cargo:rustc-env=OC_OTP_VCS_TIME={}", time);
    }

    let modified = git(&["status", "--porcelain"]).is_some();
    println!("cargo:rustc-env=OC_OTP_VCS_MODIFIED={}", modified);
}
