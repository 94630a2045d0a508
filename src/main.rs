//! oc-otp - OpenConnect OTP config generator
//!
//! Generates a single TOTP/HOTP code from a TPM2-sealed or systemd-injected
//! `otpauth://` secret and writes it as a `form-entry` line into an
//! OpenConnect config file.

use clap::Parser;
use oc_otp_core::config::DEFAULT_FORM_ENTRY_KEY;
use oc_otp_core::init_logging;
use tracing::debug;

mod build_info;
mod cli;

#[derive(Parser)]
#[command(name = "oc-otp")]
#[command(about = "Write a one-time password into an OpenConnect VPN config")]
#[command(disable_version_flag = true)]
struct Cli {
    /// OpenConnect VPN config file location.
    #[arg(
        long,
        value_name = "PATH",
        env = "OC_OTP_CONFIG",
        default_value = "",
        hide_default_value = true
    )]
    config: String,

    /// OTP Authentication URL (file:/path/to/encrypted/file or key:name of systemd credential object).
    #[arg(
        long = "otp-auth",
        value_name = "LOCATOR",
        env = "OC_OTP_AUTH",
        default_value = "",
        hide_default_value = true
    )]
    otp_auth: String,

    /// OpenConnect VPN config "form-entry" key name.
    #[arg(
        long = "form-entry",
        value_name = "KEY",
        env = "OC_OTP_FORM_ENTRY",
        default_value = DEFAULT_FORM_ENTRY_KEY
    )]
    form_entry: String,

    /// Show build info and exit.
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse_from(cli::flags::normalize_args(std::env::args_os()));

    if cli.version {
        println!("{}", build_info::version());
        return;
    }

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Failures are reported on stdout and the exit status stays 0
    match cli::create_config::run_create_config(&cli.config, &cli.otp_auth, &cli.form_entry) {
        Ok(()) => println!("OpenConnect VPN config file created successfully"),
        Err(e) => {
            debug!("{}", e);
            println!("Failed to create OpenConnect VPN config: {}", e);
        }
    }
}
