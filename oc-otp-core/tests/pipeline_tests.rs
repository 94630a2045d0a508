//! Integration tests for config generation
//!
//! `systemd-creds` is replaced by stub runners; runtime credentials live in
//! temporary directories.

use oc_otp_core::create_config;
use oc_otp_core::error::{ConfigError, OcOtpError, OtpError, SecretError};
use oc_otp_core::secret::{CommandError, CommandRunner, SecretResolver, SystemCommandRunner};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::{tempdir, TempDir};

const FORM_ENTRY: &str = "main:secondary_password";

/// Replies with a fixed provisioning URL and records every invocation
struct StubDecrypt {
    url: String,
    calls: RefCell<Vec<Vec<String>>>,
}

impl StubDecrypt {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for &StubDecrypt {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);
        Ok(format!("{}\n", self.url).into_bytes())
    }
}

struct MissingTool;

impl CommandRunner for MissingTool {
    fn run(&self, program: &str, _args: &[&str]) -> Result<Vec<u8>, CommandError> {
        Err(CommandError::Spawn {
            program: program.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        })
    }
}

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn credentials(name: &str, url: &str) -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(name), format!("{}\n", url)).unwrap();
    dir
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_sealed_file_totp() {
    let stub = StubDecrypt::new(
        "otpauth://totp/VPN:alice?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&digits=8",
    );
    let resolver = SecretResolver::new(&stub, None);
    let out = tempdir().unwrap();
    let target = out.path().join("x").join("oc.conf");

    create_config(
        &resolver,
        &target,
        "file:/etc/credstore.encrypted//vpn-otp",
        FORM_ENTRY,
        at(1111111111),
    )
    .unwrap();

    assert_eq!(read(&target), "form-entry=main:secondary_password=14050471\n");
    assert_eq!(
        *stub.calls.borrow(),
        vec![vec![
            "systemd-creds",
            "--with-key=tpm2",
            "decrypt",
            "/etc/credstore.encrypted/vpn-otp",
            "-"
        ]]
    );
}

#[test]
fn test_missing_decrypt_tool() {
    let resolver = SecretResolver::new(MissingTool, None);
    let out = tempdir().unwrap();
    let target = out.path().join("oc.conf");

    let result = create_config(&resolver, &target, "file:/x", FORM_ENTRY, at(0));

    match result {
        Err(OcOtpError::Secret(SecretError::DecryptionFailed { path, .. })) => {
            assert_eq!(path, PathBuf::from("/x"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!target.exists());
}

#[test]
fn test_invalid_locator_writes_nothing() {
    let resolver = SecretResolver::new(SystemCommandRunner, None);
    let out = tempdir().unwrap();
    let target = out.path().join("sub").join("oc.conf");

    let result = create_config(
        &resolver,
        &target,
        "otpauth://totp/x?secret=GEZDGNBVGY3TQOJQ",
        FORM_ENTRY,
        at(0),
    );

    assert!(matches!(
        result,
        Err(OcOtpError::Secret(SecretError::InvalidLocatorScheme))
    ));
    assert!(!target.exists());
    assert!(!target.parent().unwrap().exists());
}

#[test]
fn test_missing_credentials_directory_writes_nothing() {
    let resolver = SecretResolver::new(SystemCommandRunner, None);
    let out = tempdir().unwrap();
    let target = out.path().join("oc.conf");

    let result = create_config(&resolver, &target, "key:vpn-otp", FORM_ENTRY, at(0));

    assert!(matches!(
        result,
        Err(OcOtpError::Secret(SecretError::MissingCredentialsDirectory { .. }))
    ));
    assert!(!target.exists());
}

#[test]
fn test_missing_credential_file() {
    let creds = tempdir().unwrap();
    let resolver = SecretResolver::new(SystemCommandRunner, Some(creds.path().to_path_buf()));
    let out = tempdir().unwrap();

    let result = create_config(
        &resolver,
        &out.path().join("oc.conf"),
        "key:absent",
        FORM_ENTRY,
        at(0),
    );

    assert!(matches!(
        result,
        Err(OcOtpError::Secret(SecretError::CredentialReadFailed { ref name, .. })) if name == "absent"
    ));
}

#[test]
fn test_malformed_provisioning_url() {
    let creds = credentials("vpn-otp", "this is not an otpauth url");
    let resolver = SecretResolver::new(SystemCommandRunner, Some(creds.path().to_path_buf()));
    let out = tempdir().unwrap();
    let target = out.path().join("oc.conf");

    let result = create_config(&resolver, &target, "key:vpn-otp", FORM_ENTRY, at(0));

    assert!(matches!(
        result,
        Err(OcOtpError::Otp(OtpError::InvalidProvisioningUrl { .. }))
    ));
    assert!(!target.exists());
}

#[test]
fn test_rerun_overwrites_previous_config() {
    let out = tempdir().unwrap();
    let target = out.path().join("oc.conf");

    let first = credentials(
        "vpn-otp",
        "otpauth://totp/x?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&digits=8",
    );
    let resolver = SecretResolver::new(SystemCommandRunner, Some(first.path().to_path_buf()));
    create_config(&resolver, &target, "key:vpn-otp", "main:a-much-longer-form-entry-key", at(59))
        .unwrap();
    assert_eq!(read(&target), "form-entry=main:a-much-longer-form-entry-key=94287082\n");

    let second = credentials(
        "vpn-otp",
        "otpauth://hotp/x?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&counter=9",
    );
    let resolver = SecretResolver::new(SystemCommandRunner, Some(second.path().to_path_buf()));
    create_config(&resolver, &target, "key:vpn-otp", FORM_ENTRY, at(59)).unwrap();
    assert_eq!(read(&target), "form-entry=main:secondary_password=520489\n");
}

#[test]
fn test_empty_target() {
    let resolver = SecretResolver::new(SystemCommandRunner, None);
    let result = create_config(&resolver, Path::new(""), "key:vpn-otp", FORM_ENTRY, at(0));
    assert!(matches!(
        result,
        Err(OcOtpError::Config(ConfigError::EmptyTargetPath))
    ));
}
