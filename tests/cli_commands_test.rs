// Integration tests for CLI commands
// Run with: cargo test --test cli_commands_test

use std::process::Command;
use tempfile::TempDir;

/// Command for the built binary with config and log isolated in `dir`.
fn ttykeys(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ttykeys"));
    cmd.env("TTYKEYS_CONFIG_DIR", dir.path())
        .env("TTYKEYS_LOG_FILE", dir.path().join("test.log"))
        .env_remove("TTYKEYS_SAMPLE_DELAY_US");
    cmd
}

#[test]
fn test_config_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let output = ttykeys(&dir).arg("config").output().unwrap();

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["sample_delay_us"], 100);
    assert_eq!(value["quit_key"], "q");
}

#[test]
fn test_config_init_writes_file() {
    let dir = TempDir::new().unwrap();
    let output = ttykeys(&dir)
        .args(["config", "--init"])
        .env("TTYKEYS_SAMPLE_DELAY_US", "500")
        .output()
        .unwrap();

    assert!(output.status.success(), "Command should succeed");
    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["sample_delay_us"], 500);
}

#[test]
fn test_config_file_is_read() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"quit_key": "x"}"#).unwrap();

    let output = ttykeys(&dir).arg("config").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["quit_key"], "x");
    assert_eq!(value["sample_delay_us"], 100);
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "not json").unwrap();

    let output = ttykeys(&dir).arg("config").output().unwrap();
    assert!(!output.status.success(), "Bad config should be an error");
}

#[test]
fn test_colors_resets_attributes() {
    let dir = TempDir::new().unwrap();
    let output = ttykeys(&dir).arg("colors").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lightmagenta"));
    assert!(stdout.trim_end().ends_with("\x1b[0m"));
}

#[test]
fn test_keys_quits_on_quit_key() {
    let dir = TempDir::new().unwrap();
    let mut child = ttykeys(&dir)
        .arg("keys")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();

    {
        use std::io::Write;
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"a\x1b[Aq").unwrap();
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("up"));
    assert!(stdout.contains("code   97"));
}

/// stdin that reads fine but cannot report queued bytes keeps decoding.
#[test]
fn test_keys_survives_stdin_without_byte_count() {
    let dir = TempDir::new().unwrap();
    let zero = std::fs::File::open("/dev/zero").unwrap();
    let mut child = ttykeys(&dir)
        .arg("keys")
        .stdin(zero)
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();

    std::thread::sleep(std::time::Duration::from_millis(1500));
    let still_running = child.try_wait().unwrap().is_none();
    child.kill().unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(still_running, "key viewer should not exit on /dev/zero");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("legacy(-41)"));
}

#[test]
fn test_ignored_override_is_logged() {
    let dir = TempDir::new().unwrap();
    let output = ttykeys(&dir)
        .arg("config")
        .env("TTYKEYS_SAMPLE_DELAY_US", "soon")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(value["sample_delay_us"], 100);

    let log = std::fs::read_to_string(dir.path().join("test.log")).unwrap();
    assert!(log.contains("TTYKEYS_SAMPLE_DELAY_US"), "log was: {log}");
}
