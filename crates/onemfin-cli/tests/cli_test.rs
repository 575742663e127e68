//! Exit-status and diagnostic contract of the `onemfin` binary. None of these
//! reach a live store.

use std::io::Write;

use assert_cmd::Command;
use tempfile::TempDir;

const STORE_ENV: [&str; 8] = [
    "ONEMFIN_STORE_URL",
    "SUPABASE_URL",
    "ONEMFIN_STORE_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
    "ONEMFIN_STORE_TIMEOUT_SECS",
    "ONEMFIN_LINK_BASE_URL",
    "ONEMFIN_CHECK_SUBMISSIONS",
    "ONEMFIN_JSON_LOGS",
];

/// `onemfin` in an empty directory with a scrubbed environment.
fn onemfin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onemfin").expect("bin");
    cmd.current_dir(dir.path()).env("ONEMFIN_LOG", "off");
    for key in STORE_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// Configured against a loopback port nothing listens on.
fn onemfin_unreachable(dir: &TempDir) -> Command {
    let mut cmd = onemfin(dir);
    cmd.env("ONEMFIN_STORE_URL", "http://127.0.0.1:9")
        .env("ONEMFIN_STORE_KEY", "service-role-key")
        .env("ONEMFIN_STORE_TIMEOUT_SECS", "2");
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = onemfin(&dir).arg("--help").output().expect("help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    for sub in ["verify", "seed", "issue-links", "lead"] {
        assert!(text.contains(sub), "help is missing {sub}");
    }
}

#[test]
fn missing_store_settings_exit_with_config_error() {
    let dir = TempDir::new().unwrap();
    let output = onemfin(&dir).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).starts_with("error [CONFIG_ERROR]: "));
}

#[test]
fn missing_key_alone_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = onemfin(&dir)
        .env("SUPABASE_URL", "https://abc.supabase.co")
        .arg("verify")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("store.service_key"));
}

#[test]
fn invalid_store_url_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = onemfin(&dir)
        .env("ONEMFIN_STORE_URL", "not a url")
        .env("ONEMFIN_STORE_KEY", "k")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    onemfin_unreachable(&dir)
        .args(["--config", "nope.toml", "verify"])
        .assert()
        .code(2);
}

#[test]
fn config_file_in_working_directory_is_read() {
    let dir = TempDir::new().unwrap();
    let mut file = std::fs::File::create(dir.path().join("onemfin.toml")).unwrap();
    writeln!(file, "[store]\ntimeout_secs = 0").unwrap();

    let output = onemfin_unreachable(&dir)
        .env_remove("ONEMFIN_STORE_TIMEOUT_SECS")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("timeout_secs"));
}

#[test]
fn unreachable_store_exits_with_store_error() {
    let dir = TempDir::new().unwrap();
    let output = onemfin_unreachable(&dir).arg("verify").output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no partial report on stdout");
    assert!(stderr_of(&output).starts_with("error [STORE_NETWORK]: "));
}

#[test]
fn seed_against_unreachable_store_is_seed_failure() {
    let dir = TempDir::new().unwrap();
    let output = onemfin_unreachable(&dir)
        .args(["seed", "u-1"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_of(&output).starts_with("error [SEED_FAILURE]: "));
}

#[test]
fn issue_links_without_base_url_fails_before_fetching() {
    let dir = TempDir::new().unwrap();
    let output = onemfin_unreachable(&dir)
        .args(["issue-links", "--dry-run"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("links.base_url"));
}

#[test]
fn seed_requires_a_user_id() {
    let dir = TempDir::new().unwrap();
    onemfin_unreachable(&dir).arg("seed").assert().failure();
}

#[test]
fn malformed_service_key_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = onemfin(&dir)
        .env("ONEMFIN_STORE_URL", "https://abc.supabase.co")
        .env("ONEMFIN_STORE_KEY", "bad\nkey")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).starts_with("error [CONFIG_ERROR]: "));
}
