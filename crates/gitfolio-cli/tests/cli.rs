use assert_cmd::Command;
use predicates::prelude::*;

/// Builds a command with config sources isolated to a temp home so the
/// developer's real config file and environment never leak in.
fn gitfolio(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitfolio").expect("binary exists");
    cmd.env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

#[test]
fn test_version() {
    let home = tempfile::tempdir().expect("tempdir");
    gitfolio(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitfolio"));
}

#[test]
fn test_help_contains_all_commands() {
    let home = tempfile::tempdir().expect("tempdir");
    gitfolio(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("page"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_list_with_placeholder_username_is_misconfigured() {
    let home = tempfile::tempdir().expect("tempdir");
    gitfolio(&home)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("github.username"));
}

#[test]
fn test_page_with_placeholder_username_still_writes_page() {
    let home = tempfile::tempdir().expect("tempdir");
    let out = home.path().join("portfolio.html");

    gitfolio(&home)
        .arg("page")
        .arg("--out")
        .arg(&out)
        .assert()
        .code(2);

    let page = std::fs::read_to_string(&out).expect("page written");
    assert!(page.contains("status-message"));
    assert!(page.contains("github.username"));
    assert!(!page.contains("class=\"card\""));
}

#[test]
fn test_list_against_unreachable_api_fails_with_message() {
    let home = tempfile::tempdir().expect("tempdir");
    gitfolio(&home)
        .env("GITFOLIO_GITHUB__API_BASE", "http://127.0.0.1:1")
        .args(["list", "--user", "octocat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load repositories"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let home = tempfile::tempdir().expect("tempdir");
    let config_dir = home.path().join("gitfolio");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    // Placeholder username on purpose: only the guard path runs, no network.
    std::fs::write(
        config_dir.join("config.toml"),
        "[display]\nlimit = 3\n",
    )
    .expect("config file");

    gitfolio(&home)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("github.username"));
}

#[test]
fn test_completion_bash() {
    let home = tempfile::tempdir().expect("tempdir");
    gitfolio(&home)
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitfolio"));
}

#[test]
fn test_invalid_config_file_reports_config_error() {
    let home = tempfile::tempdir().expect("tempdir");
    let config_dir = home.path().join("gitfolio");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(config_dir.join("config.toml"), "not [valid toml").expect("config file");

    gitfolio(&home)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
