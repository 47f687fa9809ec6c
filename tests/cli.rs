use assert_cmd::Command;
use predicates::prelude::*;

fn termplot(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("termplot").unwrap();
    cmd.arg("--config").arg(config_dir.path().join("settings.toml"));
    cmd
}

#[test]
fn list_themes_prints_ui_and_plot_themes() {
    let dir = tempfile::tempdir().unwrap();
    termplot(&dir)
        .arg("--list-themes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("UI themes:")
                .and(predicate::str::contains("nord"))
                .and(predicate::str::contains("tui-default"))
                .and(predicate::str::contains("auto")),
        );
}

#[test]
fn unknown_plot_theme_fails_before_touching_the_terminal() {
    let dir = tempfile::tempdir().unwrap();
    termplot(&dir)
        .args(["--plot-theme", "no-such-theme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown plot theme"));
}

#[test]
fn invalid_settings_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("settings.toml"), "tick_ms = \"often\"").unwrap();
    termplot(&dir)
        .arg("--list-themes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading settings"));
}
