#![allow(clippy::unwrap_used, reason = "test code")]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

// Nothing listens on port 1, so every request fails at the transport level.
const DEAD_URL: &str = "http://127.0.0.1:1";

fn dishpick() -> Command {
    let mut cmd = Command::cargo_bin("dishpick").unwrap();
    cmd.env_remove("DISHPICK_URL").env("RUST_LOG", "error");
    cmd
}

#[test]
fn help_lists_commands() {
    dishpick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("pick"));
}

#[test]
fn serve_help_shows_flags() {
    dishpick()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn check_env_reports_missing_database() {
    dishpick()
        .current_dir(std::env::temp_dir())
        .env_clear()
        .arg("check-env")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ NEON_URL: not set"))
        .stdout(predicate::str::contains("selected: none"));
}

#[test]
fn check_env_masks_long_values() {
    let url = format!("postgres://user:{}@db.example/dishes", "s".repeat(60));
    dishpick()
        .current_dir(std::env::temp_dir())
        .env_clear()
        .env("DATABASE_URL", &url)
        .arg("check-env")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ DATABASE_URL"))
        .stdout(predicate::str::contains(url.as_str()).not())
        .stdout(predicate::str::contains("selected: DATABASE_URL"));
}

#[test]
fn pick_falls_back_to_presets_when_server_unreachable() {
    dishpick()
        .args(["--url", DEAD_URL, "pick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("today:"));
}

#[test]
fn clear_requires_confirmation() {
    dishpick()
        .args(["--url", DEAD_URL, "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn add_reports_network_error() {
    dishpick()
        .args(["--url", DEAD_URL, "add", "红烧肉"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("network error"));
}

#[test]
fn add_rejects_blank_name() {
    dishpick()
        .args(["--url", DEAD_URL, "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dish name must not be empty"));
}

#[test]
fn import_dry_run_previews_without_database() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# 家常菜").unwrap();
    writeln!(file, "红烧肉、宫保鸡丁（微辣），鱼香肉丝").unwrap();
    writeln!(file, "红烧肉").unwrap();

    dishpick()
        .env_clear()
        .args(["import", "--dry-run"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("found 3 distinct dishes"))
        .stdout(predicate::str::contains("宫保鸡丁"))
        .stdout(predicate::str::contains("微辣").not());
}

#[test]
fn import_missing_file_fails() {
    dishpick()
        .args(["import", "--dry-run", "/nonexistent/menu.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read menu file"));
}
