//! End-to-end tests running the `cc-switch` binary against a temp directory.

mod common;

use std::process::{Command, Output};

use cc_switch::config::{CLAUDE_DIR_ENV, CONFIG_PATH_ENV};
use common::Fixture;
use serde_json::json;

fn cc_switch(fixture: &Fixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cc-switch"))
        .args(args)
        .env(CLAUDE_DIR_ENV, fixture.claude_dir())
        .env(CONFIG_PATH_ENV, fixture.claude_dir().join("cc-switch.toml"))
        .env("NO_COLOR", "1")
        .env_remove("CC_SWITCH_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_commands() {
    let fixture = Fixture::empty();
    let out = cc_switch(&fixture, &["--help"]);
    let text = stdout(&out);
    assert!(out.status.success());
    for cmd in ["list", "use", "current", "history", "restore"] {
        assert!(text.contains(cmd), "missing {cmd} in help: {text}");
    }
}

#[test]
fn list_without_profiles_hints_location() {
    let fixture = Fixture::with_settings(json!({}));
    let out = cc_switch(&fixture, &["list"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("No profiles found"));
}

#[test]
fn add_then_use_switches_settings() {
    let fixture = Fixture::with_settings(json!({"env": {"SOME_OTHER_VAR": "keep-me"}}));

    let out = cc_switch(
        &fixture,
        &["add", "openrouter", "--token", "sk-or-123", "--name", "OR Work"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Created OR Work (or-work)"));

    let out = cc_switch(&fixture, &["use", "or-work"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Switched to OR Work"));

    let settings = fixture.read_settings();
    assert_eq!(settings["env"]["ANTHROPIC_AUTH_TOKEN"], "sk-or-123");
    assert_eq!(settings["env"]["SOME_OTHER_VAR"], "keep-me");
    assert_eq!(settings["currentProfileId"], "or-work");

    let out = cc_switch(&fixture, &["list"]);
    let text = stdout(&out);
    assert!(text.contains("✓"));
    assert!(text.contains("(or-work)"));
}

#[test]
fn use_unknown_profile_exits_with_error() {
    let fixture = Fixture::with_settings(json!({}));
    let out = cc_switch(&fixture, &["use", "nope"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Error: Profile not found: nope"));
}

#[test]
fn current_masks_token() {
    let fixture = Fixture::with_settings(json!({
        "env": {
            "ANTHROPIC_AUTH_TOKEN": "sk-ant-api03-secretvalue",
            "ANTHROPIC_BASE_URL": "https://open.bigmodel.cn/api/anthropic"
        }
    }));
    let out = cc_switch(&fixture, &["current"]);
    let text = stdout(&out);

    assert!(out.status.success());
    assert!(text.contains("Provider: zhipu-coding"));
    assert!(text.contains("Haiku Model: default"));
    assert!(text.contains("sk-ant-...alue"));
    assert!(!text.contains("secretvalue"));
}

#[test]
fn history_and_restore() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "first"}}));
    let out = cc_switch(&fixture, &["history"]);
    assert!(stdout(&out).contains("No backups found"));

    let out = cc_switch(&fixture, &["add", "custom", "--token", "second", "--use"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(fixture.read_settings()["env"]["ANTHROPIC_AUTH_TOKEN"], "second");

    let backups = fixture.switcher.list_backups().unwrap();
    assert_eq!(backups.len(), 1);
    let out = cc_switch(&fixture, &["history"]);
    assert!(stdout(&out).contains(&format!("1. {}", backups[0])));

    let out = cc_switch(&fixture, &["restore", &backups[0]]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Restored from"));
    assert_eq!(fixture.read_settings()["env"]["ANTHROPIC_AUTH_TOKEN"], "first");
}

#[test]
fn restore_unknown_backup_fails() {
    let fixture = Fixture::with_settings(json!({}));
    let out = cc_switch(&fixture, &["restore", "nope.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Backup not found: nope.json"));
}

#[test]
fn unknown_preset_lists_available() {
    let fixture = Fixture::with_settings(json!({}));
    let out = cc_switch(&fixture, &["add", "acme", "--token", "t"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Available presets: anthropic"));
}

#[test]
fn save_and_delete() {
    let fixture = Fixture::with_settings(json!({
        "env": {"ANTHROPIC_AUTH_TOKEN": "tok", "ANTHROPIC_BASE_URL": "https://api.example.com"}
    }));

    let out = cc_switch(&fixture, &["save", "--name", "Example"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Saved as \"Example\" (example)"));

    let out = cc_switch(&fixture, &["delete", "example"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(fixture.switcher.load_profile("example").is_err());
}

#[test]
fn agent_teams_toggle() {
    let fixture = Fixture::with_settings(json!({"env": {}}));

    let out = cc_switch(&fixture, &["agent-teams", "enable"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let settings = fixture.read_settings();
    assert_eq!(settings["env"]["CLAUDE_CODE_EXPERIMENTAL_AGENT_TEAMS"], "1");
    assert_eq!(settings["teammateMode"], "tmux");

    let out = cc_switch(&fixture, &["agent-teams"]);
    assert!(stdout(&out).contains("Agent teams: enabled"));

    cc_switch(&fixture, &["agent-teams", "disable"]);
    let out = cc_switch(&fixture, &["agent-teams", "status"]);
    assert!(stdout(&out).contains("Agent teams: disabled"));
}

#[test]
fn add_with_blank_token_fails_without_writing() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "live"}}));

    let out = cc_switch(&fixture, &["add", "custom", "--token", "", "--use"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("ANTHROPIC_AUTH_TOKEN"));
    assert!(!fixture.paths.profiles_dir.join("custom.json").exists());
    assert_eq!(fixture.read_settings()["env"]["ANTHROPIC_AUTH_TOKEN"], "live");
    assert!(fixture.switcher.list_backups().unwrap().is_empty());
}

#[test]
fn add_with_blank_id_uses_name() {
    let fixture = Fixture::with_settings(json!({}));

    let out = cc_switch(
        &fixture,
        &["add", "openrouter", "--token", "t", "--id", "", "--name", "Work Box"],
    );

    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("(work-box)"));
    assert!(fixture.paths.profiles_dir.join("work-box.json").is_file());
}

#[test]
fn save_with_blank_name_fails() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "t"}}));

    let out = cc_switch(&fixture, &["save", "--id", "laptop", "--name", ""]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid profile: name must not be empty"));
    assert!(!fixture.paths.profiles_dir.join("laptop.json").exists());
}
