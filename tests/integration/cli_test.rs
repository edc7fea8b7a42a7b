//! Integration tests for the folio CLI

use predicates::prelude::*;

use crate::helpers::{write_site, TestEnv};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["--help"]);

    assert_eq!(exit_code, 0);
    for sub in ["view", "theme", "contact", "config", "completions"] {
        assert!(stdout.contains(sub), "missing {} in help", sub);
    }
}

#[test]
fn snapshot_cli_help_theme() {
    let env = TestEnv::new();
    let (stdout, stderr, exit_code) = env.run(&["theme", "--help"]);
    let output = format!(
        "=== folio theme --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_help_theme", output);
}

#[test]
fn version_flag_prints_version() {
    TestEnv::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("folio "));
}

// ============================================================================
// Theme Tests
// ============================================================================

#[test]
fn theme_defaults_to_light() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["theme"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "light");
}

#[test]
fn theme_toggle_persists_between_runs() {
    let env = TestEnv::new();

    let (stdout, _, code) = env.run(&["theme", "toggle"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "dark");

    let (stdout, _, _) = env.run(&["theme", "show"]);
    assert_eq!(stdout.trim(), "dark");
    assert!(env.state_dir().join("preferences.toml").exists());

    let (stdout, _, _) = env.run(&["theme", "toggle"]);
    assert_eq!(stdout.trim(), "light");
}

#[test]
fn theme_set_accepts_any_case() {
    let env = TestEnv::new();
    env.command()
        .args(["theme", "set", "DARK"])
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn theme_set_rejects_unknown_mode() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["theme", "set", "sepia"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unknown theme 'sepia'"));
}

#[test]
fn garbage_preference_reads_as_light() {
    let env = TestEnv::new();
    std::fs::write(env.state_dir().join("preferences.toml"), "theme = \"neon\"\n").unwrap();
    let (stdout, _, code) = env.run(&["theme"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "light");
}

// ============================================================================
// Contact Tests
// ============================================================================

fn contact_args<'a>(email: &'a str, message: &'a str) -> Vec<&'a str> {
    vec![
        "contact",
        "--name",
        "Ada",
        "--email",
        email,
        "--subject",
        "Hello",
        "--message",
        message,
        "--no-delay",
    ]
}

#[test]
fn contact_rejects_invalid_email() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&contact_args("ada@example", "Hi"));

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Please enter a valid email address."));
}

#[test]
fn contact_rejects_blank_field() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&contact_args("ada@example.com", "   "));

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Please fill in all fields."));
}

#[test]
fn contact_sends_when_backend_always_succeeds() {
    let env = TestEnv::new();
    env.write_config("[contact]\nsuccess_rate = 1.0\n");

    env.command()
        .args(contact_args("ada@example.com", "Hi there"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sending...").and(predicate::str::contains("Message Sent!")));
}

#[test]
fn contact_reports_backend_failure() {
    let env = TestEnv::new();
    env.write_config("[contact]\nsuccess_rate = 0.0\n");

    env.command()
        .args(contact_args("ada@example.com", "Hi there"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed, try again"));
}

#[test]
fn contact_requires_all_flags() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["contact", "--name", "Ada"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--email"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_points_into_config_dir() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["config", "path"]);

    assert_eq!(exit_code, 0);
    let expected = env.config_dir().join("config.toml");
    assert_eq!(stdout.trim(), expected.display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[typing]"));
    assert!(stdout.contains("type_delay_ms = 100"));
    assert!(stdout.contains("submit_delay_ms = 2000"));
}

#[test]
fn config_show_merges_partial_file() {
    let env = TestEnv::new();
    env.write_config("[typing]\ndwell_ms = 900\n");
    let (stdout, _, code) = env.run(&["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("dwell_ms = 900"));
    assert!(stdout.contains("delete_delay_ms = 50"));
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    env.write_config("[typing\n");
    let (_stdout, stderr, exit_code) = env.run(&["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config"));
}

// ============================================================================
// View and Completions Tests
// ============================================================================

#[test]
fn view_rejects_unknown_section() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["view", "--section", "blog"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("possible values"));
}

#[test]
fn view_needs_a_terminal() {
    let env = TestEnv::new();
    let (_stdout, stderr, exit_code) = env.run(&["view"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("interactive terminal"));
}

#[test]
fn view_reports_bad_site_file() {
    let env = TestEnv::new();
    let site = write_site(env.root(), "[[stats]]\nlabel = \"Clients\"\ncount = \"lots\"\n");
    let site = site.display().to_string();
    let (_stdout, stderr, exit_code) = env.run(&["view", "--site", &site]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("non-numeric count"));
}

#[test]
fn completions_generate_script() {
    let env = TestEnv::new();
    let (stdout, _stderr, exit_code) = env.run(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("folio"));
}
