//! Unit tests for flag > environment > default layering.
//!
//! These tests mutate `QUADS_*` env vars and are serialized with `#[serial]`.

#![allow(clippy::expect_used, clippy::unwrap_used, unsafe_code)]

use clap::Parser;
use quads_cli::cli::{Cli, Command};
use serial_test::serial;

const VARS: &[&str] = &[
    "QUADS_SERVER",
    "QUADS_USERNAME",
    "QUADS_PASSWORD",
    "QUADS_CLOUD",
    "QUADS_OWNER",
    "QUADS_DESCRIPTION",
    "QUADS_QINQ",
    "QUADS_WIPE",
    "QUADS_ASSIGNMENT_ID",
    "QUADS_TIMEOUT",
    "QUADS_POLL_INTERVAL",
];

/// Clear every `QUADS_*` var, then set the given ones.
fn with_env(pairs: &[(&str, &str)]) {
    // SAFETY: every test touching the environment is #[serial].
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
    for (key, value) in pairs {
        unsafe { std::env::set_var(key, value) };
    }
}

#[test]
#[serial]
fn test_env_fills_root_options() {
    with_env(&[
        ("QUADS_SERVER", "quads.example.com"),
        ("QUADS_USERNAME", "alice@example.com"),
        ("QUADS_PASSWORD", "pw"),
        ("QUADS_CLOUD", "cloud02"),
    ]);

    let cli = Cli::try_parse_from(["auto-quads", "available-hosts"]).unwrap();

    assert_eq!(cli.quads_server.as_deref(), Some("quads.example.com"));
    assert_eq!(cli.username.as_deref(), Some("alice@example.com"));
    assert_eq!(cli.password.as_deref(), Some("pw"));
    assert_eq!(cli.cloud.as_deref(), Some("cloud02"));
    assert!(cli.owner.is_none());
    with_env(&[]);
}

#[test]
#[serial]
fn test_flag_overrides_env() {
    with_env(&[("QUADS_SERVER", "env.example.com"), ("QUADS_CLOUD", "cloud02")]);

    let cli = Cli::try_parse_from([
        "auto-quads",
        "--quads-server",
        "flag.example.com",
        "-c",
        "cloud09",
        "available-hosts",
    ])
    .unwrap();

    assert_eq!(cli.quads_server.as_deref(), Some("flag.example.com"));
    assert_eq!(cli.cloud.as_deref(), Some("cloud09"));
    with_env(&[]);
}

#[test]
#[serial]
fn test_wait_defaults_apply_without_flag_or_env() {
    with_env(&[("QUADS_ASSIGNMENT_ID", "17")]);

    let cli = Cli::try_parse_from(["auto-quads", "wait-for-cloud"]).unwrap();

    match cli.command.expect("subcommand") {
        Command::WaitForCloud(args) => {
            assert_eq!(args.assignment_id, "17");
            assert_eq!(args.timeout, 900);
            assert_eq!(args.poll_interval, 10);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    with_env(&[]);
}

#[test]
#[serial]
fn test_wait_env_then_flag() {
    with_env(&[
        ("QUADS_ASSIGNMENT_ID", "17"),
        ("QUADS_TIMEOUT", "60"),
        ("QUADS_POLL_INTERVAL", "5"),
    ]);

    let cli = Cli::try_parse_from(["auto-quads", "wait-for-cloud", "-t", "120"]).unwrap();

    match cli.command.expect("subcommand") {
        Command::WaitForCloud(args) => {
            assert_eq!(args.timeout, 120);
            assert_eq!(args.poll_interval, 5);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    with_env(&[]);
}

#[test]
#[serial]
fn test_create_cloud_reads_description_qinq_wipe_from_env() {
    with_env(&[
        ("QUADS_DESCRIPTION", "nightly perf"),
        ("QUADS_QINQ", "1"),
        ("QUADS_WIPE", "true"),
    ]);

    let cli = Cli::try_parse_from(["auto-quads", "create-cloud"]).unwrap();

    match cli.command.expect("subcommand") {
        Command::CreateCloud(args) => {
            assert_eq!(args.description, "nightly perf");
            assert_eq!(args.qinq, 1);
            assert!(args.wipe);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    with_env(&[]);
}

#[test]
#[serial]
fn test_create_cloud_requires_description() {
    with_env(&[]);
    assert!(Cli::try_parse_from(["auto-quads", "create-cloud"]).is_err());
}

#[test]
#[serial]
fn test_terminate_requires_assignment_id() {
    with_env(&[]);
    assert!(Cli::try_parse_from(["auto-quads", "terminate-cloud"]).is_err());
    assert!(Cli::try_parse_from(["auto-quads", "terminate-cloud", "-i", "17"]).is_ok());
}

#[test]
#[serial]
fn test_no_color_accepts_any_truthy_value() {
    with_env(&[]);
    let cases = [
        ("1", true),
        ("yes", true),
        ("true", true),
        ("0", false),
        ("false", false),
    ];
    for (value, expected) in cases {
        // SAFETY: #[serial].
        unsafe { std::env::set_var("NO_COLOR", value) };
        let cli = Cli::try_parse_from(["auto-quads", "-s", "q", "available-hosts"])
            .unwrap_or_else(|e| panic!("NO_COLOR={value} rejected: {e}"));
        assert_eq!(cli.no_color, expected, "NO_COLOR={value}");
    }
    unsafe { std::env::remove_var("NO_COLOR") };
}

#[test]
#[serial]
fn test_create_cloud_wipe_env_accepts_boolish_values() {
    let cases = [
        ("1", true),
        ("yes", true),
        ("on", true),
        ("0", false),
        ("no", false),
    ];
    for (value, expected) in cases {
        with_env(&[("QUADS_WIPE", value)]);
        let cli = Cli::try_parse_from(["auto-quads", "create-cloud", "-d", "x"])
            .unwrap_or_else(|e| panic!("QUADS_WIPE={value} rejected: {e}"));
        match cli.command.expect("subcommand") {
            Command::CreateCloud(args) => {
                assert_eq!(args.wipe, expected, "QUADS_WIPE={value}");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
    with_env(&[]);
}
