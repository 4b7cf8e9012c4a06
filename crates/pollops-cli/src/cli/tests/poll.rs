//! Tests for the poll subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_poll_defaults() {
    match parse(&["pollops", "poll", "--", "curl", "-f", "http://localhost/health"]) {
        CliCommand::Poll {
            max_attempts,
            interval_ms,
            expect_stdout,
            command,
        } => {
            assert!(max_attempts.is_none());
            assert!(interval_ms.is_none());
            assert!(expect_stdout.is_none());
            assert_eq!(command, vec!["curl", "-f", "http://localhost/health"]);
        }
        _ => panic!("expected Poll"),
    }
}

#[test]
fn cli_parse_poll_overrides() {
    match parse(&[
        "pollops",
        "poll",
        "--max-attempts",
        "3",
        "--interval-ms",
        "90",
        "--expect-stdout",
        "ready",
        "--",
        "cat",
        "status",
    ]) {
        CliCommand::Poll {
            max_attempts,
            interval_ms,
            expect_stdout,
            command,
        } => {
            assert_eq!(max_attempts, Some(3));
            assert_eq!(interval_ms, Some(90));
            assert_eq!(expect_stdout.as_deref(), Some("ready"));
            assert_eq!(command, vec!["cat", "status"]);
        }
        _ => panic!("expected Poll with overrides"),
    }
}

#[test]
fn cli_parse_poll_requires_command() {
    assert!(Cli::try_parse_from(["pollops", "poll", "--max-attempts", "2"]).is_err());
}

#[test]
fn cli_parse_poll_rejects_negative_interval() {
    assert!(Cli::try_parse_from(["pollops", "poll", "--interval-ms", "-5", "--", "true"]).is_err());
}
