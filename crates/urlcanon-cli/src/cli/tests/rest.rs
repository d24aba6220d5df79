//! Tests for completions, man and global flags.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_completions() {
    match parse(&["urlcanon", "completions", "bash"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["urlcanon", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["urlcanon", "man"]).command {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_config_flag_is_optional() {
    assert!(parse(&["urlcanon", "man"]).config.is_none());
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
