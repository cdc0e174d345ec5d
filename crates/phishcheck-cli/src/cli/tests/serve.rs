use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_serve_defaults() {
    match parse(&["phishcheck", "serve"]) {
        CliCommand::Serve { bind, port, model } => {
            assert!(bind.is_none());
            assert!(port.is_none());
            assert!(model.is_none());
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_overrides() {
    match parse(&[
        "phishcheck",
        "serve",
        "--bind",
        "0.0.0.0",
        "--port",
        "8080",
        "--model",
        "/tmp/model.json",
    ]) {
        CliCommand::Serve { bind, port, model } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0"));
            assert_eq!(port, Some(8080));
            assert_eq!(model, Some(PathBuf::from("/tmp/model.json")));
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_rejects_bad_port() {
    assert!(Cli::try_parse_from(["phishcheck", "serve", "--port", "70000"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["phishcheck", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["phishcheck"]).is_err());
}
