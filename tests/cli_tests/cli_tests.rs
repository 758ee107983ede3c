//! CLI Tests
//!
//! Tests for argument parsing and the config it produces.

use std::path::Path;

use clap::{CommandFactory, Parser};
use pokeclient::cli::Args;

#[test]
fn test_command_definition() {
    Args::command().debug_assert();
}

#[test]
fn test_positional_arguments() {
    let args = Args::try_parse_from(["pokeclient", "in.txt", "out.txt", "localhost", "7777"]).unwrap();

    assert_eq!(args.in_file, Path::new("in.txt"));
    assert_eq!(args.out_file, Path::new("out.txt"));
    assert_eq!(args.host, "localhost");
    assert_eq!(args.port, 7777);

    let config = args.to_config();
    assert_eq!(config.server_addr, "localhost:7777");
    assert_eq!(config.bind_addr, "0.0.0.0:0");
    assert_eq!(config.recv_timeout_ms, 2000);
    assert!(!config.strict);
}

#[test]
fn test_options() {
    let args = Args::try_parse_from([
        "pokeclient", "in.txt", "out.txt", "10.0.0.1", "9000",
        "--timeout-ms", "0", "--bind", "127.0.0.1:0", "--strict",
    ])
    .unwrap();

    let config = args.to_config();
    assert_eq!(config.recv_timeout_ms, 0);
    assert_eq!(config.bind_addr, "127.0.0.1:0");
    assert!(config.strict);
}

#[test]
fn test_missing_port_rejected() {
    assert!(Args::try_parse_from(["pokeclient", "in.txt", "out.txt", "localhost"]).is_err());
    assert!(Args::try_parse_from(["pokeclient", "in.txt", "out.txt", "localhost", "port"]).is_err());
}
