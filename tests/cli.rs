//! CLI runner tests
//!
//! Drives the runner against real files in a temp directory.

use clap::Parser;
use postman2swagger::cli::{Cli, Runner};
use postman2swagger::Error;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SHOP: &str = include_str!("fixtures/shop.postman_collection.json");

fn run(args: &[&str]) -> postman2swagger::Result<()> {
    let mut argv = vec!["postman2swagger"];
    argv.extend_from_slice(args);
    Runner::new(Cli::try_parse_from(argv).unwrap()).run()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let err = Cli::try_parse_from(["postman2swagger", "only-source.json"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_convert_to_json() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let target = dir.path().join("swagger.json");
    fs::write(&source, SHOP).unwrap();

    run(&[path_str(&source), path_str(&target)]).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["swagger"], "2.0");
    assert_eq!(written["info"]["title"], "Shop API");
    assert!(written["paths"]["/users/{userId}"]["get"].is_object());
}

#[test]
fn test_target_is_truncated() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let target = dir.path().join("swagger.json");
    fs::write(&source, SHOP).unwrap();
    fs::write(&target, "x".repeat(1_000_000)).unwrap();

    run(&[path_str(&source), path_str(&target)]).unwrap();

    let content = fs::read_to_string(&target).unwrap();
    assert!(content.starts_with('{'));
    assert!(serde_json::from_str::<Value>(&content).is_ok());
}

#[test]
fn test_pretty_json() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let compact = dir.path().join("compact.json");
    let pretty = dir.path().join("pretty.json");
    fs::write(&source, SHOP).unwrap();

    run(&[path_str(&source), path_str(&compact)]).unwrap();
    run(&[path_str(&source), path_str(&pretty), "--pretty"]).unwrap();

    let compact = fs::read_to_string(&compact).unwrap();
    let pretty = fs::read_to_string(&pretty).unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  \"swagger\": \"2.0\""));
    assert_eq!(
        serde_json::from_str::<Value>(&pretty).unwrap(),
        serde_json::from_str::<Value>(&compact).unwrap()
    );
}

#[test]
fn test_pretty_is_a_flag_not_a_format() {
    let cli = Cli::try_parse_from(["postman2swagger", "a.json", "b.json", "--pretty"]).unwrap();
    assert!(cli.pretty);

    let err =
        Cli::try_parse_from(["postman2swagger", "a.json", "b.json", "--format", "pretty"])
            .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_convert_to_yaml_with_overrides() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let target = dir.path().join("swagger.yaml");
    fs::write(&source, SHOP).unwrap();

    run(&[
        path_str(&source),
        path_str(&target),
        "--format",
        "yaml",
        "--host",
        "shop.example.com",
        "--tag-strategy",
        "top-level-folder",
    ])
    .unwrap();

    let written: Value = serde_yaml::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["host"], "shop.example.com");
    assert_eq!(written["tags"].as_array().unwrap().len(), 2);
}

#[test]
fn test_options_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let target = dir.path().join("swagger.json");
    let config = dir.path().join("options.yaml");
    fs::write(&source, SHOP).unwrap();
    fs::write(&config, "api_version: 2.3.4\nschemes: [https]\n").unwrap();

    run(&[
        path_str(&source),
        path_str(&target),
        "--config",
        path_str(&config),
    ])
    .unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["info"]["version"], "2.3.4");
    assert_eq!(written["schemes"], serde_json::json!(["https"]));
}

#[test]
fn test_missing_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("nope.json");
    let target = dir.path().join("swagger.json");

    let err = run(&[path_str(&source), path_str(&target)]).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(!target.exists());
}

#[test]
fn test_top_level_not_object() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("list.json");
    let target = dir.path().join("swagger.json");
    fs::write(&source, "[]").unwrap();

    let err = run(&[path_str(&source), path_str(&target)]).unwrap_err();
    assert!(matches!(err, Error::InvalidDocument { .. }));
}

#[test]
fn test_strict_mode_fails_without_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("shop.json");
    let target = dir.path().join("swagger.json");
    fs::write(&source, SHOP).unwrap();

    let err = run(&[path_str(&source), path_str(&target), "--strict"]).unwrap_err();
    assert!(matches!(err, Error::StrictMode { count: 1 }));
    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}
