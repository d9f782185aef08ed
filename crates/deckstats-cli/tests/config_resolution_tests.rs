//! Config resolution tests.
//!
//! Config files are written to temporary directories; the command-line
//! flags must win over whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::Parser;
use tempfile::TempDir;

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{Args, DEFAULT_CONFIG_FILE, format_error};

const FILE_CONFIG: &str = r#"
data_dir = "from-file"
extension = "log"
min_meta_count = 5
include_mirror = true
"#;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("deckstats").chain(args.iter().copied())).unwrap()
}

fn dir_with_default_config(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), content).unwrap();
    dir
}

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    let config = parse(&[]).resolve_config(dir.path()).unwrap();

    assert_eq!(config.extension, "txt");
    assert_eq!(config.min_meta_count, 1);
    assert!(config.include_mirror);
}

#[test]
fn test_default_config_file_picked_up() {
    let dir = dir_with_default_config(FILE_CONFIG);
    let config = parse(&["--data-dir", "flag-dir"]).resolve_config(dir.path()).unwrap();

    assert_eq!(config.extension, "log");
    assert_eq!(config.min_meta_count, 5);
    assert_eq!(config.data_dir, PathBuf::from("flag-dir"));
}

#[test]
fn test_flags_override_file_values() {
    let dir = dir_with_default_config(FILE_CONFIG);
    let config = parse(&["--min-games", "2", "--exclude-mirror", "--extension", ".csv"])
        .resolve_config(dir.path())
        .unwrap();

    assert_eq!(config.min_meta_count, 2);
    assert!(!config.include_mirror);
    assert_eq!(config.extension, "csv");
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "min_meta_count = 7").unwrap();

    let config = parse(&["--config", path.to_str().unwrap()])
        .resolve_config(Path::new("/nonexistent"))
        .unwrap();
    assert_eq!(config.min_meta_count, 7);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let err = parse(&["--config", "nope.toml"])
        .resolve_config(dir.path())
        .unwrap_err();

    let message = format_error(&err);
    assert!(message.starts_with("Encountered error:\n  Failed to load config from nope.toml: "));
    assert!(message.ends_with('\n'));
}

#[test]
fn test_error_rendering() {
    let err = anyhow!("Found invalid line in file \"data/a.txt\": W");
    assert_eq!(
        format_error(&err),
        "Encountered error:\n  Found invalid line in file \"data/a.txt\": W\n"
    );
}
