//! Tests for loading the arena config file.

use std::fs;
use tempfile::TempDir;

use arena_cli::ArenaConfig;

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arena.toml");
    fs::write(&path, "games = 6\nseed = 99\nshow_boards = false\n").expect("Write failed");

    let config = ArenaConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.games(), 6);
    assert_eq!(*config.seed(), Some(99));
    assert!(!*config.show_boards());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ArenaConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arena.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = ArenaConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_wrong_type_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arena.toml");
    fs::write(&path, "games = \"ten\"\n").expect("Write failed");

    assert!(ArenaConfig::from_file(&path).is_err());
}

#[test]
fn test_directory_path_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    assert!(ArenaConfig::from_file(dir.path()).is_err());
}
