//! Tests for path resolution against a controlled home and working directory

use std::path::{Path, PathBuf};

use abspath::infrastructure::FixedEnvironment;
use abspath::util::path::normalize_path;
use abspath::{resolve_path, resolve_path_with, StatusError};
use tempfile::TempDir;

fn fixture_env() -> (TempDir, TempDir, FixedEnvironment) {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let env = FixedEnvironment::new(home.path(), cwd.path());
    (home, cwd, env)
}

#[test]
fn given_relative_path_when_resolving_then_joins_cwd() {
    // Arrange
    let (_home, cwd, env) = fixture_env();

    // Act
    let result = resolve_path_with("a/./b/../c.txt", &env).unwrap();

    // Assert
    assert_eq!(result, cwd.path().join("a").join("c.txt"));
    assert!(result.is_absolute());
}

#[test]
fn given_missing_target_when_resolving_then_still_resolves() {
    // Arrange
    let (_home, cwd, env) = fixture_env();
    let target = cwd.path().join("does-not-exist");
    assert!(!target.exists());

    // Act
    let result = resolve_path_with("does-not-exist", &env).unwrap();

    // Assert
    assert_eq!(result, target);
    assert!(!result.exists(), "resolution must not create anything");
}

#[test]
fn given_lone_tilde_when_resolving_then_returns_home() {
    // Arrange
    let (home, _cwd, env) = fixture_env();

    // Act
    let result = resolve_path_with("~", &env).unwrap();

    // Assert
    assert_eq!(result, home.path());
}

#[test]
fn given_tilde_slash_when_resolving_then_returns_home() {
    let (home, _cwd, env) = fixture_env();

    let result = resolve_path_with("~/", &env).unwrap();

    assert_eq!(result, home.path());
}

#[test]
fn given_tilde_subpath_when_resolving_then_joins_home() {
    // Arrange
    let (home, _cwd, env) = fixture_env();

    // Act
    let result = resolve_path_with("~/docs", &env).unwrap();

    // Assert
    assert_eq!(result, home.path().join("docs"));
}

#[test]
fn given_tilde_username_when_resolving_then_joins_literally_under_own_home() {
    // Arrange
    let (home, _cwd, env) = fixture_env();

    // Act
    let result = resolve_path_with("~otheruser", &env).unwrap();

    // Assert: no lookup of another account
    assert_eq!(result, home.path().join("otheruser"));
}

#[test]
fn given_empty_path_when_resolving_then_invalid_argument() {
    // Arrange
    let (_home, _cwd, env) = fixture_env();

    // Act
    let err = resolve_path_with("", &env).unwrap_err();

    // Assert
    assert_eq!(err, StatusError::InvalidArgument("path cannot be empty".into()));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn given_empty_path_when_resolving_with_system_env_then_invalid_argument() {
    let err = resolve_path("").unwrap_err();

    assert_eq!(err.message(), "path cannot be empty");
}

#[test]
fn given_unknown_home_when_resolving_tilde_then_io_error() {
    // Arrange
    let cwd = TempDir::new().unwrap();
    let env = FixedEnvironment {
        home: None,
        cwd: Some(cwd.path().to_path_buf()),
    };

    // Act
    let err = resolve_path_with("~/docs", &env).unwrap_err();

    // Assert
    assert!(matches!(err, StatusError::Io(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn given_clean_absolute_path_when_resolving_then_unchanged() {
    // Arrange
    let (_home, cwd, env) = fixture_env();
    let clean = normalize_path(&cwd.path().join("x").join("y.txt"));

    // Act
    let result = resolve_path_with(clean.to_str().unwrap(), &env).unwrap();

    // Assert
    assert_eq!(result, clean);
}

#[test]
fn given_resolved_path_when_resolving_again_then_idempotent() {
    let (_home, _cwd, env) = fixture_env();

    let once = resolve_path_with("~/a/../b/./c", &env).unwrap();
    let twice = resolve_path_with(once.to_str().unwrap(), &env).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn given_real_cwd_when_resolving_dot_then_returns_cwd() {
    // Act
    let result = resolve_path(".").unwrap();

    // Assert
    assert_eq!(result, normalize_path(&std::env::current_dir().unwrap()));
}

#[test]
fn given_redundant_segments_when_normalizing_then_collapses() {
    let input = Path::new("base").join(".").join("sub").join("..").join("file");

    assert_eq!(normalize_path(&input), PathBuf::from("base").join("file"));
}
