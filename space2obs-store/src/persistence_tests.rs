//! Atomic write and precondition tests.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::error::StoreError;
use crate::persistence::{file_len, require_dir, require_file, write_atomic};

// ============================================================================
// Atomic Writes
// ============================================================================

#[tokio::test]
async fn test_write_atomic_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("apod_last_data");

    write_atomic(&path, b"[{}]").await.unwrap();

    assert_eq!(tokio::fs::read(&path).await.unwrap(), b"[{}]");
    assert!(!temp_dir.path().join("apod_last_data.tmp").exists());
}

#[tokio::test]
async fn test_write_atomic_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dnmap_last_image");

    write_atomic(&path, b"first version").await.unwrap();
    write_atomic(&path, b"second").await.unwrap();

    assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
    assert_eq!(file_len(&path).await, Some(6));
}

#[tokio::test]
async fn test_write_atomic_missing_parent_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("file");

    let result = write_atomic(&path, b"x").await;
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[tokio::test]
async fn test_file_len_of_directory_is_none() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(file_len(temp_dir.path()).await, None);
    assert_eq!(file_len(&temp_dir.path().join("nope")).await, None);
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_require_dir() {
    let temp_dir = TempDir::new().unwrap();
    assert!(require_dir(temp_dir.path()).unwrap().is_dir());

    let file = temp_dir.path().join("file");
    std::fs::write(&file, "x").unwrap();
    let err = require_dir(&file).unwrap_err();
    assert!(matches!(err, StoreError::NotADirectory(_)));
}

#[test]
fn test_require_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("secrets.json");
    std::fs::write(&file, "{}").unwrap();

    assert!(require_file(&file).unwrap().is_file());
    assert!(matches!(
        require_file(temp_dir.path()),
        Err(StoreError::NotAFile(_))
    ));
    assert!(matches!(
        require_file(&PathBuf::from("/nonexistent/secrets.json")),
        Err(StoreError::NotAFile(_))
    ));
}
