//! File persistence helpers.
//!
//! Artifacts are replaced atomically: the new content goes to a sibling
//! temp file which is then renamed over the target, so readers never see a
//! partial write.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - Linux: `~/.config/space2obs`
/// - macOS: `~/Library/Application Support/space2obs`
/// - Windows: `%APPDATA%\space2obs`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|c| c.join("space2obs"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default cache directory.
///
/// - Linux: `~/.cache/space2obs`
/// - macOS: `~/Library/Caches/space2obs`
/// - Windows: `%LOCALAPPDATA%\space2obs`
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|c| c.join("space2obs"))
        .unwrap_or_else(|| PathBuf::from("cache"))
}

/// Returns the default secrets file path.
pub fn default_secrets_path() -> PathBuf {
    default_config_dir().join("secrets.json")
}

// ============================================================================
// Preconditions
// ============================================================================

/// Resolves `path` and checks that it is an existing directory.
pub fn require_dir(path: &Path) -> Result<PathBuf, StoreError> {
    match path.canonicalize() {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        _ => Err(StoreError::NotADirectory(path.to_path_buf())),
    }
}

/// Resolves `path` and checks that it is an existing regular file.
pub fn require_file(path: &Path) -> Result<PathBuf, StoreError> {
    match path.canonicalize() {
        Ok(resolved) if resolved.is_file() => Ok(resolved),
        _ => Err(StoreError::NotAFile(path.to_path_buf())),
    }
}

// ============================================================================
// File Operations
// ============================================================================

/// Returns the size of a regular file, or `None` if there is none.
pub async fn file_len(path: &Path) -> Option<u64> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Some(meta.len()),
        _ => None,
    }
}

/// Replaces the content of `path` atomically.
///
/// The parent directory must exist.
pub async fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    debug!(path = %path.display(), bytes = data.len(), "Writing file");

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    tokio::fs::write(&temp_path, data).await?;
    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        // Leave no stray temp file behind.
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
