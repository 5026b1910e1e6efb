//! Cache artifacts.
//!
//! An [`Artifact`] is one named file in the cache directory together with
//! the fingerprint of its last write. On open, the fingerprint is seeded from
//! the current file size so a restart does not rewrite unchanged data.

use std::path::{Path, PathBuf};

use space2obs_core::{Fingerprint, changed};
use tracing::info;

use crate::error::StoreError;
use crate::persistence::{file_len, write_atomic};

/// A cache file holding the latest accepted observation for one output.
#[derive(Debug, Clone)]
pub struct Artifact {
    name: String,
    path: PathBuf,
    fingerprint: Fingerprint,
}

impl Artifact {
    /// Opens the artifact `name` inside `cache_dir`.
    ///
    /// The file does not need to exist yet.
    pub async fn open(cache_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = cache_dir.join(&name);
        let fingerprint = file_len(&path)
            .await
            .map_or(Fingerprint::EMPTY, Fingerprint::from_len);

        Self {
            name,
            path,
            fingerprint,
        }
    }

    /// Returns the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the fingerprint of the last write.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Returns true if `payload` differs from the last written payload.
    pub fn has_changed(&self, payload: &[u8]) -> bool {
        changed(payload, self.fingerprint)
    }

    /// Replaces the file content and updates the fingerprint.
    ///
    /// The fingerprint is left untouched if the write fails.
    pub async fn write(&mut self, payload: &[u8]) -> Result<(), StoreError> {
        info!("updating {}", self.name);
        write_atomic(&self.path, payload).await?;
        self.fingerprint = Fingerprint::of(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = Artifact::open(temp_dir.path(), "soho_last_c2_image").await;

        assert_eq!(artifact.fingerprint(), Fingerprint::EMPTY);
        assert_eq!(artifact.name(), "soho_last_c2_image");
        assert!(!artifact.path().exists());
    }

    #[tokio::test]
    async fn test_open_seeds_fingerprint_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("eonet_last_data"), vec![0u8; 321]).unwrap();

        let artifact = Artifact::open(temp_dir.path(), "eonet_last_data").await;

        assert_eq!(artifact.fingerprint().len(), 321);
        assert!(!artifact.has_changed(&[7u8; 321]));
        assert!(artifact.has_changed(&[7u8; 320]));
    }

    #[tokio::test]
    async fn test_write_updates_fingerprint() {
        let temp_dir = TempDir::new().unwrap();
        let mut artifact = Artifact::open(temp_dir.path(), "dnmap_last_image").await;

        artifact.write(b"jpeg bytes").await.unwrap();

        assert_eq!(artifact.fingerprint(), Fingerprint::of(b"jpeg bytes"));
        assert_eq!(std::fs::read(artifact.path()).unwrap(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_failed_write_keeps_fingerprint() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        let mut artifact = Artifact::open(&missing, "apod_last_image").await;

        assert!(artifact.write(b"data").await.is_err());
        assert_eq!(artifact.fingerprint(), Fingerprint::EMPTY);
    }
}
