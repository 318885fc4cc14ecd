//! Writes downloaded assets to the user's download directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::errors::ApiError;
use crate::domain::ports::AssetSinkPort;

/// Asset sink backed by a local directory and the system opener.
pub struct FileAssetSink {
    dir: PathBuf,
}

impl FileAssetSink {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Uses the platform download directory (~/Downloads on most systems).
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(default_download_dir())
    }

    #[must_use]
    pub const fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

#[async_trait]
impl AssetSinkPort for FileAssetSink {
    async fn save(&self, file_name: &str, bytes: Bytes) -> Result<PathBuf, ApiError> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(file_name);
        let (dir, target) = (self.dir.clone(), path.clone());
        let size = bytes.len();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &bytes))
            .await
            .map_err(|e| ApiError::unexpected(format!("download writer panicked: {e}")))??;

        debug!(path = %path.display(), size, "Wrote asset to disk");
        Ok(path)
    }

    fn open_external(&self, url: &str) -> Result<(), ApiError> {
        opener::open(url).map_err(|e| {
            warn!(url, error = %e, "Failed to open URL with system handler");
            ApiError::unexpected(format!("failed to open {url}: {e}"))
        })
    }
}

/// Writes into a temp file beside `path` and renames it into place, so a
/// failed write never leaves a partial asset behind.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn default_download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_writes_bytes() {
        let temp = TempDir::new().unwrap();
        let sink = FileAssetSink::new(temp.path().to_path_buf());

        let path = sink
            .save("digi-influencer-image-1.png", Bytes::from_static(b"\x89PNG"))
            .await
            .unwrap();

        assert_eq!(path, temp.path().join("digi-influencer-image-1.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("assets").join("today");
        let sink = FileAssetSink::new(nested.clone());

        let path = sink.save("a.png", Bytes::from_static(b"x")).await.unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_failed_save_leaves_no_partial_file() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("a.png")).unwrap();
        let sink = FileAssetSink::new(temp.path().to_path_buf());

        let result = sink.save("a.png", Bytes::from_static(b"\x89PNG")).await;

        assert!(matches!(result, Err(ApiError::Io(_))));
        let entries: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("a.png")]);
        assert!(temp.path().join("a.png").is_dir());
    }

    #[tokio::test]
    async fn test_save_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.png"), b"old").unwrap();
        let sink = FileAssetSink::new(temp.path().to_path_buf());

        let path = sink.save("a.png", Bytes::from_static(b"new")).await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_save_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let sink = FileAssetSink::new(blocker);

        let result = sink.save("a.png", Bytes::from_static(b"x")).await;

        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
