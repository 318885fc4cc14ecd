//! Local destination for downloaded assets.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::ApiError;

/// Port for handing a generated asset to the local machine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetSinkPort: Send + Sync {
    /// Writes the asset under the given file name, returning the final path.
    async fn save(&self, file_name: &str, bytes: Bytes) -> Result<PathBuf, ApiError>;

    /// Opens the URL with the system handler.
    fn open_external(&self, url: &str) -> Result<(), ApiError>;
}
