//! Asset generation and download use cases.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{AssetType, GeneratedAsset};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AssetSinkPort, GenerateRequest, StudioPort};

/// Prefix of every downloaded asset's file name.
const DOWNLOAD_PREFIX: &str = "digi-influencer";

/// Builds `digi-influencer-<type>-<unix millis>.png`.
#[must_use]
pub fn download_file_name(asset_type: AssetType, at: DateTime<Utc>) -> String {
    format!(
        "{DOWNLOAD_PREFIX}-{}-{}.png",
        asset_type.as_str(),
        at.timestamp_millis()
    )
}

/// Runs one generation for the studio.
#[derive(Clone)]
pub struct GenerateAssetUseCase {
    studio: Arc<dyn StudioPort>,
}

impl GenerateAssetUseCase {
    #[must_use]
    pub const fn new(studio: Arc<dyn StudioPort>) -> Self {
        Self { studio }
    }

    /// # Errors
    /// Returns error if the prompt is blank or the generation call fails.
    pub async fn execute(&self, request: GenerateRequest) -> Result<GeneratedAsset, ApiError> {
        if request.prompt.trim().is_empty() {
            return Err(ApiError::rejected("prompt is empty"));
        }

        debug!(
            asset_type = %request.asset_type,
            persona_id = %request.persona_id,
            "Generating asset"
        );

        let asset = self.studio.generate(&request).await.map_err(|e| {
            warn!(asset_type = %request.asset_type, error = %e, "Generation failed");
            e
        })?;

        info!(url = %asset.url(), asset_type = %asset.asset_type(), "Asset generated");
        Ok(asset)
    }
}

/// Where a download ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Written to disk.
    Saved(PathBuf),
    /// Fetching or writing failed, the URL was handed to the system opener.
    OpenedExternally { reason: String },
}

/// Saves the current asset locally, falling back to the system opener.
#[derive(Clone)]
pub struct DownloadAssetUseCase {
    studio: Arc<dyn StudioPort>,
    sink: Arc<dyn AssetSinkPort>,
}

impl DownloadAssetUseCase {
    #[must_use]
    pub const fn new(studio: Arc<dyn StudioPort>, sink: Arc<dyn AssetSinkPort>) -> Self {
        Self { studio, sink }
    }

    /// Makes a single attempt; a failed attempt is never repeated.
    ///
    /// # Errors
    /// Returns error only if both the download and the fallback fail.
    pub async fn execute(
        &self,
        asset: &GeneratedAsset,
        at: DateTime<Utc>,
    ) -> Result<DownloadOutcome, ApiError> {
        let file_name = download_file_name(asset.asset_type(), at);

        let saved = async {
            let bytes = self.studio.fetch_asset(asset.url()).await?;
            self.sink.save(&file_name, bytes).await
        }
        .await;

        match saved {
            Ok(path) => {
                info!(path = %path.display(), "Asset downloaded");
                Ok(DownloadOutcome::Saved(path))
            }
            Err(e) => {
                warn!(url = %asset.url(), error = %e, "Download failed, opening URL instead");
                self.sink.open_external(asset.url())?;
                Ok(DownloadOutcome::OpenedExternally {
                    reason: e.to_string(),
                })
            }
        }
    }
}
