//! Generation and health port.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::{AssetType, GeneratedAsset, PersonaId};
use crate::domain::errors::ApiError;

/// Request to generate one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub asset_type: AssetType,
    pub persona_id: PersonaId,
    pub prompt: String,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(asset_type: AssetType, persona_id: PersonaId, prompt: impl Into<String>) -> Self {
        Self {
            asset_type,
            persona_id,
            prompt: prompt.into(),
        }
    }
}

/// Backend health report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: Option<String>,
}

/// Port for asset generation and backend health.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudioPort: Send + Sync {
    /// Checks backend availability.
    async fn health_check(&self) -> Result<HealthStatus, ApiError>;

    /// Generates an asset and returns where it can be fetched.
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedAsset, ApiError>;

    /// Downloads the raw bytes behind an asset URL.
    async fn fetch_asset(&self, url: &str) -> Result<Bytes, ApiError>;
}
