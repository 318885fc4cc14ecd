//! Campaign repository port.

use async_trait::async_trait;

use crate::domain::entities::{Campaign, CampaignId, GeneratedAsset};
use crate::domain::errors::ApiError;

/// Acknowledgement of an asset attached to a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachReceipt {
    /// Campaign asset count after the attach, when the backend reports it.
    pub asset_count: Option<u32>,
}

/// Port for reading and writing campaigns on the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignPort: Send + Sync {
    /// Fetches every campaign.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError>;

    /// Creates a campaign with the given name.
    async fn create_campaign(&self, name: &str) -> Result<Campaign, ApiError>;

    /// Attaches a generated asset to a campaign.
    async fn attach_asset(
        &self,
        campaign_id: &CampaignId,
        asset: &GeneratedAsset,
    ) -> Result<AttachReceipt, ApiError>;
}
