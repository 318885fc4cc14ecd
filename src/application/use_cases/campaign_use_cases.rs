//! Campaign write use cases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Campaign, CampaignId, GeneratedAsset};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AttachReceipt, CampaignPort};

/// Creates a campaign from the modal's name field.
#[derive(Clone)]
pub struct CreateCampaignUseCase {
    campaigns: Arc<dyn CampaignPort>,
}

impl CreateCampaignUseCase {
    #[must_use]
    pub const fn new(campaigns: Arc<dyn CampaignPort>) -> Self {
        Self { campaigns }
    }

    /// Blank names are refused without contacting the backend.
    ///
    /// # Errors
    /// Returns error if the name is blank or the request fails.
    pub async fn execute(&self, name: &str) -> Result<Campaign, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::rejected("campaign name is empty"));
        }

        debug!(name, "Creating campaign");

        let campaign = self.campaigns.create_campaign(name).await.map_err(|e| {
            warn!(name, error = %e, "Failed to create campaign");
            e
        })?;

        info!(campaign_id = %campaign.id(), name = %campaign.name(), "Campaign created");
        Ok(campaign)
    }
}

/// Attaches the studio's current asset to a campaign.
#[derive(Clone)]
pub struct SaveAssetUseCase {
    campaigns: Arc<dyn CampaignPort>,
}

impl SaveAssetUseCase {
    #[must_use]
    pub const fn new(campaigns: Arc<dyn CampaignPort>) -> Self {
        Self { campaigns }
    }

    /// # Errors
    /// Returns error if the attach request fails or the backend refuses it.
    pub async fn execute(
        &self,
        campaign_id: &CampaignId,
        asset: &GeneratedAsset,
    ) -> Result<AttachReceipt, ApiError> {
        debug!(
            campaign_id = %campaign_id,
            url = %asset.url(),
            asset_type = %asset.asset_type(),
            "Saving asset to campaign"
        );

        let receipt = self
            .campaigns
            .attach_asset(campaign_id, asset)
            .await
            .map_err(|e| {
                warn!(campaign_id = %campaign_id, error = %e, "Failed to save asset to campaign");
                e
            })?;

        info!(
            campaign_id = %campaign_id,
            asset_count = ?receipt.asset_count,
            "Asset saved to campaign"
        );
        Ok(receipt)
    }
}
