//! Campaign entity.

use serde::{Deserialize, Serialize};

use super::labels::CampaignStatus;

/// Backend-assigned campaign identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CampaignId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Named container that collects generated assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    id: CampaignId,
    name: String,
    status: CampaignStatus,
    asset_count: u32,
    date: String,
}

impl Campaign {
    /// Creates an empty draft campaign.
    #[must_use]
    pub fn new(id: impl Into<CampaignId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: CampaignStatus::default(),
            asset_count: 0,
            date: String::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn with_asset_count(mut self, asset_count: u32) -> Self {
        self.asset_count = asset_count;
        self
    }

    /// Sets the display date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> &CampaignId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn status(&self) -> &CampaignStatus {
        &self.status
    }

    /// Number of assets attached, as last reported by the backend.
    #[must_use]
    pub const fn asset_count(&self) -> u32 {
        self.asset_count
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}
