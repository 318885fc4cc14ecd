//! Generated asset value objects.

use serde::{Deserialize, Serialize};

use super::persona::PersonaId;

/// Kind of asset the studio can generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Still image.
    #[default]
    Image,
    /// Short video clip driven by a script.
    Video,
    /// Advertisement creative.
    Ad,
}

impl AssetType {
    /// All asset types in tab order.
    pub const ALL: [Self; 3] = [Self::Image, Self::Video, Self::Ad];

    /// Wire name, also used in download file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Ad => "ad",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Ad => "Ad",
        }
    }

    /// Label of the prompt box for this asset type.
    #[must_use]
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::Video => "Script & Action",
            Self::Image | Self::Ad => "Prompt Description",
        }
    }

    /// Example prompt shown while the prompt box is empty.
    #[must_use]
    pub const fn prompt_placeholder(self) -> &'static str {
        match self {
            Self::Video => "Say: 'Hello everyone!' while waving at the camera...",
            Self::Image | Self::Ad => "A futuristic portrait in a neon city...",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Image => Self::Video,
            Self::Video => Self::Ad,
            Self::Ad => Self::Image,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Image => Self::Ad,
            Self::Video => Self::Image,
            Self::Ad => Self::Video,
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asset returned by a generation call. Only lives in studio state until
/// it is saved to a campaign or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    url: String,
    asset_type: AssetType,
    persona_id: PersonaId,
}

impl GeneratedAsset {
    #[must_use]
    pub fn new(url: impl Into<String>, asset_type: AssetType, persona_id: PersonaId) -> Self {
        Self {
            url: url.into(),
            asset_type,
            persona_id,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    #[must_use]
    pub const fn persona_id(&self) -> &PersonaId {
        &self.persona_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_wire_names() {
        assert_eq!(serde_json::to_string(&AssetType::Ad).unwrap(), "\"ad\"");
        let parsed: AssetType = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(parsed, AssetType::Video);
    }

    #[test]
    fn test_asset_type_cycle() {
        for asset_type in AssetType::ALL {
            assert_eq!(asset_type.next().previous(), asset_type);
        }
        assert_eq!(AssetType::Ad.next(), AssetType::Image);
    }

    #[test]
    fn test_video_prompt_wording() {
        assert_eq!(AssetType::Video.prompt_label(), "Script & Action");
        assert_eq!(AssetType::Image.prompt_label(), "Prompt Description");
        assert_ne!(
            AssetType::Video.prompt_placeholder(),
            AssetType::Ad.prompt_placeholder()
        );
    }
}
