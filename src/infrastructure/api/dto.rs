use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AgeRange, AssetType, Campaign, CampaignStatus, Gender, Niche, Persona, PersonaDraft, PersonaId,
    Tone, Voice,
};

/// Persona as returned by list and create. Create only echoes
/// `id`, `name` and `niche`, so every other attribute is optional.
#[derive(Debug, Deserialize)]
pub struct PersonaResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub niche: Option<Niche>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub age: AgeRange,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub voice: Voice,
    #[serde(default)]
    pub bio: Option<String>,
}

impl PersonaResponse {
    /// Fills attributes the create endpoint does not echo from the submitted draft.
    pub fn into_persona_with(self, submitted: &PersonaDraft) -> Persona {
        let details = PersonaDraft {
            name: self.name,
            niche: self.niche.unwrap_or_else(|| submitted.niche.clone()),
            tone: submitted.tone.clone(),
            gender: submitted.gender.clone(),
            age: submitted.age.clone(),
            style: self.style.unwrap_or_else(|| submitted.style.clone()),
            voice: submitted.voice.clone(),
            bio: self.bio.unwrap_or_else(|| submitted.bio.clone()),
        };
        Persona::new(PersonaId::new(self.id), details)
    }
}

impl From<PersonaResponse> for Persona {
    fn from(value: PersonaResponse) -> Self {
        let details = PersonaDraft {
            name: value.name,
            niche: value.niche.unwrap_or_default(),
            tone: value.tone,
            gender: value.gender,
            age: value.age,
            style: value.style.unwrap_or_default(),
            voice: value.voice,
            bio: value.bio.unwrap_or_default(),
        };
        Self::new(PersonaId::new(value.id), details)
    }
}

#[derive(Debug, Deserialize)]
pub struct CampaignResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub assets: u32,
    #[serde(default)]
    pub date: String,
}

impl From<CampaignResponse> for Campaign {
    fn from(value: CampaignResponse) -> Self {
        Self::new(value.id, value.name)
            .with_status(value.status)
            .with_asset_count(value.assets)
            .with_date(value.date)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCampaignBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerateBody<'a> {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub persona_id: &'a str,
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub url: String,
}

/// Describes the attached asset explicitly; backends that ignore the body
/// keep working.
#[derive(Debug, Serialize)]
pub struct AttachAssetBody<'a> {
    pub url: &'a str,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub persona_id: &'a str,
}

/// Attach acknowledgement. The backend answers a missing campaign with
/// `{"status": "error"}` and HTTP 200.
#[derive(Debug, Default, Deserialize)]
pub struct AttachAssetResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_count: Option<u32>,
}

impl AttachAssetResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

/// Error body shapes: `{"detail": ...}` from the framework, `{"message": ...}` from handlers.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message.or_else(|| {
            self.detail.map(|detail| match detail {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
        })
    }
}
