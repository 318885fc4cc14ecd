//! Domain entity definitions.

mod asset;
mod campaign;
mod labels;
mod persona;

pub use asset::{AssetType, GeneratedAsset};
pub use campaign::{Campaign, CampaignId};
pub use labels::{AgeRange, CampaignStatus, Gender, Niche, Tone, Voice};
pub use persona::{Persona, PersonaDraft, PersonaId};
