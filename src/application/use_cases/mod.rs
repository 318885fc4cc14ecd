//! Use case implementations.

mod campaign_use_cases;
mod generation_use_cases;
mod persona_use_cases;

pub use campaign_use_cases::{CreateCampaignUseCase, SaveAssetUseCase};
pub use generation_use_cases::{
    DownloadAssetUseCase, DownloadOutcome, GenerateAssetUseCase, download_file_name,
};
pub use persona_use_cases::{CreatePersonaUseCase, DeletePersonaUseCase};
