mod asset_sink_port;
mod campaign_port;
mod persona_port;
mod studio_port;

pub use asset_sink_port::AssetSinkPort;
pub use campaign_port::{AttachReceipt, CampaignPort};
pub use persona_port::PersonaPort;
pub use studio_port::{GenerateRequest, HealthStatus, StudioPort};

#[cfg(test)]
pub mod fake;
