//! Domain layer with studio entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// In-terminal notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{Campaign, GeneratedAsset, Persona, PersonaDraft};
pub use errors::ApiError;
pub use notification::{Notification, NotificationLevel};
pub use ports::{AssetSinkPort, CampaignPort, PersonaPort, StudioPort};
