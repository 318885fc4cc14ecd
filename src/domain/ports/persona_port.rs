//! Persona repository port.

use async_trait::async_trait;

use crate::domain::entities::{Persona, PersonaDraft, PersonaId};
use crate::domain::errors::ApiError;

/// Port for reading and writing personas on the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonaPort: Send + Sync {
    /// Fetches every persona.
    async fn list_personas(&self) -> Result<Vec<Persona>, ApiError>;

    /// Creates a persona from the submitted draft.
    async fn create_persona(&self, draft: &PersonaDraft) -> Result<Persona, ApiError>;

    /// Deletes a persona by id.
    async fn delete_persona(&self, id: &PersonaId) -> Result<(), ApiError>;
}
