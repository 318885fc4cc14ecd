//! Persona write use cases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Persona, PersonaDraft, PersonaId};
use crate::domain::errors::ApiError;
use crate::domain::ports::PersonaPort;

/// Submits a finished wizard draft.
#[derive(Clone)]
pub struct CreatePersonaUseCase {
    personas: Arc<dyn PersonaPort>,
}

impl CreatePersonaUseCase {
    #[must_use]
    pub const fn new(personas: Arc<dyn PersonaPort>) -> Self {
        Self { personas }
    }

    /// Sends the full draft to the backend.
    ///
    /// # Errors
    /// Returns error if the backend is unreachable or refuses the draft.
    pub async fn execute(&self, draft: PersonaDraft) -> Result<Persona, ApiError> {
        debug!(name = %draft.name, niche = %draft.niche, "Submitting persona draft");

        let persona = self.personas.create_persona(&draft).await.map_err(|e| {
            warn!(error = %e, "Persona creation failed");
            e
        })?;

        info!(persona_id = %persona.id(), name = %persona.name(), "Persona created");
        Ok(persona)
    }
}

/// Deletes a persona after the user confirmed.
#[derive(Clone)]
pub struct DeletePersonaUseCase {
    personas: Arc<dyn PersonaPort>,
}

impl DeletePersonaUseCase {
    #[must_use]
    pub const fn new(personas: Arc<dyn PersonaPort>) -> Self {
        Self { personas }
    }

    /// # Errors
    /// Returns error if the delete request fails.
    pub async fn execute(&self, id: &PersonaId) -> Result<(), ApiError> {
        match self.personas.delete_persona(id).await {
            Ok(()) => {
                info!(persona_id = %id, "Persona deleted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(persona_id = %id, error = %e, "Failed to delete persona");
                Err(e)
            }
        }
    }
}
