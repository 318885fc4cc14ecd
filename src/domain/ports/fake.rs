//! In-memory backend used by tests that exercise several ports at once.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::{Notify, RwLock};

use super::{
    AssetSinkPort, AttachReceipt, CampaignPort, GenerateRequest, HealthStatus, PersonaPort,
    StudioPort,
};
use crate::domain::entities::{
    Campaign, CampaignId, GeneratedAsset, Persona, PersonaDraft, PersonaId,
};
use crate::domain::errors::ApiError;

/// Seeded copy of the backend's fixture data with failure switches and
/// call counters.
pub struct InMemoryStudio {
    personas: RwLock<Vec<Persona>>,
    campaigns: RwLock<Vec<Campaign>>,
    fail_writes: AtomicBool,
    generate_gate: Option<Arc<Notify>>,
    pub list_persona_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub attach_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
}

impl InMemoryStudio {
    pub fn seeded() -> Self {
        Self {
            personas: RwLock::new(vec![
                Persona::new("p1", PersonaDraft::named("Sarah")),
                Persona::new("p2", PersonaDraft::named("Alex")),
            ]),
            campaigns: RwLock::new(vec![
                Campaign::new("c1", "Summer Collection Launch").with_asset_count(12),
                Campaign::new("c2", "Black Friday Promo").with_asset_count(3),
            ]),
            fail_writes: AtomicBool::new(false),
            generate_gate: None,
            list_persona_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            attach_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        }
    }

    /// Holds every generation until the returned handle is notified.
    pub fn with_generate_gate(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.generate_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn set_fail_writes(&self, value: bool) {
        self.fail_writes.store(value, Ordering::SeqCst);
    }

    pub async fn persona_count(&self) -> usize {
        self.personas.read().await.len()
    }

    fn check_writes(&self) -> Result<(), ApiError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ApiError::status(500, "Internal Server Error"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PersonaPort for InMemoryStudio {
    async fn list_personas(&self) -> Result<Vec<Persona>, ApiError> {
        self.list_persona_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.personas.read().await.clone())
    }

    async fn create_persona(&self, draft: &PersonaDraft) -> Result<Persona, ApiError> {
        self.check_writes()?;
        let mut personas = self.personas.write().await;
        let persona = Persona::new(format!("persona_{}", personas.len() + 1), draft.clone());
        personas.push(persona.clone());
        Ok(persona)
    }

    async fn delete_persona(&self, id: &PersonaId) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;
        self.personas.write().await.retain(|p| p.id() != id);
        Ok(())
    }
}

#[async_trait]
impl CampaignPort for InMemoryStudio {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        Ok(self.campaigns.read().await.clone())
    }

    async fn create_campaign(&self, name: &str) -> Result<Campaign, ApiError> {
        self.check_writes()?;
        let mut campaigns = self.campaigns.write().await;
        let campaign = Campaign::new(format!("c{}", campaigns.len() + 1), name);
        campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn attach_asset(
        &self,
        campaign_id: &CampaignId,
        _asset: &GeneratedAsset,
    ) -> Result<AttachReceipt, ApiError> {
        self.attach_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;
        let mut campaigns = self.campaigns.write().await;
        let campaign = campaigns
            .iter_mut()
            .find(|c| c.id() == campaign_id)
            .ok_or_else(|| ApiError::not_found(format!("campaign {campaign_id}")))?;
        *campaign = campaign.clone().with_asset_count(campaign.asset_count() + 1);
        Ok(AttachReceipt {
            asset_count: Some(campaign.asset_count()),
        })
    }
}

#[async_trait]
impl StudioPort for InMemoryStudio {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: Some("DigiInfluencer Backend".to_string()),
        })
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedAsset, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.generate_gate {
            gate.notified().await;
        }
        self.check_writes()?;
        Ok(GeneratedAsset::new(
            format!("https://cdn.example/{}.png", request.asset_type),
            request.asset_type,
            request.persona_id.clone(),
        ))
    }

    async fn fetch_asset(&self, _url: &str) -> Result<Bytes, ApiError> {
        Ok(Bytes::from_static(b"\x89PNG"))
    }
}

/// Sink that records saved files instead of touching the disk.
#[derive(Default)]
pub struct RecordingSink {
    pub saved: RwLock<Vec<String>>,
}

#[async_trait]
impl AssetSinkPort for RecordingSink {
    async fn save(&self, file_name: &str, _bytes: Bytes) -> Result<PathBuf, ApiError> {
        self.saved.write().await.push(file_name.to_string());
        Ok(PathBuf::from("/downloads").join(file_name))
    }

    fn open_external(&self, _url: &str) -> Result<(), ApiError> {
        Ok(())
    }
}
