use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::scope::{ViewId, ViewScope};
use crate::application::use_cases::{
    CreateCampaignUseCase, CreatePersonaUseCase, DeletePersonaUseCase, DownloadAssetUseCase,
    DownloadOutcome, GenerateAssetUseCase, SaveAssetUseCase,
};
use crate::domain::entities::{Campaign, CampaignId, GeneratedAsset, Persona, PersonaDraft, PersonaId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{
    AssetSinkPort, AttachReceipt, CampaignPort, GenerateRequest, HealthStatus, PersonaPort,
    StudioPort,
};

/// Backend work requested by a screen.
#[derive(Debug, Clone)]
pub enum BackendCommand {
    CheckHealth,
    LoadPersonas,
    LoadCampaigns,
    CreatePersona(PersonaDraft),
    DeletePersona(PersonaId),
    CreateCampaign(String),
    Generate(GenerateRequest),
    Download(GeneratedAsset),
    SaveToCampaign {
        campaign_id: CampaignId,
        asset: GeneratedAsset,
    },
}

impl BackendCommand {
    /// Reads are abandoned when their screen unmounts. Writes always run to
    /// completion; only their result is dropped.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::CheckHealth | Self::LoadPersonas | Self::LoadCampaigns)
    }
}

/// Outcome of a [`BackendCommand`].
#[derive(Debug)]
pub enum Action {
    HealthChecked(Result<HealthStatus, ApiError>),
    PersonasLoaded(Result<Vec<Persona>, ApiError>),
    CampaignsLoaded(Result<Vec<Campaign>, ApiError>),
    PersonaCreated(Result<Persona, ApiError>),
    PersonaDeleted {
        id: PersonaId,
        result: Result<(), ApiError>,
    },
    CampaignCreated(Result<Campaign, ApiError>),
    AssetGenerated(Result<GeneratedAsset, ApiError>),
    AssetDownloaded(Result<DownloadOutcome, ApiError>),
    AssetSaved {
        campaign_id: CampaignId,
        result: Result<AttachReceipt, ApiError>,
    },
}

/// A command tagged with the scope of the screen that issued it.
#[derive(Debug)]
pub struct ScopedCommand {
    pub scope: ViewScope,
    pub command: BackendCommand,
}

/// An action tagged with the view it belongs to.
#[derive(Debug)]
pub struct ScopedAction {
    pub view: ViewId,
    pub action: Action,
}

/// Ports the backend worker talks to.
#[derive(Clone)]
pub struct BackendPorts {
    pub personas: Arc<dyn PersonaPort>,
    pub campaigns: Arc<dyn CampaignPort>,
    pub studio: Arc<dyn StudioPort>,
    pub sink: Arc<dyn AssetSinkPort>,
}

impl BackendPorts {
    /// Uses one adapter for every backend port.
    pub fn shared<T>(api: Arc<T>, sink: Arc<dyn AssetSinkPort>) -> Self
    where
        T: PersonaPort + CampaignPort + StudioPort + 'static,
    {
        Self {
            personas: api.clone(),
            campaigns: api.clone(),
            studio: api,
            sink,
        }
    }
}

#[derive(Clone)]
struct Handlers {
    personas: Arc<dyn PersonaPort>,
    campaigns: Arc<dyn CampaignPort>,
    studio: Arc<dyn StudioPort>,
    create_persona: CreatePersonaUseCase,
    delete_persona: DeletePersonaUseCase,
    create_campaign: CreateCampaignUseCase,
    save_asset: SaveAssetUseCase,
    generate: GenerateAssetUseCase,
    download: DownloadAssetUseCase,
}

impl Handlers {
    fn new(ports: BackendPorts) -> Self {
        Self {
            create_persona: CreatePersonaUseCase::new(ports.personas.clone()),
            delete_persona: DeletePersonaUseCase::new(ports.personas.clone()),
            create_campaign: CreateCampaignUseCase::new(ports.campaigns.clone()),
            save_asset: SaveAssetUseCase::new(ports.campaigns.clone()),
            generate: GenerateAssetUseCase::new(ports.studio.clone()),
            download: DownloadAssetUseCase::new(ports.studio.clone(), ports.sink),
            personas: ports.personas,
            campaigns: ports.campaigns,
            studio: ports.studio,
        }
    }

    async fn execute(&self, command: BackendCommand) -> Action {
        match command {
            BackendCommand::CheckHealth => Action::HealthChecked(self.studio.health_check().await),
            BackendCommand::LoadPersonas => {
                let result = self.personas.list_personas().await;
                match &result {
                    Ok(personas) => debug!(count = personas.len(), "Loaded personas"),
                    Err(e) => warn!(error = %e, "Failed to load personas"),
                }
                Action::PersonasLoaded(result)
            }
            BackendCommand::LoadCampaigns => {
                let result = self.campaigns.list_campaigns().await;
                match &result {
                    Ok(campaigns) => debug!(count = campaigns.len(), "Loaded campaigns"),
                    Err(e) => warn!(error = %e, "Failed to load campaigns"),
                }
                Action::CampaignsLoaded(result)
            }
            BackendCommand::CreatePersona(draft) => {
                Action::PersonaCreated(self.create_persona.execute(draft).await)
            }
            BackendCommand::DeletePersona(id) => {
                let result = self.delete_persona.execute(&id).await;
                Action::PersonaDeleted { id, result }
            }
            BackendCommand::CreateCampaign(name) => {
                Action::CampaignCreated(self.create_campaign.execute(&name).await)
            }
            BackendCommand::Generate(request) => {
                Action::AssetGenerated(self.generate.execute(request).await)
            }
            BackendCommand::Download(asset) => {
                Action::AssetDownloaded(self.download.execute(&asset, Utc::now()).await)
            }
            BackendCommand::SaveToCampaign { campaign_id, asset } => {
                let result = self.save_asset.execute(&campaign_id, &asset).await;
                Action::AssetSaved {
                    campaign_id,
                    result,
                }
            }
        }
    }
}

/// Worker that runs screen commands off the UI task.
pub struct Backend {
    handlers: Handlers,
    command_rx: mpsc::UnboundedReceiver<ScopedCommand>,
    action_tx: mpsc::UnboundedSender<ScopedAction>,
}

impl Backend {
    pub fn new(
        ports: BackendPorts,
        command_rx: mpsc::UnboundedReceiver<ScopedCommand>,
        action_tx: mpsc::UnboundedSender<ScopedAction>,
    ) -> Self {
        Self {
            handlers: Handlers::new(ports),
            command_rx,
            action_tx,
        }
    }

    /// Runs until every command sender is dropped. Each command gets its own
    /// task so a slow generation never holds up a list fetch.
    pub async fn run(mut self) {
        info!("Backend worker started");
        while let Some(ScopedCommand { scope, command }) = self.command_rx.recv().await {
            if command.is_read() && scope.is_cancelled() {
                debug!(view = %scope.id(), ?command, "Skipping read for unmounted view");
                continue;
            }

            let handlers = self.handlers.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                let view = scope.id();
                if !command.is_read() {
                    let action = handlers.execute(command).await;
                    let _ = tx.send(ScopedAction { view, action });
                    return;
                }
                tokio::select! {
                    biased;
                    () = scope.token().cancelled() => {
                        debug!(view = %view, "Abandoned read for unmounted view");
                    }
                    action = handlers.execute(command) => {
                        let _ = tx.send(ScopedAction { view, action });
                    }
                }
            });
        }
        info!("Backend worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AssetType;
    use crate::domain::ports::fake::{InMemoryStudio, RecordingSink};
    use crate::presentation::ui::scope::ScopeTracker;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn spawn_backend(
        studio: Arc<InMemoryStudio>,
    ) -> (
        mpsc::UnboundedSender<ScopedCommand>,
        mpsc::UnboundedReceiver<ScopedAction>,
    ) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let ports = BackendPorts::shared(studio, Arc::new(RecordingSink::default()));
        tokio::spawn(Backend::new(ports, command_rx, action_tx).run());
        (command_tx, action_rx)
    }

    #[tokio::test]
    async fn test_action_tagged_with_issuing_view() {
        let (tx, mut rx) = spawn_backend(Arc::new(InMemoryStudio::seeded()));
        let scopes = ScopeTracker::new();

        tx.send(ScopedCommand {
            scope: scopes.current().clone(),
            command: BackendCommand::LoadPersonas,
        })
        .unwrap();

        let scoped = rx.recv().await.unwrap();
        assert_eq!(scoped.view, scopes.current().id());
        match scoped.action {
            Action::PersonasLoaded(Ok(personas)) => assert_eq!(personas.len(), 2),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_write_in_flight_finishes_after_remount() {
        let (studio, gate) = InMemoryStudio::seeded().with_generate_gate();
        let studio = Arc::new(studio);
        let (tx, mut rx) = spawn_backend(studio.clone());
        let mut scopes = ScopeTracker::new();
        let issued = scopes.current().id();

        let request = GenerateRequest::new(AssetType::Image, PersonaId::new("p1"), "neon");
        tx.send(ScopedCommand {
            scope: scopes.current().clone(),
            command: BackendCommand::Generate(request),
        })
        .unwrap();

        while studio.generate_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        scopes.remount();
        gate.notify_waiters();

        let scoped = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(scoped.view, issued);
        assert!(!scopes.is_current(scoped.view));
        assert!(matches!(scoped.action, Action::AssetGenerated(Ok(_))));
    }

    #[tokio::test]
    async fn test_write_for_already_cancelled_scope_still_runs() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let (tx, mut rx) = spawn_backend(studio.clone());
        let mut scopes = ScopeTracker::new();
        let stale = scopes.current().clone();
        scopes.remount();

        tx.send(ScopedCommand {
            scope: stale,
            command: BackendCommand::DeletePersona(PersonaId::new("p1")),
        })
        .unwrap();

        let scoped = rx.recv().await.unwrap();
        assert!(matches!(scoped.action, Action::PersonaDeleted { result: Ok(()), .. }));
        assert_eq!(studio.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(studio.persona_count().await, 1);
    }

    #[test]
    fn test_only_list_and_health_are_reads() {
        assert!(BackendCommand::CheckHealth.is_read());
        assert!(BackendCommand::LoadPersonas.is_read());
        assert!(BackendCommand::LoadCampaigns.is_read());
        assert!(!BackendCommand::DeletePersona(PersonaId::new("p1")).is_read());
        assert!(!BackendCommand::CreateCampaign("Q1".to_string()).is_read());
    }

    #[tokio::test]
    async fn test_command_for_already_cancelled_scope_is_skipped() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let (tx, mut rx) = spawn_backend(studio.clone());
        let mut scopes = ScopeTracker::new();
        let stale = scopes.current().clone();
        scopes.remount();

        tx.send(ScopedCommand {
            scope: stale,
            command: BackendCommand::LoadPersonas,
        })
        .unwrap();
        tx.send(ScopedCommand {
            scope: scopes.current().clone(),
            command: BackendCommand::LoadCampaigns,
        })
        .unwrap();

        let scoped = rx.recv().await.unwrap();
        assert!(matches!(scoped.action, Action::CampaignsLoaded(Ok(_))));
        assert_eq!(studio.list_persona_calls.load(Ordering::SeqCst), 0);
    }
}
