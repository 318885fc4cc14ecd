use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use super::backend::{Action, Backend, BackendCommand, BackendPorts, ScopedAction, ScopedCommand};
use super::campaigns_screen::{CampaignsAction, CampaignsScreen};
use super::home_screen::{HomeAction, HomeScreen};
use super::personas_screen::{PersonasAction, PersonasScreen};
use super::route::Route;
use super::scope::ScopeTracker;
use super::studio_screen::{StudioAction, StudioScreen};
use super::wizard_screen::{WizardAction, WizardScreen};
use crate::application::NotificationManager;
use crate::application::use_cases::DownloadOutcome;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::widgets::{NotificationPopup, StatusBar};

const TICK_RATE: Duration = Duration::from_millis(250);

enum CurrentScreen {
    Home(HomeScreen),
    Wizard(WizardScreen),
    Personas(PersonasScreen),
    Campaigns(CampaignsScreen),
    Studio(Box<StudioScreen>),
}

impl CurrentScreen {
    fn mount(route: &Route) -> (Self, Vec<BackendCommand>) {
        match route {
            Route::Home => (Self::Home(HomeScreen::new()), vec![BackendCommand::CheckHealth]),
            Route::CreatePersona => (Self::Wizard(WizardScreen::new()), Vec::new()),
            Route::Personas => (
                Self::Personas(PersonasScreen::new()),
                vec![BackendCommand::LoadPersonas],
            ),
            Route::Campaigns => (
                Self::Campaigns(CampaignsScreen::new()),
                vec![BackendCommand::LoadCampaigns],
            ),
            Route::Studio { persona } => (
                Self::Studio(Box::new(StudioScreen::new(persona.clone()))),
                vec![BackendCommand::LoadPersonas, BackendCommand::LoadCampaigns],
            ),
        }
    }
}

pub struct App {
    route: Route,
    screen: CurrentScreen,
    scopes: ScopeTracker,
    command_tx: mpsc::UnboundedSender<ScopedCommand>,
    action_rx: mpsc::UnboundedReceiver<ScopedAction>,
    notifications: NotificationManager,
    backend_label: String,
    exiting: bool,
}

impl App {
    /// Spawns the backend worker and mounts `start`. Must be called inside a
    /// tokio runtime.
    #[must_use]
    pub fn new(ports: BackendPorts, start: Route, notification_duration: Duration) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        tokio::spawn(Backend::new(ports, command_rx, action_tx).run());

        let mut app = Self {
            route: Route::Home,
            screen: CurrentScreen::Home(HomeScreen::new()),
            scopes: ScopeTracker::new(),
            command_tx,
            action_rx,
            notifications: NotificationManager::new(notification_duration),
            backend_label: String::new(),
            exiting: false,
        };
        app.navigate(start);
        app
    }

    /// Text shown at the right of the status bar, usually the API base URL.
    #[must_use]
    pub fn with_backend_label(mut self, label: impl Into<String>) -> Self {
        self.backend_label = label.into();
        self
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick_interval = interval(TICK_RATE);

        terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;

        while !self.exiting {
            tokio::select! {
                Some(scoped) = self.action_rx.recv() => {
                    self.handle_action(scoped);
                }

                _ = tick_interval.tick() => {
                    self.tick(Instant::now());
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.exiting = true;
                    }
                }
            }
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Mounts a fresh screen for `route` and cancels work of the old one.
    pub fn navigate(&mut self, route: Route) {
        let scope = self.scopes.remount();
        debug!(view = %scope.id(), ?route, "Mounting screen");
        let (screen, commands) = CurrentScreen::mount(&route);
        self.screen = screen;
        self.route = route;
        for command in commands {
            self.send(command);
        }
    }

    fn send(&self, command: BackendCommand) {
        let scoped = ScopedCommand {
            scope: self.scopes.current().clone(),
            command,
        };
        if self.command_tx.send(scoped).is_err() {
            error!("Backend worker is gone, dropping command");
        }
    }

    fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
        if let CurrentScreen::Studio(studio) = &mut self.screen {
            studio.tick(now);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        if let Some(route) = Route::from_key(&key) {
            self.navigate(route);
            return EventResult::Continue;
        }
        if key.code == KeyCode::Esc && self.notifications.dismiss() {
            return EventResult::Continue;
        }

        match &mut self.screen {
            CurrentScreen::Home(screen) => match screen.handle_key(key) {
                HomeAction::Navigate(route) => self.navigate(route),
                HomeAction::None => {}
            },
            CurrentScreen::Wizard(screen) => match screen.handle_key(key) {
                WizardAction::Submit(draft) => {
                    info!(name = %draft.name, "Submitting persona");
                    self.send(BackendCommand::CreatePersona(draft));
                }
                WizardAction::Navigate(route) => self.navigate(route),
                WizardAction::None => {}
            },
            CurrentScreen::Personas(screen) => match screen.handle_key(key) {
                PersonasAction::Delete(id) => self.send(BackendCommand::DeletePersona(id)),
                PersonasAction::Navigate(route) => self.navigate(route),
                PersonasAction::None => {}
            },
            CurrentScreen::Campaigns(screen) => match screen.handle_key(key) {
                CampaignsAction::Create(name) => self.send(BackendCommand::CreateCampaign(name)),
                CampaignsAction::Navigate(route) => self.navigate(route),
                CampaignsAction::None => {}
            },
            CurrentScreen::Studio(screen) => match screen.handle_key(key) {
                StudioAction::Generate(request) => self.send(BackendCommand::Generate(request)),
                StudioAction::Download(asset) => self.send(BackendCommand::Download(asset)),
                StudioAction::Save { campaign_id, asset } => {
                    self.send(BackendCommand::SaveToCampaign { campaign_id, asset });
                }
                StudioAction::Navigate(route) => self.navigate(route),
                StudioAction::None => {}
            },
        }
        EventResult::Continue
    }

    fn handle_action(&mut self, scoped: ScopedAction) {
        if !self.scopes.is_current(scoped.view) {
            debug!(view = %scoped.view, "Discarding result for unmounted view");
            return;
        }

        match (&mut self.screen, scoped.action) {
            (CurrentScreen::Home(screen), Action::HealthChecked(result)) => {
                if let Err(e) = &result {
                    warn!(error = %e, "Health check failed");
                }
                screen.on_health(result);
            }
            (CurrentScreen::Wizard(screen), Action::PersonaCreated(result)) => match result {
                Ok(persona) => {
                    info!(persona_id = %persona.id(), "Persona created");
                    self.notifications.info(
                        "Persona Created",
                        format!("Persona \"{}\" created! ID: {}", persona.name(), persona.id()),
                    );
                    self.navigate(Route::Home);
                }
                Err(e) => {
                    screen.on_submit_failed();
                    self.notifications
                        .error("Create Failed", format!("Failed to create persona: {e}"));
                }
            },
            (CurrentScreen::Personas(screen), Action::PersonasLoaded(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .warn("Load Failed", format!("Could not load personas: {e}"));
                }
                screen.on_loaded(result);
            }
            (CurrentScreen::Personas(screen), Action::PersonaDeleted { id, result }) => {
                if let Err(e) = &result {
                    self.notifications
                        .error("Delete Failed", format!("Failed to delete persona: {e}"));
                }
                screen.on_deleted(&id, &result);
            }
            (CurrentScreen::Campaigns(screen), Action::CampaignsLoaded(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .warn("Load Failed", format!("Could not load campaigns: {e}"));
                }
                screen.on_loaded(result);
            }
            (CurrentScreen::Campaigns(screen), Action::CampaignCreated(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .warn("Create Failed", format!("Campaign was not created: {e}"));
                }
                screen.on_created(result);
            }
            (CurrentScreen::Studio(screen), Action::PersonasLoaded(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .warn("Load Failed", format!("Could not load personas: {e}"));
                }
                screen.on_personas(result);
            }
            (CurrentScreen::Studio(screen), Action::CampaignsLoaded(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .warn("Load Failed", format!("Could not load campaigns: {e}"));
                }
                screen.on_campaigns(result);
            }
            (CurrentScreen::Studio(screen), Action::AssetGenerated(result)) => {
                if let Err(e) = &result {
                    self.notifications
                        .error("Generation Failed", format!("Failed to generate asset: {e}"));
                }
                screen.on_generated(result);
            }
            (CurrentScreen::Studio(screen), Action::AssetDownloaded(result)) => {
                screen.on_downloaded();
                match result {
                    Ok(DownloadOutcome::Saved(path)) => self
                        .notifications
                        .success("Downloaded", format!("Saved to {}", path.display())),
                    Ok(DownloadOutcome::OpenedExternally { reason }) => self
                        .notifications
                        .warn("Opened in Browser", format!("Download failed: {reason}")),
                    Err(e) => self
                        .notifications
                        .error("Download Failed", format!("Could not download asset: {e}")),
                }
            }
            (CurrentScreen::Studio(screen), Action::AssetSaved { campaign_id, result }) => {
                if let Err(e) = &result {
                    self.notifications.warn(
                        "Save Failed",
                        format!("Could not save to campaign {campaign_id}: {e}"),
                    );
                }
                screen.on_saved(Instant::now(), &result);
            }
            (_, action) => {
                debug!(?action, "Action does not apply to the mounted screen");
            }
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let titles = Route::TABS
            .iter()
            .map(|(key, label)| Line::from(format!("{key} {label}")));
        Tabs::new(titles)
            .select(self.route.tab_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|")
            .render(area, buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(header, buf);

        match &self.screen {
            CurrentScreen::Home(screen) => screen.render(body, buf),
            CurrentScreen::Wizard(screen) => screen.render(body, buf),
            CurrentScreen::Personas(screen) => screen.render(body, buf),
            CurrentScreen::Campaigns(screen) => screen.render(body, buf),
            CurrentScreen::Studio(screen) => (&**screen).render(body, buf),
        }

        StatusBar::new()
            .left(format!(" {} v{}", crate::NAME, crate::VERSION))
            .center(Route::TABS[self.route.tab_index()].1)
            .right(format!("{} ", self.backend_label))
            .render(footer, buf);

        if let Some(notification) = self.notifications.current_notification() {
            NotificationPopup::new(notification).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PersonaId;
    use crate::domain::ports::fake::{InMemoryStudio, RecordingSink};
    use crate::domain::{NotificationLevel, Persona, PersonaDraft};
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn app_with(studio: Arc<InMemoryStudio>, start: Route) -> App {
        let ports = BackendPorts::shared(studio, Arc::new(RecordingSink::default()));
        App::new(ports, start, Duration::from_secs(5))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    async fn pump(app: &mut App) {
        let scoped = tokio::time::timeout(Duration::from_secs(1), app.action_rx.recv())
            .await
            .expect("backend answered")
            .expect("channel open");
        app.handle_action(scoped);
    }

    #[tokio::test]
    async fn test_personas_mount_fetches_list() {
        let mut app = app_with(Arc::new(InMemoryStudio::seeded()), Route::Personas);
        pump(&mut app).await;

        let CurrentScreen::Personas(screen) = &app.screen else {
            panic!("expected personas screen");
        };
        assert!(!screen.is_loading());
        assert_eq!(screen.personas().len(), 2);
    }

    #[tokio::test]
    async fn test_remount_refetches() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let mut app = app_with(studio.clone(), Route::Personas);
        pump(&mut app).await;

        app.handle_key(key(KeyCode::F(1)));
        pump(&mut app).await;
        app.handle_key(key(KeyCode::F(2)));
        pump(&mut app).await;

        assert_eq!(studio.list_persona_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_stale_result_discarded() {
        let mut app = app_with(Arc::new(InMemoryStudio::seeded()), Route::Personas);
        let stale = app.scopes.current().id();
        app.navigate(Route::Personas);

        app.handle_action(ScopedAction {
            view: stale,
            action: Action::PersonasLoaded(Ok(vec![Persona::new(
                "ghost",
                PersonaDraft::named("Ghost"),
            )])),
        });

        let CurrentScreen::Personas(screen) = &app.screen else {
            panic!("expected personas screen");
        };
        assert!(screen.is_loading());
        assert!(screen.personas().is_empty());
    }

    #[tokio::test]
    async fn test_wizard_success_notifies_and_goes_home() {
        let mut app = app_with(Arc::new(InMemoryStudio::seeded()), Route::CreatePersona);
        type_text(&mut app, "Nova");
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::Enter));
        pump(&mut app).await;

        assert_eq!(app.route(), &Route::Home);
        let notification = app.notifications.current_notification().unwrap();
        assert_eq!(notification.level, NotificationLevel::Info);
        assert_eq!(notification.message, "Persona \"Nova\" created! ID: persona_3");
    }

    #[tokio::test]
    async fn test_wizard_failure_stays_on_review() {
        let studio = Arc::new(InMemoryStudio::seeded());
        studio.set_fail_writes(true);
        let mut app = app_with(studio, Route::CreatePersona);
        type_text(&mut app, "Nova");
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::Enter));
        pump(&mut app).await;

        assert_eq!(app.route(), &Route::CreatePersona);
        let CurrentScreen::Wizard(screen) = &app.screen else {
            panic!("expected wizard");
        };
        assert!(screen.can_submit());
        assert_eq!(screen.draft().name, "Nova");
        assert_eq!(
            app.notifications.current_notification().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_delete_issues_one_call_without_refetch() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let mut app = app_with(studio.clone(), Route::Personas);
        pump(&mut app).await;

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        pump(&mut app).await;

        let CurrentScreen::Personas(screen) = &app.screen else {
            panic!("expected personas screen");
        };
        assert_eq!(screen.personas().len(), 1);
        assert_eq!(screen.personas()[0].id().as_str(), "p2");
        assert_eq!(studio.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(studio.list_persona_calls.load(Ordering::SeqCst), 1);
        assert_eq!(studio.persona_count().await, 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_survives_navigation() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let mut app = app_with(studio.clone(), Route::Personas);
        pump(&mut app).await;

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        app.handle_key(key(KeyCode::F(1)));

        // Delete result (stale) and the Home health check.
        pump(&mut app).await;
        pump(&mut app).await;

        assert_eq!(app.route(), &Route::Home);
        assert_eq!(studio.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(studio.persona_count().await, 1);
        assert!(!app.notifications.has_notifications());
    }

    #[tokio::test]
    async fn test_wizard_submit_survives_navigation() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let mut app = app_with(studio.clone(), Route::CreatePersona);
        type_text(&mut app, "Nova");
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::F(2)));

        // Create result (stale) and the Personas list.
        pump(&mut app).await;
        pump(&mut app).await;

        assert_eq!(app.route(), &Route::Personas);
        assert_eq!(studio.persona_count().await, 3);
        assert!(!app.notifications.has_notifications());
    }

    #[tokio::test]
    async fn test_studio_generate_then_save_once() {
        let studio = Arc::new(InMemoryStudio::seeded());
        let mut app = app_with(
            studio.clone(),
            Route::Studio {
                persona: Some(PersonaId::new("p2")),
            },
        );
        pump(&mut app).await;
        pump(&mut app).await;

        type_text(&mut app, "beach day");
        app.handle_key(ctrl('g'));
        pump(&mut app).await;

        app.handle_key(ctrl('s'));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        pump(&mut app).await;

        let CurrentScreen::Studio(screen) = &app.screen else {
            panic!("expected studio");
        };
        assert_eq!(screen.selected_persona().map(PersonaId::as_str), Some("p2"));
        assert_eq!(screen.result().map(|a| a.persona_id().as_str()), Some("p2"));
        assert!(screen.is_saved());
        assert!(!screen.is_save_menu_open());
        assert_eq!(studio.attach_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_failure_notifies_error() {
        let studio = Arc::new(InMemoryStudio::seeded());
        studio.set_fail_writes(true);
        let mut app = app_with(studio, Route::Studio { persona: None });
        pump(&mut app).await;
        pump(&mut app).await;

        type_text(&mut app, "city");
        app.handle_key(ctrl('g'));
        pump(&mut app).await;

        let CurrentScreen::Studio(screen) = &app.screen else {
            panic!("expected studio");
        };
        assert!(screen.result().is_none());
        assert!(screen.can_generate());
        assert_eq!(
            app.notifications.current_notification().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[tokio::test]
    async fn test_escape_dismisses_notification_first() {
        let mut app = app_with(Arc::new(InMemoryStudio::seeded()), Route::Campaigns);
        pump(&mut app).await;
        app.notifications.warn("Test", "message");

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.notifications.has_notifications());
        assert_eq!(app.route(), &Route::Campaigns);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Home);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app_with(Arc::new(InMemoryStudio::seeded()), Route::Home);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Continue);
        assert_eq!(app.handle_key(ctrl('q')), EventResult::Exit);
        assert_eq!(app.handle_key(ctrl('c')), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_render_shows_tabs_and_status() {
        let app = app_with(Arc::new(InMemoryStudio::seeded()), Route::Home)
            .with_backend_label("http://localhost:8000");
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("F1 Home"));
        assert!(text.contains("http://localhost:8000"));
        assert!(text.contains("Checking..."));
    }
}
