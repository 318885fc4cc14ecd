//! Asset generation studio.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Tabs, Widget, Wrap},
};

use super::route::Route;
use super::utils::modal_rect;
use crate::domain::entities::{AssetType, Campaign, CampaignId, GeneratedAsset, Persona, PersonaId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AttachReceipt, GenerateRequest};
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::TextInput;

/// How long the "saved" badge stays up after a successful save.
pub const SAVED_BADGE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioFocus {
    AssetType,
    Persona,
    Prompt,
}

impl StudioFocus {
    const fn next(self) -> Self {
        match self {
            Self::AssetType => Self::Persona,
            Self::Persona => Self::Prompt,
            Self::Prompt => Self::AssetType,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::AssetType => Self::Prompt,
            Self::Persona => Self::AssetType,
            Self::Prompt => Self::Persona,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioAction {
    None,
    Generate(GenerateRequest),
    Download(GeneratedAsset),
    Save {
        campaign_id: CampaignId,
        asset: GeneratedAsset,
    },
    Navigate(Route),
}

pub struct StudioScreen {
    asset_type: AssetType,
    personas: Vec<Persona>,
    campaigns: Vec<Campaign>,
    selected_persona: Option<PersonaId>,
    prompt: TextInput,
    focus: StudioFocus,
    result: Option<GeneratedAsset>,
    generating: bool,
    downloading: bool,
    save_menu_open: bool,
    save_cursor: usize,
    saving: Option<CampaignId>,
    saved_until: Option<Instant>,
}

impl StudioScreen {
    /// The preselected persona applies at once, before the list arrives.
    #[must_use]
    pub fn new(preselected: Option<PersonaId>) -> Self {
        let asset_type = AssetType::default();
        let prompt = TextInput::new(format!(" {} ", asset_type.prompt_label()))
            .placeholder(asset_type.prompt_placeholder());
        let mut screen = Self {
            asset_type,
            personas: Vec::new(),
            campaigns: Vec::new(),
            selected_persona: preselected,
            prompt,
            focus: StudioFocus::Prompt,
            result: None,
            generating: false,
            downloading: false,
            save_menu_open: false,
            save_cursor: 0,
            saving: None,
            saved_until: None,
        };
        screen.prompt.set_focused(true);
        screen
    }

    #[must_use]
    pub const fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    #[must_use]
    pub const fn selected_persona(&self) -> Option<&PersonaId> {
        self.selected_persona.as_ref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.value()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&GeneratedAsset> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub const fn is_save_menu_open(&self) -> bool {
        self.save_menu_open
    }

    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.saved_until.is_some()
    }

    #[must_use]
    pub const fn focus(&self) -> StudioFocus {
        self.focus
    }

    pub fn set_asset_type(&mut self, asset_type: AssetType) {
        self.asset_type = asset_type;
        self.prompt.set_label(format!(" {} ", asset_type.prompt_label()));
        self.prompt.set_placeholder(asset_type.prompt_placeholder());
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt.set_value(prompt);
    }

    /// Keeps the current selection if it is in the list, else falls back to the first persona.
    pub fn on_personas(&mut self, result: Result<Vec<Persona>, ApiError>) {
        let Ok(personas) = result else {
            return;
        };
        let keep = self
            .selected_persona
            .as_ref()
            .is_some_and(|id| personas.iter().any(|p| p.id() == id));
        if !keep {
            self.selected_persona = personas.first().map(|p| p.id().clone());
        }
        self.personas = personas;
    }

    pub fn on_campaigns(&mut self, result: Result<Vec<Campaign>, ApiError>) {
        self.campaigns = result.unwrap_or_default();
        self.save_cursor = 0;
    }

    /// Generate needs a prompt and a persona, and no generation in flight.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.prompt.value().trim().is_empty()
            && self.selected_persona.is_some()
            && !self.generating
    }

    pub fn generate(&mut self) -> Option<GenerateRequest> {
        if !self.can_generate() {
            return None;
        }
        let persona_id = self.selected_persona.clone()?;
        self.generating = true;
        Some(GenerateRequest::new(
            self.asset_type,
            persona_id,
            self.prompt.value(),
        ))
    }

    /// A failure leaves any previous result on screen.
    pub fn on_generated(&mut self, result: Result<GeneratedAsset, ApiError>) {
        self.generating = false;
        if let Ok(asset) = result {
            self.result = Some(asset);
            self.saved_until = None;
        }
    }

    pub fn download(&mut self) -> Option<GeneratedAsset> {
        if self.downloading {
            return None;
        }
        let asset = self.result.clone()?;
        self.downloading = true;
        Some(asset)
    }

    pub fn on_downloaded(&mut self) {
        self.downloading = false;
    }

    /// Only offered once there is a result to save.
    pub fn toggle_save_menu(&mut self) {
        if self.result.is_some() {
            self.save_menu_open = !self.save_menu_open;
        }
    }

    /// Picks the campaign under the cursor. Ignored while a save is in flight.
    pub fn select_campaign(&mut self) -> Option<(CampaignId, GeneratedAsset)> {
        if self.saving.is_some() || !self.save_menu_open {
            return None;
        }
        let campaign_id = self.campaigns.get(self.save_cursor)?.id().clone();
        let asset = self.result.clone()?;
        self.saving = Some(campaign_id.clone());
        Some((campaign_id, asset))
    }

    /// Success closes the menu and shows the badge until [`SAVED_BADGE_DURATION`]
    /// has passed; failure keeps the menu open.
    pub fn on_saved(&mut self, now: Instant, result: &Result<AttachReceipt, ApiError>) {
        self.saving = None;
        if result.is_ok() {
            self.save_menu_open = false;
            self.saved_until = Some(now + SAVED_BADGE_DURATION);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.saved_until.is_some_and(|until| now >= until) {
            self.saved_until = None;
        }
    }

    fn cycle_persona(&mut self, forward: bool) {
        if self.personas.is_empty() {
            return;
        }
        let len = self.personas.len();
        let next = match self
            .selected_persona
            .as_ref()
            .and_then(|id| self.personas.iter().position(|p| p.id() == id))
        {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.selected_persona = Some(self.personas[next].id().clone());
    }

    fn set_focus(&mut self, focus: StudioFocus) {
        self.focus = focus;
        self.prompt.set_focused(focus == StudioFocus::Prompt);
    }

    fn handle_save_menu_key(&mut self, key: KeyEvent) -> StudioAction {
        match key.code {
            KeyCode::Up => self.save_cursor = self.save_cursor.saturating_sub(1),
            KeyCode::Down => {
                if !self.campaigns.is_empty() {
                    self.save_cursor = (self.save_cursor + 1).min(self.campaigns.len() - 1);
                }
            }
            KeyCode::Enter => {
                if let Some((campaign_id, asset)) = self.select_campaign() {
                    return StudioAction::Save { campaign_id, asset };
                }
            }
            KeyCode::Esc => self.save_menu_open = false,
            _ => {}
        }
        StudioAction::None
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> StudioAction {
        if EventHandler::is_ctrl(&key, 'g') {
            return self.generate().map_or(StudioAction::None, StudioAction::Generate);
        }
        if EventHandler::is_ctrl(&key, 'd') {
            return self.download().map_or(StudioAction::None, StudioAction::Download);
        }
        if EventHandler::is_ctrl(&key, 's') {
            self.toggle_save_menu();
            return StudioAction::None;
        }
        if self.save_menu_open {
            return self.handle_save_menu_key(key);
        }

        match key.code {
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Esc => return StudioAction::Navigate(Route::Home),
            KeyCode::Enter if self.focus == StudioFocus::Prompt => {
                return self.generate().map_or(StudioAction::None, StudioAction::Generate);
            }
            KeyCode::Left | KeyCode::Right if self.focus != StudioFocus::Prompt => {
                let forward = key.code == KeyCode::Right;
                if self.focus == StudioFocus::AssetType {
                    let next = if forward {
                        self.asset_type.next()
                    } else {
                        self.asset_type.previous()
                    };
                    self.set_asset_type(next);
                } else {
                    self.cycle_persona(forward);
                }
            }
            _ if self.focus == StudioFocus::Prompt => {
                self.prompt.handle_key(key);
            }
            _ => {}
        }
        StudioAction::None
    }

    fn persona_label(&self) -> String {
        match &self.selected_persona {
            None => "No persona".to_string(),
            Some(id) => self
                .personas
                .iter()
                .find(|p| p.id() == id)
                .map_or_else(|| id.to_string(), |p| format!("{} ({})", p.name(), p.niche())),
        }
    }

    fn section_style(&self, focus: StudioFocus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let [types, persona, prompt, action] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let selected = AssetType::ALL
            .iter()
            .position(|t| *t == self.asset_type)
            .unwrap_or(0);
        Tabs::new(AssetType::ALL.iter().map(|t| t.display_name()))
            .select(selected)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.section_style(StudioFocus::AssetType))
                    .title(" Asset Type "),
            )
            .render(types, buf);

        Paragraph::new(format!("< {} >", self.persona_label()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.section_style(StudioFocus::Persona))
                    .title(" Persona "),
            )
            .render(persona, buf);

        (&self.prompt).render(prompt, buf);

        let action_line = if self.generating {
            Line::styled(
                "Generating...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )
        } else if self.can_generate() {
            Line::styled(
                format!("Ctrl+G: Generate {}", self.asset_type.display_name()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(
                "Enter a prompt and pick a persona to generate",
                Style::default().fg(Color::DarkGray),
            )
        };
        Paragraph::new(action_line).render(action, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(" Result ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(asset) = &self.result else {
            let text = if self.generating {
                "Generating your asset..."
            } else {
                "Your generated asset will appear here."
            };
            Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
                Span::raw(asset.asset_type().display_name()),
            ]),
            Line::from(vec![
                Span::styled("URL:  ", Style::default().fg(Color::DarkGray)),
                Span::styled(asset.url(), Style::default().fg(Color::Cyan)),
            ]),
            Line::raw(""),
            Line::styled(
                "Ctrl+D: Download | Ctrl+S: Save to Campaign",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if self.downloading {
            lines.push(Line::styled("Downloading...", Style::default().fg(Color::Yellow)));
        }
        if self.is_saving() {
            lines.push(Line::styled("Saving...", Style::default().fg(Color::Yellow)));
        } else if self.is_saved() {
            lines.push(Line::styled(
                "Saved!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_save_menu(&self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.campaigns.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .clamp(3, 12);
        let modal = modal_rect(44, height, area);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Save to Campaign ");

        if self.campaigns.is_empty() {
            Paragraph::new("No campaigns found")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(modal, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .campaigns
            .iter()
            .map(|c| ListItem::new(c.name()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.save_cursor));
        StatefulWidget::render(list, modal, buf, &mut state);
    }
}

impl Widget for &StudioScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Content Studio ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, hints] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);
        let [controls, result] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

        self.render_controls(controls, buf);
        self.render_result(result, buf);

        Paragraph::new(Line::styled(
            "Tab: Focus | ←/→: Change | Ctrl+G: Generate | Esc: Home",
            Style::default().fg(Color::DarkGray),
        ))
        .render(hints, buf);

        if self.save_menu_open {
            self.render_save_menu(result, buf);
        }
    }
}
