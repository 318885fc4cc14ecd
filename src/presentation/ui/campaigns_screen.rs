//! Campaign table with a create modal.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::route::Route;
use super::utils::modal_rect;
use crate::domain::entities::{Campaign, CampaignStatus};
use crate::domain::errors::ApiError;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignsAction {
    None,
    Create(String),
    Navigate(Route),
}

pub struct CampaignsScreen {
    campaigns: Vec<Campaign>,
    loading: bool,
    selected: usize,
    modal_open: bool,
    name_input: TextInput,
    creating: bool,
}

impl CampaignsScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut name_input = TextInput::new(" Campaign Name ").placeholder("e.g. Summer Launch");
        name_input.set_focused(true);
        Self {
            campaigns: Vec::new(),
            loading: true,
            selected: 0,
            modal_open: false,
            name_input,
            creating: false,
        }
    }

    #[must_use]
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name_input.value()
    }

    #[must_use]
    pub const fn is_creating(&self) -> bool {
        self.creating
    }

    /// Create needs a non-blank name and no create in flight.
    #[must_use]
    pub fn can_create(&self) -> bool {
        !self.name_input.value().trim().is_empty() && !self.creating
    }

    pub fn on_loaded(&mut self, result: Result<Vec<Campaign>, ApiError>) {
        self.campaigns = result.unwrap_or_default();
        self.loading = false;
        self.selected = 0;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hides the modal; the typed name is kept for the next open.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Marks the create in flight and returns the name to send.
    pub fn submit(&mut self) -> Option<String> {
        if !self.modal_open || !self.can_create() {
            return None;
        }
        self.creating = true;
        Some(self.name_input.value().trim().to_string())
    }

    /// Success appends and resets the modal; failure keeps it open with the name.
    pub fn on_created(&mut self, result: Result<Campaign, ApiError>) {
        self.creating = false;
        if let Ok(campaign) = result {
            self.campaigns.push(campaign);
            self.modal_open = false;
            self.name_input.clear();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> CampaignsAction {
        if self.modal_open {
            match key.code {
                KeyCode::Enter => {
                    if let Some(name) = self.submit() {
                        return CampaignsAction::Create(name);
                    }
                }
                KeyCode::Esc => self.close_modal(),
                _ => {
                    if !self.creating {
                        self.name_input.handle_key(key);
                    }
                }
            }
            return CampaignsAction::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.campaigns.is_empty() {
                    self.selected = (self.selected + 1).min(self.campaigns.len() - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char('n' | 'c') => self.open_modal(),
            KeyCode::Esc => return CampaignsAction::Navigate(Route::Home),
            _ => {}
        }
        CampaignsAction::None
    }

    const fn status_color(status: &CampaignStatus) -> Color {
        match status {
            CampaignStatus::Active => Color::Green,
            CampaignStatus::Draft => Color::Yellow,
            CampaignStatus::Completed => Color::Blue,
            CampaignStatus::Other(_) => Color::Gray,
        }
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Name", "Status", "Assets", "Created"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let rows = self.campaigns.iter().map(|c| {
            Row::new(vec![
                Line::from(c.name()),
                Line::styled(c.status().as_str(), Style::default().fg(Self::status_color(c.status()))),
                Line::from(c.asset_count().to_string()),
                Line::from(c.date()),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_modal(&self, area: Rect, buf: &mut Buffer) {
        let modal = modal_rect(50, 7, area);
        Clear.render(modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" New Campaign ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [input, status] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);
        (&self.name_input).render(input, buf);

        let status_line = if self.creating {
            Line::styled("Creating...", Style::default().fg(Color::Yellow))
        } else if self.can_create() {
            Line::styled("Enter: Create | Esc: Close", Style::default().fg(Color::DarkGray))
        } else {
            Line::styled("Type a name | Esc: Close", Style::default().fg(Color::DarkGray))
        };
        Paragraph::new(status_line).render(status, buf);
    }
}

impl Default for CampaignsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &CampaignsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Campaigns ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, hints] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        if self.loading {
            Paragraph::new("Loading campaigns...")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))
                .render(body, buf);
        } else if self.campaigns.is_empty() {
            Paragraph::new("No campaigns yet. Press n to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .render(body, buf);
        } else {
            self.render_table(body, buf);
        }

        Paragraph::new(Line::styled(
            "↑/↓: Select | n: New Campaign | Esc: Home",
            Style::default().fg(Color::DarkGray),
        ))
        .render(hints, buf);

        if self.modal_open {
            self.render_modal(area, buf);
        }
    }
}
