//! Persona list with delete confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::route::Route;
use super::utils::{avatar_color, modal_rect, truncate_to_width};
use crate::domain::entities::{Persona, PersonaId};
use crate::domain::errors::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonasAction {
    None,
    Delete(PersonaId),
    Navigate(Route),
}

pub struct PersonasScreen {
    personas: Vec<Persona>,
    loading: bool,
    selected: usize,
    confirm_delete: Option<PersonaId>,
    deleting: Option<PersonaId>,
}

impl PersonasScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            personas: Vec::new(),
            loading: true,
            selected: 0,
            confirm_delete: None,
            deleting: None,
        }
    }

    #[must_use]
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Persona> {
        self.personas.get(self.selected)
    }

    #[must_use]
    pub const fn confirming(&self) -> Option<&PersonaId> {
        self.confirm_delete.as_ref()
    }

    #[must_use]
    pub const fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    /// A failed fetch leaves an empty list.
    pub fn on_loaded(&mut self, result: Result<Vec<Persona>, ApiError>) {
        self.personas = result.unwrap_or_default();
        self.loading = false;
        self.selected = 0;
    }

    /// Removes the persona locally on success, no refetch.
    pub fn on_deleted(&mut self, id: &PersonaId, result: &Result<(), ApiError>) {
        if self.deleting.as_ref() == Some(id) {
            self.deleting = None;
        }
        if result.is_ok() {
            self.personas.retain(|p| p.id() != id);
            self.selected = self.selected.min(self.personas.len().saturating_sub(1));
        }
    }

    /// Opens the confirm modal for the highlighted persona.
    pub fn request_delete(&mut self) {
        if self.deleting.is_some() {
            return;
        }
        if let Some(persona) = self.selected() {
            self.confirm_delete = Some(persona.id().clone());
        }
    }

    /// Confirms the pending delete. Returns the id to delete.
    pub fn confirm_delete(&mut self) -> Option<PersonaId> {
        if self.deleting.is_some() {
            return None;
        }
        let id = self.confirm_delete.take()?;
        self.deleting = Some(id.clone());
        Some(id)
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    fn select_next(&mut self) {
        if !self.personas.is_empty() {
            self.selected = (self.selected + 1).min(self.personas.len() - 1);
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PersonasAction {
        if self.confirm_delete.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    if let Some(id) = self.confirm_delete() {
                        return PersonasAction::Delete(id);
                    }
                }
                KeyCode::Char('n') | KeyCode::Esc => self.cancel_delete(),
                _ => {}
            }
            return PersonasAction::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Enter | KeyCode::Char('s') => {
                if let Some(persona) = self.selected() {
                    return PersonasAction::Navigate(Route::Studio {
                        persona: Some(persona.id().clone()),
                    });
                }
            }
            KeyCode::Char('n') => return PersonasAction::Navigate(Route::CreatePersona),
            KeyCode::Esc => return PersonasAction::Navigate(Route::Home),
            _ => {}
        }
        PersonasAction::None
    }

    fn persona_item(persona: &Persona, width: usize) -> ListItem<'_> {
        let avatar = Span::styled(
            format!(" {} ", persona.initial()),
            Style::default()
                .fg(Color::Black)
                .bg(avatar_color(persona.id().as_str()))
                .add_modifier(Modifier::BOLD),
        );
        let header = Line::from(vec![
            avatar,
            Span::raw(" "),
            Span::styled(persona.name(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} · {}", persona.niche(), persona.tone()),
                Style::default().fg(Color::Cyan),
            ),
        ]);
        let bio = Line::styled(
            format!("     {}", truncate_to_width(persona.bio(), width.saturating_sub(6))),
            Style::default().fg(Color::Gray),
        );
        let details = Line::styled(
            format!("     Style: {}  Voice: {}", persona.style(), persona.voice()),
            Style::default().fg(Color::DarkGray),
        );
        ListItem::new(vec![header, bio, details, Line::raw("")])
    }

    fn render_confirm(&self, area: Rect, buf: &mut Buffer) {
        let Some(id) = &self.confirm_delete else {
            return;
        };
        let name = self
            .personas
            .iter()
            .find(|p| p.id() == id)
            .map_or(id.as_str(), Persona::name);

        let modal = modal_rect(48, 5, area);
        Clear.render(modal, buf);
        Paragraph::new(vec![
            Line::from(format!("Delete persona \"{name}\"?")),
            Line::raw(""),
            Line::styled("y: Delete   n: Keep", Style::default().fg(Color::DarkGray)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm "),
        )
        .render(modal, buf);
    }
}

impl Default for PersonasScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &PersonasScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Personas ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, hints] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        if self.loading {
            Paragraph::new("Loading personas...")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))
                .render(body, buf);
        } else if self.personas.is_empty() {
            Paragraph::new("No personas yet. Press n to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .render(body, buf);
        } else {
            let items: Vec<ListItem> = self
                .personas
                .iter()
                .map(|p| PersonasScreen::persona_item(p, body.width as usize))
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("▌");
            let mut state = ListState::default().with_selected(Some(self.selected));
            StatefulWidget::render(list, body, buf, &mut state);
        }

        let hint = if self.deleting.is_some() {
            Line::styled("Deleting...", Style::default().fg(Color::Yellow))
        } else {
            Line::styled(
                "↑/↓: Select | Enter: Use in Studio | d: Delete | n: New Persona | Esc: Home",
                Style::default().fg(Color::DarkGray),
            )
        };
        Paragraph::new(hint).render(hints, buf);

        self.render_confirm(area, buf);
    }
}
