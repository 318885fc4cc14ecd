//! Landing screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::route::Route;
use crate::domain::errors::ApiError;
use crate::domain::ports::HealthStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    Checking,
    Online(String),
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Navigate(Route),
}

pub struct HomeScreen {
    health: HealthState,
}

impl HomeScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            health: HealthState::Checking,
        }
    }

    #[must_use]
    pub const fn health(&self) -> &HealthState {
        &self.health
    }

    pub fn on_health(&mut self, result: Result<HealthStatus, ApiError>) {
        self.health = match result {
            Ok(status) => HealthState::Online(status.status),
            Err(_) => HealthState::Offline,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        let route = match key.code {
            KeyCode::Char('n') => Route::CreatePersona,
            KeyCode::Char('p') => Route::Personas,
            KeyCode::Char('c') => Route::Campaigns,
            KeyCode::Char('s') => Route::Studio { persona: None },
            _ => return HomeAction::None,
        };
        HomeAction::Navigate(route)
    }

    fn health_line(&self) -> Line<'_> {
        let (text, color) = match &self.health {
            HealthState::Checking => ("Checking...".to_string(), Color::Yellow),
            HealthState::Online(status) => (status.clone(), Color::Green),
            HealthState::Offline => ("Offline".to_string(), Color::Red),
        };
        Line::from(vec![
            Span::raw("Backend: "),
            Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" DigiInfluencer Studio ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [intro, health, _, shortcuts] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Design AI influencers and produce their content.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw("Create personas with a name, niche, tone, look and voice, then"),
            Line::raw("generate images, videos and ads for them and collect the results"),
            Line::raw("into campaigns."),
        ])
        .wrap(Wrap { trim: false })
        .render(intro, buf);

        Paragraph::new(self.health_line()).render(health, buf);

        let key_style = Style::default().fg(Color::Yellow);
        let shortcut = |key: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<4}"), key_style),
                Span::raw(label),
            ])
        };
        Paragraph::new(vec![
            shortcut("n", "Create a persona"),
            shortcut("p", "Browse personas"),
            shortcut("c", "Browse campaigns"),
            shortcut("s", "Open the studio"),
            Line::raw(""),
            Line::styled(
                "F1-F5 switch screens anywhere, Ctrl+Q quits.",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .render(shortcuts, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    #[test]
    fn test_health_lifecycle() {
        let mut screen = HomeScreen::new();
        assert_eq!(screen.health(), &HealthState::Checking);

        screen.on_health(Ok(HealthStatus {
            status: "healthy".to_string(),
            service: None,
        }));
        assert_eq!(screen.health(), &HealthState::Online("healthy".to_string()));
    }

    #[test]
    fn test_health_failure_is_offline() {
        let mut screen = HomeScreen::new();
        screen.on_health(Err(ApiError::network("connection refused")));
        assert_eq!(screen.health(), &HealthState::Offline);
    }

    #[test_case('n', Route::CreatePersona ; "wizard")]
    #[test_case('p', Route::Personas ; "personas")]
    #[test_case('c', Route::Campaigns ; "campaigns")]
    #[test_case('s', Route::Studio { persona: None } ; "studio")]
    fn test_shortcuts(c: char, route: Route) {
        let mut screen = HomeScreen::new();
        let action = screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        assert_eq!(action, HomeAction::Navigate(route));
    }
}
