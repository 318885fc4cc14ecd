//! Three-step persona creation wizard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::route::Route;
use crate::domain::entities::PersonaDraft;
use crate::presentation::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Identity,
    Appearance,
    VoiceReview,
}

impl WizardStep {
    pub const COUNT: usize = 3;

    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Appearance => 2,
            Self::VoiceReview => 3,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Appearance => "Appearance",
            Self::VoiceReview => "Voice & Review",
        }
    }

    const fn fields(self) -> &'static [WizardField] {
        match self {
            Self::Identity => &[
                WizardField::Name,
                WizardField::Niche,
                WizardField::Tone,
                WizardField::Bio,
            ],
            Self::Appearance => &[WizardField::Gender, WizardField::Age, WizardField::Style],
            Self::VoiceReview => &[WizardField::Voice],
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Identity => Some(Self::Appearance),
            Self::Appearance => Some(Self::VoiceReview),
            Self::VoiceReview => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Appearance => Some(Self::Identity),
            Self::VoiceReview => Some(Self::Appearance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    Name,
    Niche,
    Tone,
    Bio,
    Gender,
    Age,
    Style,
    Voice,
}

impl WizardField {
    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Niche => "Niche",
            Self::Tone => "Tone",
            Self::Bio => "Bio",
            Self::Gender => "Gender",
            Self::Age => "Age Range",
            Self::Style => "Visual Style",
            Self::Voice => "Voice Model",
        }
    }

    const fn is_text(self) -> bool {
        matches!(self, Self::Name | Self::Bio | Self::Style)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    None,
    Submit(PersonaDraft),
    Navigate(Route),
}

pub struct WizardScreen {
    step: WizardStep,
    draft: PersonaDraft,
    focus: usize,
    name_input: TextInput,
    bio_input: TextInput,
    style_input: TextInput,
    submitting: bool,
}

impl WizardScreen {
    #[must_use]
    pub fn new() -> Self {
        let draft = PersonaDraft::default();
        let mut style_input = TextInput::new(" Visual Style ").placeholder("e.g. Cyberpunk, Minimalist");
        style_input.set_value(draft.style.clone());

        let mut screen = Self {
            step: WizardStep::Identity,
            draft,
            focus: 0,
            name_input: TextInput::new(" Name ").placeholder("e.g. Sarah Tech"),
            bio_input: TextInput::new(" Bio ").placeholder("Short description of the persona..."),
            style_input,
            submitting: false,
        };
        screen.sync_focus();
        screen
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &PersonaDraft {
        &self.draft
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn focused_field(&self) -> WizardField {
        self.step.fields()[self.focus]
    }

    /// Submit is only offered on the last step and never twice at once.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::VoiceReview && !self.submitting
    }

    /// Advances a step. No-op on the last step.
    pub fn next(&mut self) {
        if let Some(step) = self.step.next() {
            self.step = step;
            self.focus = 0;
            self.sync_focus();
        }
    }

    /// Goes back a step. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                self.focus = 0;
                self.sync_focus();
                true
            }
            None => false,
        }
    }

    /// Marks the submission in flight and hands out the draft.
    pub fn submit(&mut self) -> Option<PersonaDraft> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// The draft stays as entered so the user can try again.
    pub fn on_submit_failed(&mut self) {
        self.submitting = false;
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.step.fields().len();
        self.sync_focus();
    }

    fn focus_previous(&mut self) {
        let len = self.step.fields().len();
        self.focus = (self.focus + len - 1) % len;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.name_input.set_focused(focused == WizardField::Name);
        self.bio_input.set_focused(focused == WizardField::Bio);
        self.style_input.set_focused(focused == WizardField::Style);
    }

    fn cycle_choice(&mut self, forward: bool) {
        let field = self.focused_field();
        let d = &mut self.draft;
        match field {
            WizardField::Niche => d.niche = if forward { d.niche.next() } else { d.niche.previous() },
            WizardField::Tone => d.tone = if forward { d.tone.next() } else { d.tone.previous() },
            WizardField::Gender => {
                d.gender = if forward { d.gender.next() } else { d.gender.previous() };
            }
            WizardField::Age => d.age = if forward { d.age.next() } else { d.age.previous() },
            WizardField::Voice => d.voice = if forward { d.voice.next() } else { d.voice.previous() },
            WizardField::Name | WizardField::Bio | WizardField::Style => {}
        }
    }

    fn edit_text(&mut self, key: KeyEvent) {
        let (input, target) = match self.focused_field() {
            WizardField::Name => (&mut self.name_input, &mut self.draft.name),
            WizardField::Bio => (&mut self.bio_input, &mut self.draft.bio),
            WizardField::Style => (&mut self.style_input, &mut self.draft.style),
            _ => return,
        };
        if input.handle_key(key) {
            target.clear();
            target.push_str(input.value());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WizardAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::PageDown => self.next(),
            KeyCode::PageUp => {
                self.back();
            }
            KeyCode::Enter => {
                if self.step == WizardStep::VoiceReview {
                    if let Some(draft) = self.submit() {
                        return WizardAction::Submit(draft);
                    }
                } else {
                    self.next();
                }
            }
            KeyCode::Esc => {
                if !self.back() {
                    return WizardAction::Navigate(Route::Home);
                }
            }
            KeyCode::Left | KeyCode::Right if !self.focused_field().is_text() => {
                self.cycle_choice(key.code == KeyCode::Right);
            }
            _ => {
                if self.focused_field().is_text() {
                    self.edit_text(key);
                }
            }
        }
        WizardAction::None
    }

    fn choice_line(&self, field: WizardField, value: &str) -> Line<'static> {
        let focused = self.focused_field() == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!(" {:<13}", field.label()), label_style),
            Span::styled(format!("< {value} >"), value_style),
        ])
    }

    fn render_fields(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Constraint> = self
            .step
            .fields()
            .iter()
            .map(|f| Constraint::Length(if f.is_text() { 3 } else { 2 }))
            .chain(std::iter::once(Constraint::Fill(1)))
            .collect();
        let areas = Layout::vertical(rows).split(area);

        for (field, row) in self.step.fields().iter().zip(areas.iter()) {
            match field {
                WizardField::Name => (&self.name_input).render(*row, buf),
                WizardField::Bio => (&self.bio_input).render(*row, buf),
                WizardField::Style => (&self.style_input).render(*row, buf),
                WizardField::Niche => self.choice_line(*field, self.draft.niche.as_str()).render(*row, buf),
                WizardField::Tone => self.choice_line(*field, self.draft.tone.as_str()).render(*row, buf),
                WizardField::Gender => self.choice_line(*field, self.draft.gender.as_str()).render(*row, buf),
                WizardField::Age => self.choice_line(*field, self.draft.age.as_str()).render(*row, buf),
                WizardField::Voice => self.choice_line(*field, self.draft.voice.as_str()).render(*row, buf),
            }
        }

        if self.step == WizardStep::VoiceReview
            && let Some(summary_area) = areas.last()
        {
            self.render_summary(*summary_area, buf);
        }
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let name = if self.draft.name.is_empty() {
            "(unnamed)"
        } else {
            self.draft.name.as_str()
        };
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {label:<8}"), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        };
        Paragraph::new(vec![
            row("Name", name.to_string()),
            row("Niche", self.draft.niche.to_string()),
            row("Style", self.draft.style.clone()),
            row("Voice", self.draft.voice.to_string()),
        ])
        .block(Block::default().borders(Borders::TOP).title(" Summary "))
        .render(area, buf);
    }

    fn hint_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        if self.submitting {
            return Line::styled(
                "Creating persona...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            );
        }
        let mut spans = vec![Span::styled("Tab: Field | ←/→: Change", dim)];
        if self.step == WizardStep::VoiceReview {
            spans.push(Span::styled(" | Enter: Create Persona", Style::default().fg(Color::Green)));
        } else {
            spans.push(Span::styled(" | Enter: Next", dim));
        }
        let back = if self.step == WizardStep::Identity {
            " | Esc: Cancel"
        } else {
            " | Esc: Back"
        };
        spans.push(Span::styled(back, dim));
        Line::from(spans)
    }
}

impl Default for WizardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &WizardScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Create New Persona ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [progress, _, fields, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" Step {} of {} ", self.step.number(), WizardStep::COUNT),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(
                format!(" {}", self.step.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(progress, buf);

        self.render_fields(fields, buf);
        Paragraph::new(self.hint_line()).render(hints, buf);
    }
}
