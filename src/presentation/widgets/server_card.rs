//! Server card widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::domain::entities::ServerRecord;
use crate::presentation::theme::Theme;

/// Focusable controls on a card, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardControl {
    #[default]
    Launch,
    Star,
    Edit,
    Delete,
}

impl CardControl {
    pub const ALL: [Self; 4] = [Self::Launch, Self::Star, Self::Edit, Self::Delete];

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1).min(Self::ALL.len() - 1)]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[index.saturating_sub(1)]
    }

    const fn label(self, is_default: bool) -> &'static str {
        match self {
            Self::Launch => "▶ Launch",
            Self::Star if is_default => "★ Default",
            Self::Star => "☆ Set Default",
            Self::Edit => "✎ Edit",
            Self::Delete => "✗ Delete",
        }
    }
}

/// Height of one rendered card.
pub const CARD_HEIGHT: u16 = 5;

pub struct ServerCard<'a> {
    server: &'a ServerRecord,
    focused: Option<CardControl>,
    theme: &'a Theme,
}

impl<'a> ServerCard<'a> {
    #[must_use]
    pub const fn new(server: &'a ServerRecord, theme: &'a Theme) -> Self {
        Self {
            server,
            focused: None,
            theme,
        }
    }

    #[must_use]
    pub const fn focused(mut self, control: Option<CardControl>) -> Self {
        self.focused = control;
        self
    }

    fn control_style(&self, control: CardControl) -> Style {
        if self.focused == Some(control) {
            self.theme.focus_style
        } else if control == CardControl::Star && self.server.is_default() {
            Style::default().fg(Color::Yellow)
        } else if control == CardControl::Delete {
            self.theme.danger_style
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Widget for ServerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused.is_some() {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if self.server.is_default() {
            block = block.title_top(
                Line::from(Span::styled(" DEFAULT ", self.theme.default_badge_style))
                    .right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, url_area, controls_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(
            self.server.name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(name_area, buf);

        Paragraph::new(Span::styled(self.server.url(), self.theme.dimmed_style))
            .render(url_area, buf);

        let mut spans = Vec::new();
        for control in CardControl::ALL {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!(" {} ", control.label(self.server.is_default())),
                self.control_style(control),
            ));
        }
        Paragraph::new(Line::from(spans)).render(controls_area, buf);
    }
}
