use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Servers,
    Form,
    ConfirmationModal,
    Viewer,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Servers => "SERVERS",
            Self::Form => "EDIT",
            Self::ConfirmationModal => "CONFIRM",
            Self::Viewer => "VIEWER",
        }
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            focus_indicator: Style::default()
                .bg(Color::DarkGray)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// One-line hint bar listing the visible keybindings.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus_context: Option<FocusContext>,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus_context: None,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn focus_context(mut self, context: FocusContext) -> Self {
        self.focus_context = Some(context);
        self
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn key_name(key: &crossterm::event::KeyEvent) -> Cow<'static, str> {
        let name: Cow<'static, str> = match key.code {
            KeyCode::Char(c) => c.to_string().into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            other => format!("{other:?}").into(),
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            format!("C-{name}").into()
        } else {
            name
        }
    }

    fn hint_spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::new();

        if let Some(context) = self.focus_context {
            spans.push(Span::styled(
                format!(" {} ", context.display_name()),
                self.style.focus_indicator,
            ));
        }

        for binding in self.keybindings.iter().filter(|k| k.visible_in_bar) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", Self::key_name(&binding.key)),
                self.style.key_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style.background);

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        Paragraph::new(Line::from(self.hint_spans()))
            .render(Rect::new(area.x, area.y, left_width, 1), buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            Paragraph::new(Span::styled(info, self.style.info))
                .render(Rect::new(right_x, area.y, right_width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::home_keybinds;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hidden_bindings_are_skipped() {
        let binds = home_keybinds();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds)
            .focus_context(FocusContext::Servers)
            .render(area, &mut buf);

        let text = row_text(&buf, 120);
        assert!(text.starts_with(" SERVERS "));
        assert!(text.contains(" a  Add "));
        assert!(!text.contains('↑'));
    }

    #[test]
    fn test_right_info_is_right_aligned() {
        let binds = Vec::new();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds)
            .right_info(Some("2 servers"))
            .render(area, &mut buf);

        assert!(row_text(&buf, 20).ends_with("2 servers"));
    }
}
