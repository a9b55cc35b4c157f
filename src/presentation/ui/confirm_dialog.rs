//! Delete confirmation modal.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::keybinding::{Action, Keybind, confirm_keybinds, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FocusContext, FooterBar, FooterBarStyle};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this server?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    None,
    Confirm,
    Cancel,
}

/// Pending deletion awaiting a yes/no answer.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    target: ServerId,
    name: String,
    keybinds: Vec<Keybind>,
}

impl ConfirmDialog {
    #[must_use]
    pub fn delete(record: &ServerRecord) -> Self {
        Self {
            target: record.id().clone(),
            name: record.name().to_string(),
            keybinds: confirm_keybinds(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &ServerId {
        &self.target
    }

    pub fn handle_key(&self, key: KeyEvent) -> ConfirmAction {
        match resolve(&self.keybinds, &key) {
            Some(Action::Confirm) => ConfirmAction::Confirm,
            Some(Action::Cancel) => ConfirmAction::Cancel,
            _ => ConfirmAction::None,
        }
    }
}

/// Renders a [`ConfirmDialog`] centered over the current screen.
pub struct ConfirmDialogView<'a> {
    dialog: &'a ConfirmDialog,
    theme: &'a Theme,
}

impl<'a> ConfirmDialogView<'a> {
    #[must_use]
    pub const fn new(dialog: &'a ConfirmDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }
}

impl Widget for ConfirmDialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Self { dialog, theme } = self;
        let [popup] = Layout::horizontal([Constraint::Max(54)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(8)])
            .flex(Flex::Center)
            .areas(popup);

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.danger_style)
            .title(Span::styled(
                " Delete Server ",
                theme.danger_style.add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [text_area, _, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .areas(inner);

        Paragraph::new(vec![
            Line::from(DELETE_PROMPT),
            Line::from(Span::styled(
                dialog.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(text_area, buf);

        FooterBar::new(&dialog.keybinds)
            .focus_context(FocusContext::ConfirmationModal)
            .style(FooterBarStyle::from_theme(theme))
            .render(footer_area, buf);
    }
}
