//! Add/edit server modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::ServerDraft;
use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::keybinding::{Action, Keybind, form_keybinds, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FocusContext, FooterBar, FooterBarStyle, TextInput};

const NAME_PLACEHOLDER: &str = "e.g. Living Room Karaoke";
const URL_PLACEHOLDER: &str = "e.g. 192.168.1.50:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Url,
}

/// What the form asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit(ServerDraft),
    Cancel,
}

/// Modal form state for adding or editing a server.
#[derive(Debug, Clone)]
pub struct ServerForm {
    editing: Option<ServerId>,
    name: TextInput,
    url: TextInput,
    field: FormField,
    error: Option<String>,
    keybinds: Vec<Keybind>,
}

impl ServerForm {
    /// Empty form for a new server.
    #[must_use]
    pub fn add(theme: &Theme) -> Self {
        Self::build(None, "", "", theme)
    }

    /// Form prefilled with `record`'s values.
    #[must_use]
    pub fn edit(record: &ServerRecord, theme: &Theme) -> Self {
        Self::build(Some(record.id().clone()), record.name(), record.url(), theme)
    }

    fn build(editing: Option<ServerId>, name: &str, url: &str, theme: &Theme) -> Self {
        let mut name = TextInput::new("Server Name")
            .placeholder(NAME_PLACEHOLDER)
            .accent(theme.accent)
            .with_value(name);
        name.set_focused(true);
        let url = TextInput::new("Address / URL")
            .placeholder(URL_PLACEHOLDER)
            .accent(theme.accent)
            .with_value(url);

        Self {
            editing,
            name,
            url,
            field: FormField::Name,
            error: None,
            keybinds: form_keybinds(),
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Server"
        } else {
            "Add New Server"
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    fn draft(&self) -> ServerDraft {
        ServerDraft {
            id: self.editing.clone(),
            name: self.name.value().to_string(),
            url: self.url.value().to_string(),
        }
    }

    fn switch_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Url,
            FormField::Url => FormField::Name,
        };
        self.name.set_focused(self.field == FormField::Name);
        self.url.set_focused(self.field == FormField::Url);
    }

    fn active_input(&mut self) -> &mut TextInput {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Url => &mut self.url,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if let Some(action) = resolve(&self.keybinds, &key) {
            return match action {
                Action::NextField => {
                    self.switch_field();
                    FormAction::None
                }
                Action::Confirm => FormAction::Submit(self.draft()),
                Action::Cancel => FormAction::Cancel,
                _ => FormAction::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::BackTab => self.switch_field(),
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.error = None;
                self.active_input().input_char(c);
            }
            KeyCode::Backspace => self.active_input().backspace(),
            KeyCode::Delete => self.active_input().delete(),
            KeyCode::Left => self.active_input().move_left(),
            KeyCode::Right => self.active_input().move_right(),
            KeyCode::Home => self.active_input().move_start(),
            KeyCode::End => self.active_input().move_end(),
            _ => {}
        }
        FormAction::None
    }
}

/// Renders a [`ServerForm`] centered over the current screen.
pub struct ServerFormView<'a> {
    form: &'a ServerForm,
    theme: &'a Theme,
}

impl<'a> ServerFormView<'a> {
    #[must_use]
    pub const fn new(form: &'a ServerForm, theme: &'a Theme) -> Self {
        Self { form, theme }
    }
}

impl Widget for ServerFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [popup] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(13)])
            .flex(Flex::Center)
            .areas(popup);

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(
                format!(" {} ", self.form.title()),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [name_area, url_area, error_area, _, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(inner);

        (&self.form.name).render(name_area, buf);
        (&self.form.url).render(url_area, buf);

        if let Some(error) = self.form.error() {
            Paragraph::new(error)
                .style(self.theme.danger_style)
                .render(error_area, buf);
        }

        FooterBar::new(&self.form.keybinds)
            .focus_context(FocusContext::Form)
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);
    }
}
