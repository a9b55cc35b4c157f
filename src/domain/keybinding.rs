use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// User-facing commands the launcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Navigation / Focus
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    NextField,

    // Server list
    AddServer,
    EditServer,
    DeleteServer,
    SetDefault,
    Launch,
    OpenExternal,

    // Viewer / Modals
    ExitViewer,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Whether `key` triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Bindings active on the home screen.
#[must_use]
pub fn home_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "Up").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "Down").hidden(),
        Keybind::new(plain(KeyCode::Left), Action::NavigateLeft, "Left").hidden(),
        Keybind::new(plain(KeyCode::Right), Action::NavigateRight, "Right").hidden(),
        Keybind::new(plain(KeyCode::Enter), Action::Select, "Select"),
        Keybind::new(plain(KeyCode::Char('a')), Action::AddServer, "Add"),
        Keybind::new(plain(KeyCode::Char('e')), Action::EditServer, "Edit"),
        Keybind::new(plain(KeyCode::Char('d')), Action::DeleteServer, "Delete"),
        Keybind::new(plain(KeyCode::Char('s')), Action::SetDefault, "Default"),
        Keybind::new(plain(KeyCode::Char('o')), Action::OpenExternal, "Browser"),
        Keybind::new(plain(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit, "Quit")
            .hidden(),
    ]
}

/// Bindings active while a viewer session is open.
#[must_use]
pub fn viewer_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Esc), Action::ExitViewer, "Exit"),
        Keybind::new(plain(KeyCode::Char('x')), Action::ExitViewer, "Exit").hidden(),
        Keybind::new(plain(KeyCode::Char('o')), Action::OpenExternal, "Open in Browser"),
    ]
}

/// Bindings active inside the add/edit form.
#[must_use]
pub fn form_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Tab), Action::NextField, "Next Field"),
        Keybind::new(plain(KeyCode::Enter), Action::Confirm, "Save"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "Cancel"),
    ]
}

/// Bindings active inside the delete confirmation.
#[must_use]
pub fn confirm_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char('y')), Action::Confirm, "Delete"),
        Keybind::new(plain(KeyCode::Enter), Action::Confirm, "Delete").hidden(),
        Keybind::new(plain(KeyCode::Char('n')), Action::Cancel, "Keep"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "Keep").hidden(),
    ]
}

/// Resolves `key` against `binds`.
#[must_use]
pub fn resolve(binds: &[Keybind], key: &KeyEvent) -> Option<Action> {
    binds.iter().find(|b| b.matches(key)).map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home_keys() {
        let binds = home_keybinds();

        assert_eq!(resolve(&binds, &plain(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(resolve(&binds, &plain(KeyCode::Char('s'))), Some(Action::SetDefault));
        assert_eq!(resolve(&binds, &plain(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_modifiers_must_match() {
        let binds = home_keybinds();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);

        assert_eq!(resolve(&binds, &ctrl_a), None);
    }

    #[test]
    fn test_escape_exits_viewer() {
        assert_eq!(
            resolve(&viewer_keybinds(), &plain(KeyCode::Esc)),
            Some(Action::ExitViewer)
        );
    }
}
