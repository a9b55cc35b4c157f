//! Home screen: the server list and its focus model.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{ServerId, ServerRecord};
use crate::domain::keybinding::{Action, Keybind, home_keybinds, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    Banner, BannerWidget, CARD_HEIGHT, CardControl, FocusContext, FooterBar, FooterBarStyle,
    ServerCard,
};

/// What currently holds focus on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    AddButton,
    Card { index: usize, control: CardControl },
}

/// Requests the home screen hands to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Quit,
    Add,
    Edit(ServerId),
    RequestDelete(ServerId),
    SetDefault(ServerId),
    Launch(ServerId),
    OpenExternal(ServerId),
}

/// Focus and scroll state of the home screen.
pub struct HomeScreen {
    focus: HomeFocus,
    scroll: usize,
    keybinds: Vec<Keybind>,
}

impl HomeScreen {
    /// Focuses the default server's launch control, or the add button when empty.
    #[must_use]
    pub fn new(servers: &[ServerRecord]) -> Self {
        let focus = if servers.is_empty() {
            HomeFocus::AddButton
        } else {
            let index = servers.iter().position(ServerRecord::is_default).unwrap_or(0);
            HomeFocus::Card {
                index,
                control: CardControl::Launch,
            }
        };

        Self {
            focus,
            scroll: 0,
            keybinds: home_keybinds(),
        }
    }

    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    #[must_use]
    pub fn keybinds(&self) -> &[Keybind] {
        &self.keybinds
    }

    /// Moves focus to the launch control of `id`.
    pub fn focus_server(&mut self, servers: &[ServerRecord], id: &ServerId) {
        if let Some(index) = servers.iter().position(|s| s.id() == id) {
            self.focus = HomeFocus::Card {
                index,
                control: CardControl::Launch,
            };
        }
    }

    /// Keeps focus valid after the list changed.
    pub fn sync(&mut self, servers: &[ServerRecord]) {
        if let HomeFocus::Card { index, control } = self.focus {
            self.focus = match servers.len() {
                0 => HomeFocus::AddButton,
                len => HomeFocus::Card {
                    index: index.min(len - 1),
                    control,
                },
            };
        }
    }

    fn focused_server<'a>(&self, servers: &'a [ServerRecord]) -> Option<&'a ServerRecord> {
        match self.focus {
            HomeFocus::Card { index, .. } => servers.get(index),
            HomeFocus::AddButton => None,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent, servers: &[ServerRecord]) -> HomeAction {
        let Some(action) = resolve(&self.keybinds, &key) else {
            return HomeAction::None;
        };

        match action {
            Action::Quit => HomeAction::Quit,
            Action::NavigateUp => {
                self.move_vertical(servers, false);
                HomeAction::None
            }
            Action::NavigateDown => {
                self.move_vertical(servers, true);
                HomeAction::None
            }
            Action::NavigateLeft | Action::NavigateRight => {
                if let HomeFocus::Card { index, control } = self.focus {
                    let control = if action == Action::NavigateRight {
                        control.next()
                    } else {
                        control.previous()
                    };
                    self.focus = HomeFocus::Card { index, control };
                }
                HomeAction::None
            }
            Action::Select => self.activate(servers),
            Action::AddServer => HomeAction::Add,
            Action::EditServer => self.on_focused(servers, HomeAction::Edit),
            Action::DeleteServer => self.on_focused(servers, HomeAction::RequestDelete),
            Action::SetDefault => self.on_focused(servers, HomeAction::SetDefault),
            Action::OpenExternal => self.on_focused(servers, HomeAction::OpenExternal),
            Action::Launch => self.on_focused(servers, HomeAction::Launch),
            _ => HomeAction::None,
        }
    }

    fn on_focused(
        &self,
        servers: &[ServerRecord],
        make: impl FnOnce(ServerId) -> HomeAction,
    ) -> HomeAction {
        self.focused_server(servers)
            .map_or(HomeAction::None, |s| make(s.id().clone()))
    }

    fn activate(&self, servers: &[ServerRecord]) -> HomeAction {
        match self.focus {
            HomeFocus::AddButton => HomeAction::Add,
            HomeFocus::Card { control, .. } => match control {
                CardControl::Launch => self.on_focused(servers, HomeAction::Launch),
                CardControl::Star => self.on_focused(servers, HomeAction::SetDefault),
                CardControl::Edit => self.on_focused(servers, HomeAction::Edit),
                CardControl::Delete => self.on_focused(servers, HomeAction::RequestDelete),
            },
        }
    }

    fn move_vertical(&mut self, servers: &[ServerRecord], down: bool) {
        self.focus = match (self.focus, down) {
            (HomeFocus::AddButton, true) if !servers.is_empty() => HomeFocus::Card {
                index: 0,
                control: CardControl::Launch,
            },
            (HomeFocus::AddButton, _) => HomeFocus::AddButton,
            (HomeFocus::Card { index: 0, .. }, false) => HomeFocus::AddButton,
            (HomeFocus::Card { index, control }, false) => HomeFocus::Card {
                index: index - 1,
                control,
            },
            (HomeFocus::Card { index, control }, true) => HomeFocus::Card {
                index: (index + 1).min(servers.len().saturating_sub(1)),
                control,
            },
        };
    }

    fn visible_range(&mut self, total: usize, capacity: usize) -> std::ops::Range<usize> {
        let capacity = capacity.max(1);
        if let HomeFocus::Card { index, .. } = self.focus {
            if index < self.scroll {
                self.scroll = index;
            } else if index >= self.scroll + capacity {
                self.scroll = index + 1 - capacity;
            }
        } else {
            self.scroll = 0;
        }
        self.scroll = self.scroll.min(total.saturating_sub(capacity));
        self.scroll..(self.scroll + capacity).min(total)
    }
}

/// Renders the home screen.
pub struct HomeView<'a> {
    servers: &'a [ServerRecord],
    theme: &'a Theme,
    banner: &'a Banner,
    show_footer: bool,
}

impl<'a> HomeView<'a> {
    #[must_use]
    pub const fn new(servers: &'a [ServerRecord], theme: &'a Theme, banner: &'a Banner) -> Self {
        Self {
            servers,
            theme,
            banner,
            show_footer: true,
        }
    }

    #[must_use]
    pub const fn without_footer(mut self) -> Self {
        self.show_footer = false;
        self
    }

    fn render_header(&self, state: &HomeScreen, area: Rect, buf: &mut Buffer) {
        let [title_area, button_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(area);

        Paragraph::new(Span::styled(
            "SERVERS",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        let button_style = if state.focus == HomeFocus::AddButton {
            self.theme.focus_style
        } else {
            Style::default().fg(self.theme.accent)
        };
        Paragraph::new(Span::styled(" + Add Connection ", button_style))
            .right_aligned()
            .render(button_area, buf);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, message_area, hint_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new("No karaoke servers configured.")
            .style(Style::default().fg(Color::Gray))
            .centered()
            .render(message_area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled("Press ", self.theme.dimmed_style),
            Span::styled("Enter", Style::default().fg(self.theme.accent)),
            Span::styled(" to add a server", self.theme.dimmed_style),
        ]))
        .centered()
        .render(hint_area, buf);
    }

    fn render_cards(&self, state: &mut HomeScreen, area: Rect, buf: &mut Buffer) {
        let capacity = usize::from(area.height / CARD_HEIGHT);
        let range = state.visible_range(self.servers.len(), capacity);

        for (row, index) in range.enumerate() {
            let y = area.y + u16::try_from(row).unwrap_or(0) * CARD_HEIGHT;
            let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT).intersection(area);
            let focused = match state.focus {
                HomeFocus::Card {
                    index: focused,
                    control,
                } if focused == index => Some(control),
                _ => None,
            };
            ServerCard::new(&self.servers[index], self.theme)
                .focused(focused)
                .render(card_area, buf);
        }
    }
}

impl StatefulWidget for HomeView<'_> {
    type State = HomeScreen;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let footer_height = u16::from(self.show_footer);
        let [banner_area, header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(self.banner.height().saturating_add(2)),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let [_, banner_inner, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.banner.height()),
            Constraint::Length(1),
        ])
        .areas(banner_area);
        BannerWidget::new(self.banner, Style::default().fg(self.theme.accent))
            .render(banner_inner, buf);

        self.render_header(state, header_area, buf);

        if self.servers.is_empty() {
            self.render_empty(list_area, buf);
        } else {
            self.render_cards(state, list_area, buf);
        }

        if self.show_footer {
            let count = format!("{} server(s)", self.servers.len());
            FooterBar::new(state.keybinds())
                .focus_context(FocusContext::Servers)
                .right_info(Some(&count))
                .style(FooterBarStyle::from_theme(self.theme))
                .render(footer_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn servers() -> Vec<ServerRecord> {
        vec![
            ServerRecord::from_parts("a", "A", "https://a", false),
            ServerRecord::from_parts("b", "B", "https://b", true),
            ServerRecord::from_parts("c", "C", "https://c", false),
        ]
    }

    fn card(index: usize, control: CardControl) -> HomeFocus {
        HomeFocus::Card { index, control }
    }

    #[test]
    fn test_empty_list_focuses_add_button() {
        let screen = HomeScreen::new(&[]);
        assert_eq!(screen.focus(), HomeFocus::AddButton);
    }

    #[test]
    fn test_initial_focus_on_default() {
        let screen = HomeScreen::new(&servers());
        assert_eq!(screen.focus(), card(1, CardControl::Launch));
    }

    #[test]
    fn test_enter_on_add_button_adds() {
        let mut screen = HomeScreen::new(&[]);
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &[]), HomeAction::Add);
    }

    #[test_case(KeyCode::Up, card(0, CardControl::Launch) ; "up")]
    #[test_case(KeyCode::Down, card(2, CardControl::Launch) ; "down")]
    #[test_case(KeyCode::Right, card(1, CardControl::Star) ; "right")]
    #[test_case(KeyCode::Left, card(1, CardControl::Launch) ; "left_at_edge")]
    fn test_navigation(code: KeyCode, expected: HomeFocus) {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);

        screen.handle_key(key(code), &servers);

        assert_eq!(screen.focus(), expected);
    }

    #[test]
    fn test_up_from_first_card_reaches_add_button() {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);
        screen.handle_key(key(KeyCode::Up), &servers);
        screen.handle_key(key(KeyCode::Up), &servers);

        assert_eq!(screen.focus(), HomeFocus::AddButton);

        screen.handle_key(key(KeyCode::Down), &servers);
        assert_eq!(screen.focus(), card(0, CardControl::Launch));
    }

    #[test]
    fn test_down_stops_at_last_card() {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);
        for _ in 0..5 {
            screen.handle_key(key(KeyCode::Down), &servers);
        }
        assert_eq!(screen.focus(), card(2, CardControl::Launch));
    }

    #[test_case(0, HomeAction::Launch(ServerId::from("b")) ; "launch")]
    #[test_case(1, HomeAction::SetDefault(ServerId::from("b")) ; "star")]
    #[test_case(2, HomeAction::Edit(ServerId::from("b")) ; "edit")]
    #[test_case(3, HomeAction::RequestDelete(ServerId::from("b")) ; "delete")]
    fn test_enter_activates_control(rights: usize, expected: HomeAction) {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);
        for _ in 0..rights {
            screen.handle_key(key(KeyCode::Right), &servers);
        }

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &servers), expected);
    }

    #[test_case('e', HomeAction::Edit(ServerId::from("b")) ; "edit")]
    #[test_case('d', HomeAction::RequestDelete(ServerId::from("b")) ; "delete")]
    #[test_case('s', HomeAction::SetDefault(ServerId::from("b")) ; "set_default")]
    #[test_case('o', HomeAction::OpenExternal(ServerId::from("b")) ; "open_external")]
    #[test_case('a', HomeAction::Add ; "add")]
    #[test_case('q', HomeAction::Quit ; "quit")]
    fn test_shortcuts(c: char, expected: HomeAction) {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);

        assert_eq!(screen.handle_key(key(KeyCode::Char(c)), &servers), expected);
    }

    #[test]
    fn test_card_shortcuts_ignored_on_add_button() {
        let mut screen = HomeScreen::new(&[]);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('d')), &[]),
            HomeAction::None
        );
    }

    #[test]
    fn test_sync_clamps_after_removal() {
        let mut servers = servers();
        let mut screen = HomeScreen::new(&servers);
        screen.handle_key(key(KeyCode::Down), &servers);

        servers.truncate(1);
        screen.sync(&servers);
        assert_eq!(screen.focus(), card(0, CardControl::Launch));

        servers.clear();
        screen.sync(&servers);
        assert_eq!(screen.focus(), HomeFocus::AddButton);
    }

    #[test]
    fn test_focus_server() {
        let servers = servers();
        let mut screen = HomeScreen::new(&servers);

        screen.focus_server(&servers, &ServerId::from("c"));

        assert_eq!(screen.focus(), card(2, CardControl::Launch));
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut screen = HomeScreen::new(&[]);
        screen.focus = card(4, CardControl::Launch);

        assert_eq!(screen.visible_range(6, 2), 3..5);

        screen.focus = card(0, CardControl::Launch);
        assert_eq!(screen.visible_range(6, 2), 0..2);
    }

    #[test]
    fn test_render_empty_state() {
        let theme = Theme::default();
        let banner = Banner::Title;
        let mut state = HomeScreen::new(&[]);
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        HomeView::new(&[], &theme, &banner).render(area, &mut buf, &mut state);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Karaoke Eternal"));
        assert!(text.contains("No karaoke servers configured."));
        assert!(text.contains("+ Add Connection"));
    }
}
