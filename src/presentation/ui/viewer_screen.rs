//! Full-screen viewer for a launched server.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::application::services::ViewerSession;
use crate::domain::connection::{ConnectionState, LoadOutcome};
use crate::presentation::theme::Theme;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const SPINNER_FRAME_DURATION: Duration = Duration::from_millis(100);

pub struct ViewerView<'a> {
    session: &'a ViewerSession,
    theme: &'a Theme,
    elapsed: Duration,
}

impl<'a> ViewerView<'a> {
    #[must_use]
    pub const fn new(session: &'a ViewerSession, theme: &'a Theme) -> Self {
        Self {
            session,
            theme,
            elapsed: Duration::ZERO,
        }
    }

    /// Time since the session started; drives the spinner.
    #[must_use]
    pub const fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    fn spinner(&self) -> &'static str {
        let frame = self.elapsed.as_millis() / SPINNER_FRAME_DURATION.as_millis();
        let index = usize::try_from(frame).unwrap_or(0) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let message = self.session.loading_message().unwrap_or_default();
        let [_, line_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(self.spinner(), Style::default().fg(self.theme.accent)),
            Span::raw(" "),
            Span::styled(message, Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .centered()
        .render(line_area, buf);
    }

    fn content_lines(&self) -> Vec<Line<'a>> {
        let target = self.session.target();
        let sandbox = format!("sandbox: {}", ViewerSession::SANDBOX.to_attribute());

        match (self.session.state(), self.session.outcome()) {
            (ConnectionState::Failed, Some(LoadOutcome::Failed { reason })) => vec![
                Line::styled(
                    format!("Could not load {}", target.url()),
                    self.theme.danger_style.add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(reason.clone(), self.theme.danger_style),
            ],
            (_, Some(LoadOutcome::Loaded { status, title })) => vec![
                Line::styled(
                    title.clone().unwrap_or_else(|| target.name().to_string()),
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(target.url().to_string(), Style::default().fg(Color::Gray)),
                Line::styled(format!("HTTP {status}"), self.theme.dimmed_style),
                Line::styled(sandbox, self.theme.dimmed_style),
            ],
            _ => vec![Line::styled(target.url().to_string(), self.theme.dimmed_style)],
        }
    }

    fn render_chrome(&self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default().bg(Color::Black).fg(Color::White);
        buf.set_style(area, bar_style);

        let [exit_area, name_area, open_area] = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Length(22),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" ✕ Exit ", self.theme.focus_style),
            Span::styled(" Esc", self.theme.dimmed_style),
        ]))
        .render(exit_area, buf);

        Paragraph::new(Span::styled(
            self.session.target().name(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(name_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("o ", self.theme.dimmed_style),
            Span::styled(" Open in Browser ", Style::default().fg(self.theme.accent)),
        ]))
        .right_aligned()
        .render(open_area, buf);
    }
}

impl Widget for ViewerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.dimmed_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.session.is_loading() {
            self.render_loading(inner, buf);
        } else {
            let lines = self.content_lines();
            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            let [_, content_area, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(height),
                Constraint::Fill(1),
            ])
            .areas(inner);
            Paragraph::new(lines)
                .centered()
                .wrap(Wrap { trim: true })
                .render(content_area, buf);
        }

        if self.session.chrome_visible() && area.height > 0 {
            self.render_chrome(Rect::new(area.x, area.y, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{ViewerEvent, ViewerOptions};
    use crate::domain::entities::ServerRecord;
    use std::time::Instant;

    fn session(distinguish: bool) -> (ViewerSession, Instant) {
        let now = Instant::now();
        let options = ViewerOptions {
            distinguish_load_failure: distinguish,
            ..ViewerOptions::default()
        };
        let record = ServerRecord::from_parts("1", "Living Room", "https://den.local", true);
        (ViewerSession::start(record, options, now), now)
    }

    fn render(session: &ViewerSession) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        ViewerView::new(session, &theme).render(area, &mut buf);
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_loading_indicator_and_chrome() {
        let (session, _) = session(false);
        let text = render(&session);

        assert!(text.contains("Connecting to Living Room..."));
        assert!(text.contains("Exit"));
        assert!(text.contains("Open in Browser"));
    }

    #[test]
    fn test_loaded_page_shows_title() {
        let (mut session, now) = session(false);
        session.handle(
            ViewerEvent::Load(LoadOutcome::Loaded {
                status: 200,
                title: Some("Karaoke Eternal".into()),
            }),
            now,
        );

        let text = render(&session);
        assert!(text.contains("Karaoke Eternal"));
        assert!(text.contains("HTTP 200"));
        assert!(!text.contains("Connecting"));
    }

    #[test]
    fn test_hidden_chrome_not_drawn() {
        let (mut session, now) = session(false);
        session.handle(ViewerEvent::Tick, now + Duration::from_secs(3));

        assert!(!render(&session).contains("Open in Browser"));
    }

    #[test]
    fn test_failure_shown_only_when_distinguished() {
        let (mut quiet, now) = session(false);
        quiet.handle(ViewerEvent::Load(LoadOutcome::failed("refused")), now);
        assert!(!render(&quiet).contains("Could not load"));

        let (mut loud, now) = session(true);
        loud.handle(ViewerEvent::Load(LoadOutcome::failed("refused")), now);
        let text = render(&loud);
        assert!(text.contains("Could not load"));
        assert!(text.contains("refused"));
    }
}
