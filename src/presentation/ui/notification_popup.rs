use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 50;

/// Toast anchored to the bottom-right corner, above the footer row.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }

    fn color(&self) -> Color {
        match self.notification.level {
            NotificationLevel::Info => self.theme.accent,
            NotificationLevel::Warn => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let text_width = self
            .notification
            .message
            .width()
            .max(self.notification.title.width() + 2);
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(MAX_WIDTH)
            .min(area.width);

        let inner_width = usize::from(width.saturating_sub(4).max(1));
        let lines = self.notification.message.width().div_ceil(inner_width).max(1);
        let height = u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height.saturating_sub(1));

        Rect::new(
            area.right().saturating_sub(width + 1),
            area.bottom().saturating_sub(height + 1),
            width,
            height,
        )
        .intersection(area)
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.area() == 0 {
            return;
        }

        let color = self.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Line::from(Span::styled(
                format!(" {} ", self.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));

        Clear.render(popup, buf);
        Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_sits_above_footer() {
        let theme = Theme::default();
        let notification = Notification::error("Browser", "No handler for https");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);

        let footer: String = (0..80).map(|x| buf[(x, 23)].symbol()).collect();
        assert!(footer.trim().is_empty());
        let body: String = (0..80).map(|x| buf[(x, 21)].symbol()).collect();
        assert!(body.contains("No handler for https"));
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let theme = Theme::default();
        let notification = Notification::info("Saved", "ok");
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);

        NotificationPopup::new(&notification, &theme).render(area, &mut buf);
    }
}
