//! Header banner with a text fallback.

use std::fs;
use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Text,
    widgets::{Paragraph, Widget},
};
use tracing::debug;

pub const FALLBACK_TITLE: &str = "Karaoke Eternal";

/// Banner art loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Art(String),
    Title,
}

impl Banner {
    /// Reads banner art from `path`; a missing or empty file yields the title.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(art) if !art.trim().is_empty() => Self::Art(art.trim_end().to_string()),
            Ok(_) => Self::Title,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No banner art, using title");
                Self::Title
            }
        }
    }

    /// Rows needed to draw the banner.
    #[must_use]
    pub fn height(&self) -> u16 {
        match self {
            Self::Art(art) => u16::try_from(art.lines().count()).unwrap_or(u16::MAX),
            Self::Title => 1,
        }
    }
}

pub struct BannerWidget<'a> {
    banner: &'a Banner,
    style: Style,
}

impl<'a> BannerWidget<'a> {
    #[must_use]
    pub fn new(banner: &'a Banner, style: Style) -> Self {
        Self { banner, style }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.banner {
            Banner::Art(art) => Text::from(art.as_str()),
            Banner::Title => Text::from(FALLBACK_TITLE),
        };
        Paragraph::new(text)
            .style(self.style.add_modifier(Modifier::BOLD))
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_falls_back_to_title() {
        let dir = tempdir().unwrap();
        let banner = Banner::load(&dir.path().join("banner.txt"));

        assert_eq!(banner, Banner::Title);
        assert_eq!(banner.height(), 1);
    }

    #[test]
    fn test_art_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("banner.txt");
        fs::write(&path, "  /\\\n /  \\\n").unwrap();

        let banner = Banner::load(&path);

        assert_eq!(banner.height(), 2);
    }

    #[test]
    fn test_blank_file_falls_back_to_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("banner.txt");
        fs::write(&path, "\n  \n").unwrap();

        assert_eq!(Banner::load(&path), Banner::Title);
    }
}
