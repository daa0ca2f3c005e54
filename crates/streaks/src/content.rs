//! The centered content card the streaks keep clear of.

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};
use streaks_config::ContentConfig;
use streaks_core::ColorTheme;

/// Widest date the card has to hold ("Wednesday, September 30, 2026").
const DATE_WIDTH: u16 = 29;
/// Border plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
/// Border plus one blank row above and below the text.
const VERTICAL_CHROME: u16 = 4;

/// Card contents and theme.
#[derive(Debug, Clone)]
pub struct ContentCard {
    config: ContentConfig,
    theme: ColorTheme,
}

impl ContentCard {
    pub fn new(config: ContentConfig, theme: ColorTheme) -> Self {
        Self { config, theme }
    }

    /// Where the card sits inside `area`, or `None` if there is no card.
    ///
    /// The card is absent when disabled or when `area` is too small to hold
    /// it.
    pub fn area(&self, area: Rect) -> Option<Rect> {
        if !self.config.enabled {
            return None;
        }
        let text_width = self
            .text_lines(None)
            .iter()
            .map(|line| line.width() as u16)
            .max()
            .unwrap_or(0)
            .max(DATE_WIDTH);
        let width = text_width + HORIZONTAL_CHROME;
        let height = self.line_count() + VERTICAL_CHROME;
        if width > area.width || height > area.height {
            return None;
        }

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Some(Rect::new(x, y, width, height))
    }

    /// Draw the card into `rect`, covering whatever is underneath.
    pub fn render(&self, frame: &mut Frame, rect: Rect, now: DateTime<Local>) {
        let color = self.theme.color();
        let block = Block::bordered().border_style(Style::new().fg(color));
        let inner = block.inner(rect);

        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let text = Paragraph::new(self.text_lines(Some(now)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(color));
        // Keep a blank row above and below the text.
        let text_area = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(2),
        );
        frame.render_widget(text, text_area);
    }

    fn line_count(&self) -> u16 {
        // Title, gap, tagline, optional contact, gap, date.
        5 + u16::from(self.config.contact().is_some())
    }

    fn text_lines(&self, now: Option<DateTime<Local>>) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(self.config.title.clone()).bold(),
            Line::default(),
            Line::from(self.config.tagline.clone()),
        ];
        if let Some(contact) = self.config.contact() {
            lines.push(Line::from(contact).italic());
        }
        lines.push(Line::default());
        let date = now
            .map(|now| now.format("%A, %B %d, %Y").to_string())
            .unwrap_or_default();
        lines.push(Line::from(date).dark_gray());
        lines
    }
}
