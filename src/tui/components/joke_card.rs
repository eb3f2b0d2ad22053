//! # Joke Card Component
//!
//! The bordered box holding the joke. Three display states:
//!
//! - **Loading**: a braille spinner, nothing else.
//! - **Empty** (nothing fetched yet): `Loading...`
//! - **Settled**: the joke text or the failure message, wrapped and centered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders plus one blank line above and below the text.
const VERTICAL_OVERHEAD: u16 = 4;

const PLACEHOLDER: &str = "Loading...";

pub struct JokeCard<'a> {
    pub text: &'a str,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl<'a> JokeCard<'a> {
    pub fn new(text: &'a str, is_loading: bool, spinner_frame: usize, palette: Palette) -> Self {
        Self {
            text,
            is_loading,
            spinner_frame,
            palette,
        }
    }

    /// The text shown when not loading.
    fn body(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER
        } else {
            self.text
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Height the card needs at the given outer width, borders included.
    pub fn calculate_height(&self, width: u16) -> u16 {
        if self.is_loading {
            return 1 + VERTICAL_OVERHEAD;
        }
        let inner_width = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);
        let lines = Paragraph::new(self.body())
            .wrap(Wrap { trim: true })
            .line_count(inner_width);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

impl Component for JokeCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.palette.muted))
            .padding(Padding::new(CONTENT_PAD_H, CONTENT_PAD_H, 1, 1));

        let content = if self.is_loading {
            Line::styled(
                self.spinner(),
                Style::default()
                    .fg(self.palette.button)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::raw(self.body())
        };

        let card = Paragraph::new(content)
            .block(block)
            .style(self.palette.card())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Theme;
    use crate::jokes::FAILURE_MESSAGE;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(card: &mut JokeCard) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                card.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn palette() -> Palette {
        Palette::for_theme(Theme::Light)
    }

    #[test]
    fn test_shows_joke_text() {
        let mut card = JokeCard::new("S - P", false, 0, palette());
        assert!(render_text(&mut card).contains("S - P"));
    }

    #[test]
    fn test_empty_text_shows_placeholder() {
        let mut card = JokeCard::new("", false, 0, palette());
        assert!(render_text(&mut card).contains("Loading..."));
    }

    #[test]
    fn test_loading_shows_spinner_instead_of_text() {
        let mut card = JokeCard::new("S - P", true, 3, palette());
        let text = render_text(&mut card);
        assert!(!text.contains("S - P"));
        assert!(text.contains(SPINNER_FRAMES[3]));
    }

    #[test]
    fn test_failure_message_renders() {
        let mut card = JokeCard::new(FAILURE_MESSAGE, false, 0, palette());
        assert!(render_text(&mut card).contains(FAILURE_MESSAGE));
    }

    #[test]
    fn test_spinner_wraps_around() {
        let card = JokeCard::new("", true, SPINNER_FRAMES.len() + 2, palette());
        assert_eq!(card.spinner(), SPINNER_FRAMES[2]);
    }

    #[test]
    fn test_height_single_line() {
        let card = JokeCard::new("Short", false, 0, palette());
        assert_eq!(card.calculate_height(60), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_height_saturates_for_huge_text() {
        // Far more wrapped lines than fit in a u16
        let huge = "x ".repeat(200_000);
        let card = JokeCard::new(&huge, false, 0, palette());
        assert_eq!(card.calculate_height(5), u16::MAX);
    }

    #[test]
    fn test_height_grows_when_text_wraps() {
        let long = "word ".repeat(40);
        let card = JokeCard::new(&long, false, 0, palette());
        assert!(card.calculate_height(30) > 1 + VERTICAL_OVERHEAD);
    }
}
