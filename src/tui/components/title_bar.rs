//! # TitleBar Component
//!
//! Top status line: widget title, selected category and the last status
//! message.
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"Random Joke (category: General) | Fetching..."`
//! 2. **Default**: `"Random Joke (category: General)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::jokes::Category;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

/// Top status bar component. All fields are props.
pub struct TitleBar {
    pub category: Category,
    pub status_message: String,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(category: Category, status_message: String, palette: Palette) -> Self {
        Self {
            category,
            status_message,
            palette,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Random Joke (category: {})", self.category.label())
        } else {
            format!(
                "Random Joke (category: {}) | {}",
                self.category.label(),
                self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let title = Paragraph::new(line).style(self.palette.base());
        frame.render_widget(title, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Theme;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            Category::Programming,
            "Fetching a programming joke...".to_string(),
            Palette::for_theme(Theme::Light),
        );
        let text = render_text(&mut title_bar);
        assert!(text.contains("Random Joke"));
        assert!(text.contains("category: Programming"));
        assert!(text.contains("| Fetching a programming joke..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(
            Category::General,
            String::new(),
            Palette::for_theme(Theme::Dark),
        );
        let text = render_text(&mut title_bar);
        assert!(text.contains("Random Joke (category: General)"));
        assert!(!text.contains('|'));
    }
}
