use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::core::state::Theme;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

/// Width reserved for the toggle: fits `[ Light Mode ]`.
pub const TOGGLE_WIDTH: u16 = 14;

/// Clickable theme switch. Its label names the theme it switches to.
pub struct ThemeToggle {
    pub theme: Theme,
    pub palette: Palette,
}

impl ThemeToggle {
    pub fn new(theme: Theme, palette: Palette) -> Self {
        Self { theme, palette }
    }

    pub fn label(&self) -> String {
        format!("[ {} ]", self.theme.toggle_label())
    }
}

impl Component for ThemeToggle {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(self.palette.button_text)
            .bg(self.palette.muted);
        let toggle = Paragraph::new(self.label())
            .style(style)
            .alignment(Alignment::Right);
        frame.render_widget(toggle, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_label_fits_reserved_width() {
        for theme in [Theme::Light, Theme::Dark] {
            let toggle = ThemeToggle::new(theme, Palette::for_theme(theme));
            assert!(toggle.label().len() as u16 <= TOGGLE_WIDTH);
        }
    }

    #[test]
    fn test_renders_opposite_theme_name() {
        let backend = TestBackend::new(TOGGLE_WIDTH, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut toggle = ThemeToggle::new(Theme::Dark, Palette::for_theme(Theme::Dark));
        terminal
            .draw(|f| {
                toggle.render(f, f.area());
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert_eq!(text, "[ Light Mode ]");
    }
}
