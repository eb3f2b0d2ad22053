use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

/// Button height: label plus top and bottom border.
pub const BUTTON_HEIGHT: u16 = 3;

/// The "get new joke" control. Disabled (and relabeled) while a fetch is in flight.
pub struct FetchButton {
    pub is_loading: bool,
    pub palette: Palette,
}

impl FetchButton {
    pub fn new(is_loading: bool, palette: Palette) -> Self {
        Self {
            is_loading,
            palette,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.is_loading
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading {
            "Fetching..."
        } else {
            "Get New Joke"
        }
    }
}

impl Component for FetchButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_disabled() {
            Style::default()
                .fg(self.palette.button_text)
                .bg(self.palette.button_disabled)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(self.palette.button_text)
                .bg(self.palette.button)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(self.label())
            .block(Block::bordered())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}
