//! # Category Selector Component
//!
//! One line listing every category, the selected one highlighted:
//!
//! ```text
//! Category:  General   Programming
//! ```
//!
//! Selecting a category never fetches by itself; the next fetch uses it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::jokes::Category;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const PREFIX: &str = "Category: ";

pub struct CategorySelector {
    pub selected: Category,
    pub palette: Palette,
}

impl CategorySelector {
    pub fn new(selected: Category, palette: Palette) -> Self {
        Self { selected, palette }
    }

    /// Screen rectangles of each option within `area`, clipped to it.
    ///
    /// Shared by rendering and mouse hit testing.
    pub fn option_areas(area: Rect) -> Vec<(Category, Rect)> {
        let mut x = area.x.saturating_add(PREFIX.len() as u16);
        let right = area.x.saturating_add(area.width);
        let mut areas = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            if x >= right {
                break;
            }
            let width = (option_label(category).len() as u16).min(right - x);
            areas.push((category, Rect::new(x, area.y, width, area.height.min(1))));
            x = x.saturating_add(width + 1);
        }
        areas
    }
}

fn option_label(category: Category) -> String {
    format!(" {} ", category.label())
}

impl Component for CategorySelector {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(PREFIX).style(self.palette.base()), area);

        let unselected = Style::default()
            .fg(self.palette.card_foreground)
            .bg(self.palette.card_background);

        for (category, option_area) in Self::option_areas(area) {
            let style = if category == self.selected {
                self.palette.selected()
            } else {
                unselected
            };
            let option = Paragraph::new(option_label(category)).style(style);
            frame.render_widget(option, option_area);
        }
    }
}
