//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::state::Theme;

/// Colors used by every component for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub card_background: Color,
    pub card_foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub button: Color,
    pub button_text: Color,
    pub button_disabled: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            // Orange backdrop, white card
            Theme::Light => Self {
                background: Color::Rgb(255, 165, 0),
                foreground: Color::Rgb(31, 41, 55),
                card_background: Color::Rgb(243, 244, 246),
                card_foreground: Color::Rgb(55, 65, 81),
                accent: Color::Rgb(255, 107, 107),
                muted: Color::Rgb(107, 114, 128),
                button: Color::Rgb(76, 175, 80),
                button_text: Color::White,
                button_disabled: Color::Rgb(156, 163, 175),
            },
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                foreground: Color::White,
                card_background: Color::Rgb(55, 65, 81),
                card_foreground: Color::Rgb(229, 231, 235),
                accent: Color::Rgb(76, 175, 80),
                muted: Color::Rgb(156, 163, 175),
                button: Color::Rgb(76, 175, 80),
                button_text: Color::White,
                button_disabled: Color::Rgb(75, 85, 99),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default()
            .fg(self.card_foreground)
            .bg(self.card_background)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.button_text)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
