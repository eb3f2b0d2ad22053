//! # Application State
//!
//! Core state for Jokebox. Presentation state (palette, hit areas, spinner
//! frame) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── joke: String            // displayed joke text, empty until first fetch settles
//! ├── is_loading: bool        // a fetch is in flight
//! ├── category: Category      // selected joke category
//! ├── theme: Theme            // light or dark
//! └── status_message: String  // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::jokes::Category;

/// Visual theme. Purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle control: names the theme it switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub joke: String,
    pub is_loading: bool,
    pub category: Category,
    pub theme: Theme,
    pub status_message: String,
}

impl App {
    pub fn new(category: Category, theme: Theme) -> Self {
        Self {
            joke: String::new(),
            is_loading: false,
            category,
            theme,
            status_message: String::from("Welcome to Jokebox!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.category, config.theme)
    }

    /// The fetch control is disabled exactly while a request is in flight.
    pub fn can_fetch(&self) -> bool {
        !self.is_loading
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Category::default(), Theme::default())
    }
}
