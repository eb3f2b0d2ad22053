//! # TUI Components
//!
//! All UI components for the terminal interface. Each one is a stateless,
//! props-based renderer: it receives everything it draws as struct fields,
//! including the `Palette` of the active theme.
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Title, category and status)
//! ├── theme_toggle.rs       (Light/Dark switch, top right)
//! ├── category_selector.rs  (General / Programming options)
//! ├── joke_card.rs          (Joke text or spinner)
//! └── fetch_button.rs       (Get New Joke, disabled while loading)
//! ```
//!
//! Components that can be clicked expose the geometry they draw with, so
//! `ui::hit_test` and the render pass never disagree about where a control is.

pub mod category_selector;
pub mod fetch_button;
pub mod joke_card;
pub mod theme_toggle;
pub mod title_bar;

pub use category_selector::CategorySelector;
pub use fetch_button::FetchButton;
pub use joke_card::JokeCard;
pub use theme_toggle::ThemeToggle;
pub use title_bar::TitleBar;

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
