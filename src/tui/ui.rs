use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::jokes::Category;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::fetch_button::BUTTON_HEIGHT;
use crate::tui::components::theme_toggle::TOGGLE_WIDTH;
use crate::tui::components::{CategorySelector, FetchButton, JokeCard, ThemeToggle, TitleBar};
use crate::tui::theme::Palette;

/// The central panel never grows wider than this.
const PANEL_MAX_WIDTH: u16 = 64;

/// Where each control sits on screen for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetAreas {
    pub title: Rect,
    pub toggle: Rect,
    pub selector: Rect,
    pub card: Rect,
    pub button: Rect,
}

/// A clickable control under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ThemeToggle,
    Category(Category),
    FetchButton,
}

/// Width of the central panel for a given frame width.
pub fn panel_width(frame_width: u16) -> u16 {
    frame_width.min(PANEL_MAX_WIDTH)
}

/// Splits the frame into control areas.
///
/// ```text
/// ┌───────────────────────────────────────────┐
/// │ Random Joke (category: ...)  [ Dark Mode ]│
/// │                                           │
/// │        Category:  General  Programming    │
/// │        ┌───────────────────────────┐      │
/// │        │      setup - punchline    │      │
/// │        └───────────────────────────┘      │
/// │        ┌───────────────────────────┐      │
/// │        │        Get New Joke       │      │
/// │        └───────────────────────────┘      │
/// └───────────────────────────────────────────┘
/// ```
pub fn compute_areas(frame_area: Rect, card_height: u16) -> WidgetAreas {
    use Constraint::{Fill, Length, Min};

    let [title_row, body] = Layout::vertical([Length(1), Min(0)]).areas(frame_area);
    let [title, toggle] = Layout::horizontal([Min(0), Length(TOGGLE_WIDTH)]).areas(title_row);

    let [_, panel, _] = Layout::horizontal([
        Fill(1),
        Length(panel_width(frame_area.width)),
        Fill(1),
    ])
    .areas(body);

    let [selector, _, card, _, button] = Layout::vertical([
        Length(1),
        Length(1), // Spacer
        Length(card_height),
        Length(1), // Spacer
        Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(panel);

    WidgetAreas {
        title,
        toggle,
        selector,
        card,
        button,
    }
}

/// Hit test: which clickable control, if any, is at the given screen cell.
pub fn hit_test(column: u16, row: u16, areas: &WidgetAreas) -> Option<Hit> {
    let position = Position::new(column, row);

    if areas.toggle.contains(position) {
        return Some(Hit::ThemeToggle);
    }
    if areas.button.contains(position) {
        return Some(Hit::FetchButton);
    }
    CategorySelector::option_areas(areas.selector)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(category, _)| Hit::Category(category))
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_theme(app.theme);
    let frame_area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), frame_area);

    let mut card = JokeCard::new(&app.joke, app.is_loading, tui.spinner_frame, palette);
    let card_height = card.calculate_height(panel_width(frame_area.width));
    let areas = compute_areas(frame_area, card_height);

    TitleBar::new(app.category, app.status_message.clone(), palette).render(frame, areas.title);
    ThemeToggle::new(app.theme, palette).render(frame, areas.toggle);
    CategorySelector::new(app.category, palette).render(frame, areas.selector);
    card.render(frame, areas.card);
    FetchButton::new(app.is_loading, palette).render(frame, areas.button);

    // Cached for mouse hit testing
    tui.areas = areas;
}
