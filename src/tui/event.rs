use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::jokes::Category;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    Fetch,
    ToggleTheme,
    NextCategory,
    PrevCategory,
    SelectCategory(Category),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => map_event(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translates a raw crossterm event into a `TuiEvent`.
pub fn map_event(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')) => {
                    Some(TuiEvent::Fetch)
                }
                (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
                (_, KeyCode::Tab | KeyCode::Right) => Some(TuiEvent::NextCategory),
                (_, KeyCode::BackTab | KeyCode::Left) => Some(TuiEvent::PrevCategory),
                (_, KeyCode::Char('1')) => Some(TuiEvent::SelectCategory(Category::General)),
                (_, KeyCode::Char('2')) => {
                    Some(TuiEvent::SelectCategory(Category::Programming))
                }
                (_, KeyCode::Char('q') | KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_fetch_keys() {
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('n')] {
            assert_eq!(
                map_event(key(code, KeyModifiers::NONE)),
                Some(TuiEvent::Fetch)
            );
        }
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('2'), KeyModifiers::NONE)),
            Some(TuiEvent::SelectCategory(Category::Programming))
        );
        assert_eq!(
            map_event(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextCategory)
        );
        assert_eq!(
            map_event(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(TuiEvent::PrevCategory)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_maps_to_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click), Some(TuiEvent::MouseClick(12, 7)));
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
