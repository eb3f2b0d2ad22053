//! # Actions
//!
//! Everything that can happen in Jokebox becomes an `Action`.
//! User presses Enter? That's `Action::FetchJoke`.
//! The endpoint answers? That's `Action::JokeLoaded(result)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to run.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;
use crate::jokes::{Category, FAILURE_MESSAGE, Joke, JokeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Request a new joke for the current category.
    FetchJoke,
    /// The in-flight fetch settled.
    JokeLoaded(Result<Joke, JokeError>),
    SelectCategory(Category),
    CycleCategory,
    ToggleTheme,
    Quit,
}

/// Side effects requested by `update()`, executed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a background fetch for the given category.
    SpawnFetch(Category),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchJoke => {
            // At most one fetch in flight; the button is disabled meanwhile.
            if app.is_loading {
                debug!("Ignoring fetch request: already loading");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = format!("Fetching a {} joke...", app.category.as_str());
            info!("Fetch started (category={})", app.category.as_str());
            Effect::SpawnFetch(app.category)
        }
        Action::JokeLoaded(result) => {
            match result {
                Ok(joke) => {
                    app.joke = joke.display_text();
                    app.status_message = String::new();
                    info!("Joke loaded ({} chars)", app.joke.len());
                }
                Err(e) => {
                    warn!("Error fetching joke: {}", e);
                    app.joke = FAILURE_MESSAGE.to_string();
                    app.status_message = String::from("Fetch failed");
                }
            }
            app.is_loading = false;
            Effect::None
        }
        Action::SelectCategory(category) => {
            app.category = category;
            app.status_message = format!("Category: {}", category.label());
            Effect::None
        }
        Action::CycleCategory => update(app, Action::SelectCategory(app.category.next())),
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            debug!("Theme toggled to {:?}", app.theme);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Theme;
    use crate::test_support::test_app;

    #[test]
    fn test_fetch_sets_loading_and_spawns() {
        let mut app = test_app();
        let effect = update(&mut app, Action::FetchJoke);
        assert_eq!(effect, Effect::SpawnFetch(Category::General));
        assert!(app.is_loading);
        assert!(!app.can_fetch());
    }

    #[test]
    fn test_fetch_uses_selected_category() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory(Category::Programming));
        let effect = update(&mut app, Action::FetchJoke);
        assert_eq!(effect, Effect::SpawnFetch(Category::Programming));
    }

    #[test]
    fn test_second_fetch_while_loading_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::FetchJoke);
        let effect = update(&mut app, Action::FetchJoke);
        assert_eq!(effect, Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_success_displays_setup_dash_punchline() {
        let mut app = test_app();
        update(&mut app, Action::FetchJoke);
        update(&mut app, Action::JokeLoaded(Ok(Joke::new("S", "P"))));
        assert_eq!(app.joke, "S - P");
        assert!(!app.is_loading);
    }

    #[test]
    fn test_failure_displays_fixed_message() {
        let mut app = test_app();
        app.joke = "old joke".to_string();
        update(&mut app, Action::FetchJoke);
        update(
            &mut app,
            Action::JokeLoaded(Err(JokeError::Network("connection refused".to_string()))),
        );
        assert_eq!(app.joke, FAILURE_MESSAGE);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_every_error_kind_collapses_to_same_message() {
        let errors = [
            JokeError::Network("dns".to_string()),
            JokeError::Api {
                status: 500,
                message: "boom".to_string(),
            },
            JokeError::Parse("expected array".to_string()),
        ];
        for err in errors {
            let mut app = test_app();
            update(&mut app, Action::FetchJoke);
            update(&mut app, Action::JokeLoaded(Err(err)));
            assert_eq!(app.joke, FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_loading_only_between_start_and_settle() {
        let mut app = test_app();
        assert!(!app.is_loading);
        update(&mut app, Action::FetchJoke);
        assert!(app.is_loading);
        update(&mut app, Action::ToggleTheme);
        update(&mut app, Action::CycleCategory);
        assert!(app.is_loading);
        update(&mut app, Action::JokeLoaded(Ok(Joke::new("a", "b"))));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_fetch_allowed_again_after_settle() {
        let mut app = test_app();
        update(&mut app, Action::FetchJoke);
        update(&mut app, Action::JokeLoaded(Ok(Joke::new("a", "b"))));
        assert_eq!(
            update(&mut app, Action::FetchJoke),
            Effect::SpawnFetch(Category::General)
        );
    }

    #[test]
    fn test_category_change_does_not_fetch() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::SelectCategory(Category::Programming)),
            Effect::None
        );
        assert_eq!(update(&mut app, Action::CycleCategory), Effect::None);
        assert_eq!(app.category, Category::General);
        assert!(!app.is_loading);
        assert!(app.joke.is_empty());
    }

    #[test]
    fn test_theme_toggle_leaves_joke_and_loading_alone() {
        let mut app = test_app();
        app.joke = "S - P".to_string();
        update(&mut app, Action::FetchJoke);

        let effect = update(&mut app, Action::ToggleTheme);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.joke, "S - P");
        assert!(app.is_loading);

        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
