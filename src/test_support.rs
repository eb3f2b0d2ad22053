//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::state::App;
use crate::jokes::{Category, Joke, JokeError, JokeProvider};

/// A provider that answers every request with the same canned result
/// and records the categories it was asked for.
pub struct StubProvider {
    pub result: Result<Joke, JokeError>,
    requested: Mutex<Vec<Category>>,
}

impl StubProvider {
    pub fn ok(setup: &str, punchline: &str) -> Self {
        Self {
            result: Ok(Joke::new(setup, punchline)),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: JokeError) -> Self {
        Self {
            result: Err(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<Category> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl JokeProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn random_joke(&self, category: Category) -> Result<Joke, JokeError> {
        self.requested.lock().unwrap().push(category);
        self.result.clone()
    }
}

/// Creates a test App with default category and theme.
pub fn test_app() -> App {
    App::default()
}
