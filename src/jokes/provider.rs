use std::fmt;

use async_trait::async_trait;

use super::types::{Category, Joke};

/// Errors that can occur while fetching a joke.
/// All of them collapse into the same user-visible message; the variants
/// exist for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not a non-empty JSON array of jokes.
    Parse(String),
}

impl fmt::Display for JokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokeError::Network(msg) => write!(f, "network error: {msg}"),
            JokeError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            JokeError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for JokeError {}

/// A source of random jokes.
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches one random joke from the given category.
    async fn random_joke(&self, category: Category) -> Result<Joke, JokeError>;
}
