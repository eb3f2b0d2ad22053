//! Domain types for jokes and the categories they are drawn from.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shown in place of a joke whenever a fetch fails for any reason.
pub const FAILURE_MESSAGE: &str = "Failed to fetch joke. Please try again.";

/// A single joke as returned by the joke endpoint.
///
/// The endpoint also sends `id` and `type`; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// The text shown in the joke card: `"<setup> - <punchline>"`.
    pub fn display_text(&self) -> String {
        format!("{} - {}", self.setup, self.punchline)
    }
}

/// Joke category, used verbatim as a path segment of the endpoint URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Programming,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::General, Category::Programming];

    /// Path segment for the endpoint (`general`, `programming`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Programming => "programming",
        }
    }

    /// Human-facing label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Programming => "Programming",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Cycles to the next category (wraps around).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycles to the previous category (wraps around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parses a category name case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }
}
