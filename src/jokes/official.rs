//! Official Joke API provider.
//!
//! `GET {base_url}/jokes/{category}/random` answers with a JSON array holding
//! a single joke object. Only the first element is used.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::jokes::{Category, Joke, JokeError, JokeProvider};

pub const DEFAULT_BASE_URL: &str = "https://official-joke-api.appspot.com";

/// Joke provider backed by the public Official Joke API.
pub struct OfficialJokeApi {
    base_url: String,
    client: reqwest::Client,
}

impl OfficialJokeApi {
    /// `base_url` comes from `core::config::resolve`; a trailing slash is dropped.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn joke_url(&self, category: Category) -> String {
        format!("{}/jokes/{}/random", self.base_url, category.as_str())
    }
}

/// Decodes a response body into the first joke of the array.
fn parse_jokes(body: &str) -> Result<Joke, JokeError> {
    let jokes: Vec<Joke> =
        serde_json::from_str(body).map_err(|e| JokeError::Parse(e.to_string()))?;
    jokes
        .into_iter()
        .next()
        .ok_or_else(|| JokeError::Parse("empty joke list".to_string()))
}

#[async_trait]
impl JokeProvider for OfficialJokeApi {
    fn name(&self) -> &str {
        "official-joke-api"
    }

    async fn random_joke(&self, category: Category) -> Result<Joke, JokeError> {
        let url = self.joke_url(category);
        info!("Requesting joke: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| JokeError::Network(e.to_string()))?;

        debug!("Joke API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Joke API error: {} - {}", status, err_body);
            return Err(JokeError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| JokeError::Network(e.to_string()))?;
        debug!("Joke API body: {} bytes", body.len());

        parse_jokes(&body)
    }
}
