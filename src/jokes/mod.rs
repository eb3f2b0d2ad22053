pub mod official;
pub mod provider;
pub mod types;

pub use official::OfficialJokeApi;
pub use provider::{JokeError, JokeProvider};
pub use types::{Category, Joke, FAILURE_MESSAGE};
