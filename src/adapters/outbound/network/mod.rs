/// Network adapters for external API calls
mod github_client;

pub use github_client::{GitHubClient, DEFAULT_API_URL, TOKEN_ENV_VARS};
