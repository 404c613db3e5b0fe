use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin of the portfolio backend, without a trailing slash.
    pub base_url: String,
    /// Where the bearer token is persisted between runs.
    pub token_file: PathBuf,
}

impl ApiConfig {
    pub fn new(base_url: &str, token_file: impl Into<PathBuf>) -> Self {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            panic!("API origin must not be empty");
        }

        Self {
            base_url,
            token_file: token_file.into(),
        }
    }

    /// Load client configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let base_url =
            env::var("PORTFOLIO_API_URL").unwrap_or_else(|_| "http://localhost:5001".to_string());

        let token_file =
            env::var("PORTFOLIO_TOKEN_FILE").unwrap_or_else(|_| ".portfolio_token".to_string());

        Self::new(&base_url, token_file)
    }
}
