use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::session::application::ports::outgoing::AuthGateway;
use crate::shared::api::error::{FailureBody, GatewayError};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Clone)]
pub struct HttpAuthGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&Credentials { email, password })
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.json::<TokenBody>().await?;
            return Ok(body.token);
        }

        let status = response.status().as_u16();
        let body = response.json::<FailureBody>().await.unwrap_or_default();
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string());

        Err(GatewayError::Rejected { status, message })
    }
}
