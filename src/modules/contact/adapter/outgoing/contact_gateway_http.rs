use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::contact::application::ports::outgoing::ContactGateway;
use crate::contact::application::use_cases::send_message::ContactMessage;
use crate::shared::api::error::{rejection, GatewayError};

#[derive(Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct StatusMessage {
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct HttpContactGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContactGateway {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn send(&self, message: &ContactMessage) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.base_url))
            .json(&ContactPayload {
                name: message.name(),
                email: message.email(),
                message: message.message(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.json::<StatusMessage>().await?;
        Ok(body.message)
    }
}
