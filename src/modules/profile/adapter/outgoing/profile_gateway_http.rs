use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::profile::application::ports::outgoing::{
    ImageChange, ImageUpload, OwnerProfileData, ProfileGateway,
};
use crate::profile::domain::entities::ProfileDraft;
use crate::session::application::ports::outgoing::TokenStore;
use crate::shared::api::error::{rejection, GatewayError};

const PROFILE_PATH: &str = "/api/owner-profile";

#[derive(Deserialize)]
struct StatusMessage {
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct HttpProfileGateway {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpProfileGateway {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tokens,
        }
    }

    fn profile_url(&self) -> String {
        format!("{}{}", self.base_url, PROFILE_PATH)
    }

    // Token read fresh per call, same as the collection gateway
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ProfileGateway for HttpProfileGateway {
    async fn fetch(&self) -> Result<OwnerProfileData, GatewayError> {
        let response = self.http.get(self.profile_url()).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<OwnerProfileData>().await?)
    }

    async fn save(&self, draft: &ProfileDraft) -> Result<String, GatewayError> {
        let response = self
            .authorize(self.http.put(self.profile_url()))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.json::<StatusMessage>().await?;
        Ok(body.message)
    }

    async fn upload_image(&self, upload: ImageUpload) -> Result<ImageChange, GatewayError> {
        let part = Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = Form::new().part("profileImage", part);

        let response = self
            .authorize(self.http.post(format!("{}/upload-image", self.profile_url())))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<ImageChange>().await?)
    }

    async fn remove_image(&self) -> Result<ImageChange, GatewayError> {
        let response = self
            .authorize(self.http.delete(format!("{}/remove-image", self.profile_url())))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<ImageChange>().await?)
    }
}
