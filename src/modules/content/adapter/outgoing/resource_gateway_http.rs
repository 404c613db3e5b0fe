use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::content::application::ports::outgoing::ResourceGateway;
use crate::content::domain::resource::{ResourceDraft, ResourceKind};
use crate::session::application::ports::outgoing::TokenStore;
use crate::shared::api::error::{rejection, GatewayError};

/// REST adapter shared by every collection kind; the kind supplies its
/// path, the adapter supplies verbs, JSON bodies and the bearer header.
pub struct HttpResourceGateway<E> {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    _kind: PhantomData<fn() -> E>,
}

impl<E> Clone for HttpResourceGateway<E> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            tokens: Arc::clone(&self.tokens),
            _kind: PhantomData,
        }
    }
}

impl<E: ResourceKind> HttpResourceGateway<E> {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tokens,
            _kind: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, E::COLLECTION_PATH)
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, E::COLLECTION_PATH, id)
    }

    /// The token is read from storage at call time, so a login or logout
    /// that happened elsewhere is picked up by the very next request. The
    /// server stays the sole arbiter of authorization: without a token the
    /// request simply goes out bare.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl<E: ResourceKind> ResourceGateway<E> for HttpResourceGateway<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, GatewayError> {
        let response = self.http.get(self.collection_url()).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<Vec<E>>().await?)
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, GatewayError> {
        let response = self
            .authorize(self.http.post(self.collection_url()))
            .json(&draft.to_payload())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<E>().await?)
    }

    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, GatewayError> {
        let response = self
            .authorize(self.http.put(self.entry_url(id)))
            .json(&draft.to_payload())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json::<E>().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .authorize(self.http.delete(self.entry_url(id)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(())
    }
}
