use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::content::application::ports::outgoing::{ConfirmPrompt, ResourceGateway};
use crate::content::domain::resource::ResourceKind;
use crate::profile::application::ports::outgoing::{
    ImageChange, ImageUpload, OwnerProfileData, ProfileGateway,
};
use crate::profile::domain::entities::ProfileDraft;
use crate::session::application::ports::outgoing::auth_gateway::AuthGateway;
use crate::session::application::ports::outgoing::token_store::{TokenStore, TokenStoreError};
use crate::shared::api::error::GatewayError;

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

pub struct StubAuthGateway {
    pub result: Result<String, GatewayError>,
}

#[async_trait]
impl AuthGateway for StubAuthGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<String, GatewayError> {
        self.result.clone()
    }
}

/// Scripted collection gateway. Operations a test did not script panic
/// loudly; used through `Arc` so call counts stay observable.
pub struct StubResourceGateway<E: ResourceKind> {
    fetch_all: Option<Result<Vec<E>, GatewayError>>,
    create: Option<Result<E, GatewayError>>,
    update: Option<Result<E, GatewayError>>,
    remove: Option<Result<(), GatewayError>>,
    pub remove_calls: AtomicUsize,
}

impl<E: ResourceKind> StubResourceGateway<E> {
    pub fn new() -> Self {
        Self {
            fetch_all: None,
            create: None,
            update: None,
            remove: None,
            remove_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetching(mut self, result: Result<Vec<E>, GatewayError>) -> Self {
        self.fetch_all = Some(result);
        self
    }

    pub fn creating(mut self, result: Result<E, GatewayError>) -> Self {
        self.create = Some(result);
        self
    }

    pub fn updating(mut self, result: Result<E, GatewayError>) -> Self {
        self.update = Some(result);
        self
    }

    pub fn removing(mut self, result: Result<(), GatewayError>) -> Self {
        self.remove = Some(result);
        self
    }
}

#[async_trait]
impl<E: ResourceKind> ResourceGateway<E> for Arc<StubResourceGateway<E>> {
    async fn fetch_all(&self) -> Result<Vec<E>, GatewayError> {
        self.fetch_all.clone().expect("fetch_all not scripted")
    }

    async fn create(&self, _draft: &E::Draft) -> Result<E, GatewayError> {
        self.create.clone().expect("create not scripted")
    }

    async fn update(&self, _id: &str, _draft: &E::Draft) -> Result<E, GatewayError> {
        self.update.clone().expect("update not scripted")
    }

    async fn remove(&self, _id: &str) -> Result<(), GatewayError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        self.remove.clone().expect("remove not scripted")
    }
}

pub struct StubConfirmPrompt {
    accept: bool,
    pub questions: Mutex<Vec<String>>,
}

impl StubConfirmPrompt {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            accept: false,
            questions: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for StubConfirmPrompt {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.accept
    }
}

pub struct StubProfileGateway {
    pub fetch_result: Result<OwnerProfileData, GatewayError>,
}

#[async_trait]
impl ProfileGateway for StubProfileGateway {
    async fn fetch(&self) -> Result<OwnerProfileData, GatewayError> {
        self.fetch_result.clone()
    }

    async fn save(&self, _draft: &ProfileDraft) -> Result<String, GatewayError> {
        unimplemented!("Not used in this test")
    }

    async fn upload_image(&self, _upload: ImageUpload) -> Result<ImageChange, GatewayError> {
        unimplemented!("Not used in this test")
    }

    async fn remove_image(&self) -> Result<ImageChange, GatewayError> {
        unimplemented!("Not used in this test")
    }
}
