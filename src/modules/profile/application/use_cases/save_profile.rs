use async_trait::async_trait;
use tracing::info;

use crate::profile::application::ports::outgoing::ProfileGateway;
use crate::profile::application::profile_store::SharedProfile;
use crate::profile::application::use_cases::ProfileMutationError;
use crate::profile::domain::entities::ProfileDraft;

/// Persists a partial profile edit.
///
/// On success the submitted fields are merged into the store (the PUT
/// endpoint answers with a status message, not the document) and that
/// message is returned for display.
#[async_trait]
pub trait ISaveProfileUseCase: Send + Sync {
    async fn execute(&self, draft: ProfileDraft) -> Result<String, ProfileMutationError>;
}

#[derive(Clone)]
pub struct SaveProfileUseCase<G>
where
    G: ProfileGateway,
{
    gateway: G,
    store: SharedProfile,
}

impl<G> SaveProfileUseCase<G>
where
    G: ProfileGateway,
{
    pub fn new(gateway: G, store: SharedProfile) -> Self {
        Self { gateway, store }
    }
}

#[async_trait]
impl<G> ISaveProfileUseCase for SaveProfileUseCase<G>
where
    G: ProfileGateway,
{
    async fn execute(&self, draft: ProfileDraft) -> Result<String, ProfileMutationError> {
        let message = self.gateway.save(&draft).await?;

        self.store.write().await.update(|profile| profile.apply(&draft));
        info!("Owner profile saved");

        Ok(message)
    }
}
