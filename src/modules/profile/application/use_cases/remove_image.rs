use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::content::application::ports::outgoing::ConfirmPrompt;
use crate::profile::application::ports::outgoing::ProfileGateway;
use crate::profile::application::profile_store::SharedProfile;
use crate::profile::application::use_cases::ProfileMutationError;
use crate::profile::domain::image_url;

/// Outcome of an image-removal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRemoval {
    /// Carries the backend's status message.
    Removed(String),
    /// The confirmation prompt was declined; no request was issued.
    Cancelled,
}

/// Removes the uploaded profile image, gated by an explicit confirmation.
///
/// The backend answers with the URL it falls back to (typically a
/// placeholder); both display slots are rewritten through the
/// cache-busting resolution.
#[async_trait]
pub trait IRemoveImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<ImageRemoval, ProfileMutationError>;
}

#[derive(Clone)]
pub struct RemoveImageUseCase<G>
where
    G: ProfileGateway,
{
    gateway: G,
    store: SharedProfile,
    origin: String,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl<G> RemoveImageUseCase<G>
where
    G: ProfileGateway,
{
    pub fn new(
        gateway: G,
        store: SharedProfile,
        origin: impl Into<String>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            gateway,
            store,
            origin: origin.into(),
            prompt,
        }
    }
}

#[async_trait]
impl<G> IRemoveImageUseCase for RemoveImageUseCase<G>
where
    G: ProfileGateway,
{
    async fn execute(&self) -> Result<ImageRemoval, ProfileMutationError> {
        if !self
            .prompt
            .confirm("Are you sure you want to remove the profile image?")
        {
            return Ok(ImageRemoval::Cancelled);
        }

        let change = self.gateway.remove_image().await?;

        let fresh = image_url::resolve_fresh(
            &self.origin,
            &change.profile_image_url,
            Utc::now().timestamp_millis(),
        );
        self.store.write().await.update(|profile| {
            profile.profile_image_url = fresh.clone();
            profile.hero_image_url = fresh.clone();
        });
        info!("Profile image removed");

        Ok(ImageRemoval::Removed(change.message))
    }
}
