use async_trait::async_trait;
use tracing::error;

use crate::profile::application::ports::outgoing::ProfileGateway;
use crate::profile::application::profile_store::SharedProfile;
use crate::profile::domain::entities::OwnerProfile;
use crate::profile::domain::image_url;

/// Fetches the owner profile and replaces the store with it.
///
/// The backend stores a single image URL; it is resolved against the API
/// origin and written into both display slots. A failed fetch is logged
/// and the placeholders stay up.
#[async_trait]
pub trait ILoadProfileUseCase: Send + Sync {
    async fn execute(&self);
}

#[derive(Clone)]
pub struct LoadProfileUseCase<G>
where
    G: ProfileGateway,
{
    gateway: G,
    store: SharedProfile,
    origin: String,
}

impl<G> LoadProfileUseCase<G>
where
    G: ProfileGateway,
{
    pub fn new(gateway: G, store: SharedProfile, origin: impl Into<String>) -> Self {
        Self {
            gateway,
            store,
            origin: origin.into(),
        }
    }
}

#[async_trait]
impl<G> ILoadProfileUseCase for LoadProfileUseCase<G>
where
    G: ProfileGateway,
{
    async fn execute(&self) {
        match self.gateway.fetch().await {
            Ok(data) => {
                let image_url = image_url::resolve(&self.origin, &data.profile_image_url);

                self.store.write().await.replace(OwnerProfile {
                    name: data.name,
                    profession: data.profession,
                    mission_statement: data.mission_statement,
                    about_me_paragraph_1: data.about_me_paragraph_1,
                    about_me_paragraph_2: data.about_me_paragraph_2,
                    profile_image_url: image_url.clone(),
                    hero_image_url: image_url,
                    contact_email: data.contact_email,
                    contact_phone: data.contact_phone,
                    contact_linked_in: data.contact_linked_in,
                });
            }
            Err(err) => {
                error!("Failed to fetch owner profile: {}", err);
            }
        }
    }
}
