use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::profile::application::ports::outgoing::{ImageUpload, ProfileGateway};
use crate::profile::application::profile_store::SharedProfile;
use crate::profile::application::use_cases::ProfileMutationError;
use crate::profile::domain::image_url;

/// Replaces the profile image via the multipart upload endpoint.
///
/// The backend answers with the new stored URL; both display slots are
/// rewritten through the cache-busting resolution so the old asset is not
/// served from cache. Returns the backend's status message.
#[async_trait]
pub trait IUploadImageUseCase: Send + Sync {
    async fn execute(&self, upload: ImageUpload) -> Result<String, ProfileMutationError>;
}

#[derive(Clone)]
pub struct UploadImageUseCase<G>
where
    G: ProfileGateway,
{
    gateway: G,
    store: SharedProfile,
    origin: String,
}

impl<G> UploadImageUseCase<G>
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
impl<G> IUploadImageUseCase for UploadImageUseCase<G>
where
    G: ProfileGateway,
{
    async fn execute(&self, upload: ImageUpload) -> Result<String, ProfileMutationError> {
        let change = self.gateway.upload_image(upload).await?;

        let fresh = image_url::resolve_fresh(
            &self.origin,
            &change.profile_image_url,
            Utc::now().timestamp_millis(),
        );
        self.store.write().await.update(|profile| {
            profile.profile_image_url = fresh.clone();
            profile.hero_image_url = fresh.clone();
        });
        info!("Profile image replaced");

        Ok(change.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::profile::application::ports::outgoing::{ImageChange, OwnerProfileData};
    use crate::profile::application::profile_store::ProfileStore;
    use crate::profile::domain::entities::{OwnerProfile, ProfileDraft};
    use crate::shared::api::error::GatewayError;

    struct MockProfileGateway {
        upload_result: Result<ImageChange, GatewayError>,
    }

    #[async_trait]
    impl ProfileGateway for MockProfileGateway {
        async fn fetch(&self) -> Result<OwnerProfileData, GatewayError> {
            unimplemented!("Not used in this test")
        }

        async fn save(&self, _draft: &ProfileDraft) -> Result<String, GatewayError> {
            unimplemented!("Not used in this test")
        }

        async fn upload_image(&self, _upload: ImageUpload) -> Result<ImageChange, GatewayError> {
            self.upload_result.clone()
        }

        async fn remove_image(&self) -> Result<ImageChange, GatewayError> {
            unimplemented!("Not used in this test")
        }
    }

    fn upload() -> ImageUpload {
        ImageUpload {
            file_name: "me.png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn accepted_upload_rewrites_both_slots_with_a_cache_buster() {
        // Arrange
        let store = ProfileStore::shared();
        let gateway = MockProfileGateway {
            upload_result: Ok(ImageChange {
                profile_image_url: "/uploads/me.png".to_string(),
                message: "Image uploaded successfully".to_string(),
            }),
        };
        let use_case =
            UploadImageUseCase::new(gateway, Arc::clone(&store), "http://localhost:5001");

        // Act
        let message = use_case.execute(upload()).await.unwrap();

        // Assert
        assert_eq!(message, "Image uploaded successfully");

        let store = store.read().await;
        let profile = store.profile();
        assert!(profile
            .profile_image_url
            .starts_with("http://localhost:5001/uploads/me.png?t="));
        assert_eq!(profile.hero_image_url, profile.profile_image_url);
    }

    #[tokio::test]
    async fn rejected_upload_leaves_the_profile_unchanged() {
        let store = ProfileStore::shared();
        let gateway = MockProfileGateway {
            upload_result: Err(GatewayError::Rejected {
                status: 413,
                message: "File too large".to_string(),
            }),
        };
        let use_case =
            UploadImageUseCase::new(gateway, Arc::clone(&store), "http://localhost:5001");

        let result = use_case.execute(upload()).await;

        match result {
            Err(ProfileMutationError::Rejected(msg)) => assert_eq!(msg, "File too large"),
            other => panic!("Expected Rejected, got {:?}", other),
        }
        assert_eq!(store.read().await.profile(), &OwnerProfile::placeholder());
    }
}
