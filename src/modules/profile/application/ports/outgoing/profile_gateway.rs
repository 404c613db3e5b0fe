use async_trait::async_trait;
use serde::Deserialize;

use crate::profile::domain::entities::ProfileDraft;
use crate::shared::api::error::GatewayError;

/// Profile document as the backend returns it: one stored image URL, which
/// the client fans out to both display slots.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfileData {
    #[serde(default)]
    pub profile_image_url: String,
    pub name: String,
    pub profession: String,
    #[serde(default)]
    pub mission_statement: String,
    #[serde(default)]
    pub about_me_paragraph_1: String,
    #[serde(default)]
    pub about_me_paragraph_2: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_linked_in: String,
}

/// Result of an image upload or removal: the new canonical URL plus the
/// backend's status message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageChange {
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub message: String,
}

/// Raw image bytes submitted as the multipart `profileImage` field.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The backend's owner-profile endpoints.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn fetch(&self) -> Result<OwnerProfileData, GatewayError>;

    /// Persist a partial edit; returns the backend's status message.
    async fn save(&self, draft: &ProfileDraft) -> Result<String, GatewayError>;

    async fn upload_image(&self, upload: ImageUpload) -> Result<ImageChange, GatewayError>;

    async fn remove_image(&self) -> Result<ImageChange, GatewayError>;
}
