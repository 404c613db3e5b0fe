use async_trait::async_trait;

use crate::contact::application::use_cases::send_message::ContactMessage;
use crate::shared::api::error::GatewayError;

/// The backend's contact-form endpoint.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Submit a visitor message; returns the backend's status message.
    async fn send(&self, message: &ContactMessage) -> Result<String, GatewayError>;
}
