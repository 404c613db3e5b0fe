use async_trait::async_trait;

use crate::shared::api::error::GatewayError;

/// Authentication endpoint of the backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<String, GatewayError>;
}
