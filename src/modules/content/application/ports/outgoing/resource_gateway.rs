use async_trait::async_trait;

use crate::content::domain::resource::ResourceKind;
use crate::shared::api::error::GatewayError;

/// Remote collection endpoint for one resource kind.
///
/// The server owns the data; every success returns its canonical record(s),
/// which are the only values ever written into a store.
#[async_trait]
pub trait ResourceGateway<E: ResourceKind>: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<E>, GatewayError>;

    /// Create from a draft; returns the record with its server-assigned id.
    async fn create(&self, draft: &E::Draft) -> Result<E, GatewayError>;

    async fn update(&self, id: &str, draft: &E::Draft) -> Result<E, GatewayError>;

    async fn remove(&self, id: &str) -> Result<(), GatewayError>;
}
