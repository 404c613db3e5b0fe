use async_trait::async_trait;
use tracing::{info, warn};

use crate::content::application::ports::outgoing::ResourceGateway;
use crate::content::application::store::SharedStore;
use crate::content::application::use_cases::MutationError;
use crate::content::domain::resource::ResourceKind;

/// Rewrites one entry from a draft.
///
/// The server-returned record replaces the matching entry in place; every
/// other entry keeps its position and bytes. Failure leaves the collection
/// unchanged.
#[async_trait]
pub trait IUpdateEntryUseCase<E: ResourceKind>: Send + Sync {
    async fn execute(&self, id: &str, draft: E::Draft) -> Result<E, MutationError>;
}

#[derive(Clone)]
pub struct UpdateEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    gateway: G,
    store: SharedStore<E>,
}

impl<G, E> UpdateEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    pub fn new(gateway: G, store: SharedStore<E>) -> Self {
        Self { gateway, store }
    }
}

#[async_trait]
impl<G, E> IUpdateEntryUseCase<E> for UpdateEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    async fn execute(&self, id: &str, draft: E::Draft) -> Result<E, MutationError> {
        let updated = self.gateway.update(id, &draft).await?;

        if self.store.write().await.replace_by_id(id, updated.clone()) {
            info!("Updated {} {}", E::LABEL, id);
        } else {
            warn!("Updated {} {} is not present locally", E::LABEL, id);
        }

        Ok(updated)
    }
}
