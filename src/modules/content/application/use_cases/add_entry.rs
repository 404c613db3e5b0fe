use async_trait::async_trait;
use tracing::info;

use crate::content::application::ports::outgoing::ResourceGateway;
use crate::content::application::store::SharedStore;
use crate::content::application::use_cases::MutationError;
use crate::content::domain::resource::ResourceKind;

/// Creates a new entry from a draft.
///
/// The server-returned canonical record (with its assigned id) is appended
/// at the tail of the collection; on failure the collection is untouched.
#[async_trait]
pub trait IAddEntryUseCase<E: ResourceKind>: Send + Sync {
    async fn execute(&self, draft: E::Draft) -> Result<E, MutationError>;
}

#[derive(Clone)]
pub struct AddEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    gateway: G,
    store: SharedStore<E>,
}

impl<G, E> AddEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    pub fn new(gateway: G, store: SharedStore<E>) -> Self {
        Self { gateway, store }
    }
}

#[async_trait]
impl<G, E> IAddEntryUseCase<E> for AddEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    async fn execute(&self, draft: E::Draft) -> Result<E, MutationError> {
        let created = self.gateway.create(&draft).await?;

        self.store.write().await.push(created.clone());
        info!("Added {} {}", E::LABEL, created.id());

        Ok(created)
    }
}
