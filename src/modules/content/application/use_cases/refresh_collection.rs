use async_trait::async_trait;
use tracing::error;

use crate::content::application::ports::outgoing::ResourceGateway;
use crate::content::application::store::SharedStore;
use crate::content::domain::resource::ResourceKind;

/// Replaces the in-memory collection with the server's current contents.
///
/// A failed fetch is logged and otherwise swallowed: the store keeps its
/// previous value (empty on first load) and the caller is not interrupted.
#[async_trait]
pub trait IRefreshCollectionUseCase<E: ResourceKind>: Send + Sync {
    async fn execute(&self);
}

#[derive(Clone)]
pub struct RefreshCollectionUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    gateway: G,
    store: SharedStore<E>,
}

impl<G, E> RefreshCollectionUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    pub fn new(gateway: G, store: SharedStore<E>) -> Self {
        Self { gateway, store }
    }
}

#[async_trait]
impl<G, E> IRefreshCollectionUseCase<E> for RefreshCollectionUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    async fn execute(&self) {
        match self.gateway.fetch_all().await {
            Ok(entries) => {
                self.store.write().await.replace_all(entries);
            }
            Err(err) => {
                error!("Failed to fetch {} collection: {}", E::LABEL, err);
            }
        }
    }
}
