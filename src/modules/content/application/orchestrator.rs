use std::sync::Arc;

use crate::content::application::ports::outgoing::{ConfirmPrompt, ResourceGateway};
use crate::content::application::store::{CollectionStore, SharedStore};
use crate::content::application::use_cases::add_entry::{AddEntryUseCase, IAddEntryUseCase};
use crate::content::application::use_cases::refresh_collection::{
    IRefreshCollectionUseCase, RefreshCollectionUseCase,
};
use crate::content::application::use_cases::remove_entry::{
    IRemoveEntryUseCase, RemovalOutcome, RemoveEntryUseCase,
};
use crate::content::application::use_cases::update_entry::{
    IUpdateEntryUseCase, UpdateEntryUseCase,
};
use crate::content::application::use_cases::MutationError;
use crate::content::domain::resource::ResourceKind;

/// Everything one resource kind needs: the shared store and the four
/// operations that keep it synchronized with the backend.
///
/// The instances wired at startup are fully independent — an operation on
/// one kind never touches another kind's store.
#[derive(Clone)]
pub struct ResourceOrchestrator<G, E>
where
    G: ResourceGateway<E> + Clone,
    E: ResourceKind,
{
    store: SharedStore<E>,
    refresh: RefreshCollectionUseCase<G, E>,
    add: AddEntryUseCase<G, E>,
    update: UpdateEntryUseCase<G, E>,
    remove: RemoveEntryUseCase<G, E>,
}

impl<G, E> ResourceOrchestrator<G, E>
where
    G: ResourceGateway<E> + Clone,
    E: ResourceKind,
{
    pub fn new(gateway: G, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        let store: SharedStore<E> = CollectionStore::shared();

        Self {
            refresh: RefreshCollectionUseCase::new(gateway.clone(), Arc::clone(&store)),
            add: AddEntryUseCase::new(gateway.clone(), Arc::clone(&store)),
            update: UpdateEntryUseCase::new(gateway.clone(), Arc::clone(&store)),
            remove: RemoveEntryUseCase::new(gateway, Arc::clone(&store), prompt),
            store,
        }
    }

    pub fn store(&self) -> &SharedStore<E> {
        &self.store
    }

    pub async fn snapshot(&self) -> Vec<E> {
        self.store.read().await.entries().to_vec()
    }

    pub async fn version(&self) -> u64 {
        self.store.read().await.version()
    }

    pub async fn refresh(&self) {
        self.refresh.execute().await
    }

    pub async fn add(&self, draft: E::Draft) -> Result<E, MutationError> {
        self.add.execute(draft).await
    }

    pub async fn update(&self, id: &str, draft: E::Draft) -> Result<E, MutationError> {
        self.update.execute(id, draft).await
    }

    pub async fn remove(&self, id: &str) -> Result<RemovalOutcome, MutationError> {
        self.remove.execute(id).await
    }
}
