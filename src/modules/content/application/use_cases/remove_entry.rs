use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::content::application::ports::outgoing::{ConfirmPrompt, ResourceGateway};
use crate::content::application::store::SharedStore;
use crate::content::application::use_cases::MutationError;
use crate::content::domain::resource::ResourceKind;

/// Outcome of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    /// The confirmation prompt was declined; no request was issued.
    Cancelled,
}

/// Deletes one entry, gated by an explicit confirmation step.
///
/// The request is only issued after the prompt is accepted; success removes
/// the matching entry and nothing else.
#[async_trait]
pub trait IRemoveEntryUseCase<E: ResourceKind>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<RemovalOutcome, MutationError>;
}

#[derive(Clone)]
pub struct RemoveEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    gateway: G,
    store: SharedStore<E>,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl<G, E> RemoveEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    pub fn new(gateway: G, store: SharedStore<E>, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            gateway,
            store,
            prompt,
        }
    }
}

#[async_trait]
impl<G, E> IRemoveEntryUseCase<E> for RemoveEntryUseCase<G, E>
where
    G: ResourceGateway<E>,
    E: ResourceKind,
{
    async fn execute(&self, id: &str) -> Result<RemovalOutcome, MutationError> {
        let question = format!("Are you sure you want to delete this {}?", E::LABEL);
        if !self.prompt.confirm(&question) {
            return Ok(RemovalOutcome::Cancelled);
        }

        self.gateway.remove(id).await?;

        self.store.write().await.remove_by_id(id);
        info!("Deleted {} {}", E::LABEL, id);

        Ok(RemovalOutcome::Removed)
    }
}
