pub mod add_entry;
pub mod refresh_collection;
pub mod remove_entry;
pub mod update_entry;

use crate::shared::api::error::GatewayError;

/// Failure surfaced by a mutating collection operation. The text is what
/// the view layer should show; the store is guaranteed untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MutationError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),
}

impl From<GatewayError> for MutationError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => MutationError::Rejected(message),
            GatewayError::Transport(msg) => MutationError::Transport(msg),
        }
    }
}
