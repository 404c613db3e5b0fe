pub mod load_profile;
pub mod remove_image;
pub mod save_profile;
pub mod upload_image;

use crate::shared::api::error::GatewayError;

/// Failure surfaced by a mutating profile operation. The profile store is
/// guaranteed untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileMutationError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),
}

impl From<GatewayError> for ProfileMutationError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => ProfileMutationError::Rejected(message),
            GatewayError::Transport(msg) => ProfileMutationError::Transport(msg),
        }
    }
}
