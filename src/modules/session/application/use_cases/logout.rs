use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::session::application::ports::outgoing::TokenStore;
use crate::session::application::session_state::SharedSession;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Failed to clear session token: {0}")]
    TokenPersistence(String),
}

/// Drops admin mode and removes the persisted token. Works entirely
/// locally, unconditionally; there is no server-side session to end.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    tokens: Arc<dyn TokenStore>,
    session: SharedSession,
}

impl LogoutUseCase {
    pub fn new(tokens: Arc<dyn TokenStore>, session: SharedSession) -> Self {
        Self { tokens, session }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self) -> Result<(), LogoutError> {
        // Admin mode ends even if removing the token file fails
        self.session.write().await.set_admin(false);

        self.tokens
            .clear()
            .map_err(|err| LogoutError::TokenPersistence(err.to_string()))?;

        info!("Admin session ended");
        Ok(())
    }
}
