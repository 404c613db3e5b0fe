use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;

use crate::session::application::ports::outgoing::{AuthGateway, TokenStore};
use crate::session::application::session_state::SharedSession;
use crate::shared::api::error::GatewayError;

// ========================= Login Request =========================
/// Validated login credentials
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - guaranteed valid
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    /// Create a validated LoginRequest
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    // ------------------------
    // Validation helpers
    // ------------------------

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, LoginRequestError> {
        let password = password.trim();

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password.to_string())
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// The server refused the credentials; the text is its own message.
    #[error("{0}")]
    Rejected(String),

    #[error("Server error. Please try again later.")]
    Transport(String),

    #[error("Failed to persist session token: {0}")]
    TokenPersistence(String),
}

// ====================== Login Use Case ==========================
/// Exchanges credentials for a bearer token, persists it and switches the
/// session into admin mode. Nothing is touched on failure; the caller may
/// simply resubmit.
#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<String, LoginError>;
}

#[derive(Clone)]
pub struct LoginUseCase<G>
where
    G: AuthGateway,
{
    gateway: G,
    tokens: Arc<dyn TokenStore>,
    session: SharedSession,
}

impl<G> LoginUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: G, tokens: Arc<dyn TokenStore>, session: SharedSession) -> Self {
        Self {
            gateway,
            tokens,
            session,
        }
    }
}

#[async_trait]
impl<G> ILoginUseCase for LoginUseCase<G>
where
    G: AuthGateway,
{
    async fn execute(&self, request: LoginRequest) -> Result<String, LoginError> {
        let token = self
            .gateway
            .login(request.email(), request.password())
            .await
            .map_err(|err| match err {
                GatewayError::Rejected { message, .. } => LoginError::Rejected(message),
                GatewayError::Transport(msg) => LoginError::Transport(msg),
            })?;

        self.tokens
            .save(&token)
            .map_err(|err| LoginError::TokenPersistence(err.to_string()))?;

        self.session.write().await.set_admin(true);
        info!("Admin session established");

        Ok(token)
    }
}
