use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;

use crate::contact::application::ports::outgoing::ContactGateway;
use crate::shared::api::error::GatewayError;

// ========================= Contact Message =========================
/// Validated visitor message from the contact form
#[derive(Debug, Clone)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl ContactMessage {
    pub fn new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, ContactMessageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactMessageError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(ContactMessageError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(ContactMessageError::InvalidEmailFormat);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(ContactMessageError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ====================== Send Message ==========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum SendMessageError {
    /// The server rejected the submission; the text is its own message.
    #[error("{0}")]
    Rejected(String),

    #[error("Could not connect to the server.")]
    Transport(String),
}

/// Submits a contact-form message; returns the status line to show the
/// visitor. Nothing is stored client-side.
#[async_trait]
pub trait ISendContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage) -> Result<String, SendMessageError>;
}

#[derive(Clone)]
pub struct SendContactMessageUseCase<G>
where
    G: ContactGateway,
{
    gateway: G,
}

impl<G> SendContactMessageUseCase<G>
where
    G: ContactGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ISendContactMessageUseCase for SendContactMessageUseCase<G>
where
    G: ContactGateway,
{
    async fn execute(&self, message: ContactMessage) -> Result<String, SendMessageError> {
        let status = self.gateway.send(&message).await.map_err(|err| match err {
            GatewayError::Rejected { message, .. } => SendMessageError::Rejected(message),
            GatewayError::Transport(msg) => SendMessageError::Transport(msg),
        })?;

        info!("Contact message sent");

        if status.is_empty() {
            Ok("Message sent successfully!".to_string())
        } else {
            Ok(status)
        }
    }
}
