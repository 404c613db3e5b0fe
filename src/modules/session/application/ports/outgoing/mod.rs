pub mod auth_gateway;
pub mod token_store;

pub use auth_gateway::AuthGateway;
pub use token_store::{TokenStore, TokenStoreError};
