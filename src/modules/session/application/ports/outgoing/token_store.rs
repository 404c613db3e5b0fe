/// Persistent home of the bearer token, the client-storage counterpart of
/// the browser's well-known key.
///
/// The token is deliberately never cached in memory: callers read it fresh,
/// so a login or logout elsewhere takes effect on the next call.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    fn clear(&self) -> Result<(), TokenStoreError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenStoreError {
    #[error("token storage error: {0}")]
    Storage(String),
}
