use std::sync::Arc;

use tokio::sync::RwLock;

use super::ports::outgoing::TokenStore;

/// Admin flag for the running client.
///
/// Derived from token presence when the client starts; afterwards the login
/// and logout use cases are its only writers, everything else just reads
/// `is_admin` to decide whether to offer mutating affordances. The flag
/// never authorizes anything by itself — every write still carries the
/// token and the server has the last word.
#[derive(Debug, Default)]
pub struct SessionState {
    admin: bool,
}

pub type SharedSession = Arc<RwLock<SessionState>>;

impl SessionState {
    pub fn restore(tokens: &dyn TokenStore) -> SharedSession {
        Arc::new(RwLock::new(Self {
            admin: tokens.load().is_some(),
        }))
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub(crate) fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
    }
}
