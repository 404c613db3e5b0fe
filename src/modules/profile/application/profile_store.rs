use std::sync::Arc;

use tokio::sync::RwLock;

use crate::profile::domain::entities::OwnerProfile;

/// Singleton counterpart of the collection stores: the last
/// server-confirmed profile plus a version counter for pull-style change
/// detection.
#[derive(Debug)]
pub struct ProfileStore {
    profile: OwnerProfile,
    version: u64,
}

pub type SharedProfile = Arc<RwLock<ProfileStore>>;

impl ProfileStore {
    pub fn shared() -> SharedProfile {
        Arc::new(RwLock::new(Self {
            profile: OwnerProfile::placeholder(),
            version: 0,
        }))
    }

    pub fn profile(&self) -> &OwnerProfile {
        &self.profile
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn replace(&mut self, profile: OwnerProfile) {
        self.profile = profile;
        self.version += 1;
    }

    pub(crate) fn update(&mut self, mutate: impl FnOnce(&mut OwnerProfile)) {
        mutate(&mut self.profile);
        self.version += 1;
    }
}
