//! Process-wide artifact holder with atomic whole-set replacement.

use super::ArtifactSet;
use crate::error::Result;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Shares the current [`ArtifactSet`] between request threads.
///
/// Readers take an `Arc` snapshot and classify without holding the lock.
/// A reload swaps the whole set at once, so a request never sees a scaler
/// from one version next to representative points from another.
#[derive(Debug)]
pub struct ArtifactStore {
    current: RwLock<Arc<ArtifactSet>>,
}

impl ArtifactStore {
    /// Creates a store holding `set`.
    #[must_use]
    pub fn new(set: ArtifactSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// Current artifact set.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ArtifactSet> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the whole artifact set, returning the previous one.
    pub fn replace(&self, set: ArtifactSet) -> Arc<ArtifactSet> {
        let current = set.n_clusters();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(set));
        info!(previous = previous.n_clusters(), current, "replaced artifact set");
        previous
    }

    /// Loads a bundle and swaps it in. On failure the current set stays.
    ///
    /// # Errors
    ///
    /// Returns the load and validation errors of
    /// [`ArtifactSet::load_bundle`].
    pub fn reload_bundle(&self, path: impl AsRef<Path>) -> Result<Arc<ArtifactSet>> {
        let set = ArtifactSet::load_bundle(path)?;
        Ok(self.replace(set))
    }
}

impl From<ArtifactSet> for ArtifactStore {
    fn from(set: ArtifactSet) -> Self {
        Self::new(set)
    }
}
