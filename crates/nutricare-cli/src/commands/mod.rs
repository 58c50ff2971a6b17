//! Subcommand implementations.

pub(crate) mod classify;
pub(crate) mod info;
pub(crate) mod inspect;
pub(crate) mod options;
pub(crate) mod validate;

use crate::error::Result;
use crate::ArtifactArgs;
use nutricare::artifact::ArtifactSet;

impl ArtifactArgs {
    /// Human-readable artifact source.
    pub(crate) fn describe(&self) -> String {
        match &self.bundle {
            Some(bundle) => bundle.display().to_string(),
            None => format!("{} + {}", self.scaler.display(), self.model.display()),
        }
    }

    /// Loads and validates the configured artifacts.
    pub(crate) fn load(&self) -> Result<ArtifactSet> {
        let set = match &self.bundle {
            Some(bundle) => ArtifactSet::load_bundle(bundle)?,
            None => ArtifactSet::load(&self.scaler, &self.model)?,
        };
        Ok(set)
    }
}
