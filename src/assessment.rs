//! End-to-end assessment: validate, encode, classify, and label one
//! questionnaire.
//!
//! # Example
//!
//! ```no_run
//! use nutricare::artifact::ArtifactSet;
//! use nutricare::assessment::Assessor;
//! use nutricare::questionnaire::RawQuestionnaire;
//!
//! let set = ArtifactSet::load("scaler.json", "cure_model.json")?;
//! let assessor = Assessor::from(set);
//! let raw = RawQuestionnaire::from_json(&std::fs::read_to_string("subject.json")?)?;
//! let assessment = assessor.assess_raw(&raw)?;
//! println!("{}", assessment.status.narrative());
//! # Ok::<(), nutricare::error::NutricareError>(())
//! ```

use crate::artifact::{ArtifactSet, ArtifactStore};
use crate::cluster::Classification;
use crate::error::{NutricareError, Result};
use crate::intervention::NutritionStatus;
use crate::questionnaire::{encode, FeatureVector, QuestionnaireRecord, RawQuestionnaire};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Result of assessing one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Subject name as entered
    pub name: String,
    /// Encoded (unscaled) feature vector
    pub features: FeatureVector,
    /// Nearest-group outcome
    pub classification: Classification,
    /// Status of the winning cluster
    pub status: NutritionStatus,
}

impl Assessment {
    /// Winning cluster index.
    #[must_use]
    pub fn cluster(&self) -> usize {
        self.classification.cluster
    }

    /// Intervention narrative for the assigned status.
    #[must_use]
    pub fn narrative(&self) -> &'static str {
        self.status.narrative()
    }
}

/// Runs the assessment pipeline against a shared [`ArtifactStore`].
///
/// Each call takes one snapshot of the artifacts, so a concurrent reload
/// never mixes versions within a single assessment.
#[derive(Debug, Clone)]
pub struct Assessor {
    store: Arc<ArtifactStore>,
}

impl Assessor {
    /// Creates an assessor over a shared store.
    #[must_use]
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for reloads.
    #[must_use]
    pub fn store(&self) -> &Arc<ArtifactStore> {
        &self.store
    }

    /// Assesses a typed record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` for records failing validation,
    /// `NonFiniteFeature` for NaN or infinite numerics, and `SchemaMismatch`
    /// if the loaded label map has no entry for the winning cluster.
    pub fn assess(&self, record: &QuestionnaireRecord) -> Result<Assessment> {
        record.validate()?;
        let features = encode(record)?;
        let set = self.store.snapshot();
        let classification = set.classify(&features)?;
        let status = set.status_of(classification.cluster).ok_or_else(|| {
            NutricareError::schema_mismatch(
                "cluster_labels.len",
                format!(">{}", classification.cluster),
                set.cluster_labels().len(),
            )
        })?;
        debug!(
            cluster = classification.cluster,
            distance = classification.distance,
            %status,
            "assessed subject"
        );
        Ok(Assessment {
            name: record.name.clone(),
            features,
            classification,
            status,
        })
    }

    /// Parses raw answers and assesses them.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for answers outside their label sets, plus
    /// the errors of [`Assessor::assess`].
    pub fn assess_raw(&self, raw: &RawQuestionnaire) -> Result<Assessment> {
        self.assess(&raw.parse()?)
    }
}

impl From<ArtifactSet> for Assessor {
    fn from(set: ArtifactSet) -> Self {
        Self::new(Arc::new(ArtifactStore::new(set)))
    }
}
