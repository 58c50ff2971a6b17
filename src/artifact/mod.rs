//! Versioned model artifacts: fitted scaler, representative points, and the
//! cluster label map.
//!
//! Artifacts are produced offline and loaded read-only. Every load checks the
//! declared feature schema against the encoder's [`FEATURE_NAMES`] and fails
//! fast with `SchemaMismatch`; nothing is truncated or padded.
//!
//! # File formats (JSON)
//!
//! ```text
//! scaler:          { "schema_version": 1, "feature_names": [..14],
//!                    "mean": [..14], "scale": [..14],
//!                    "with_mean": true, "with_std": true }
//! representatives: { "schema_version": 1, "feature_names": [..14],
//!                    "clusters": [[[..14], ..], ..],
//!                    "cluster_labels": ["adequate", ..] }      (optional)
//! bundle:          { "schema_version": 1, "feature_names": [..14],
//!                    "scaler": { "mean": .., "scale": .. },
//!                    "clusters": .., "cluster_labels": .. }
//! ```

mod store;

pub use store::ArtifactStore;

use crate::cluster::{Classification, NearestRepresentative, RepresentativeSet};
use crate::error::{NutricareError, Result};
use crate::intervention::{NutritionStatus, CANONICAL_CLUSTER_LABELS};
use crate::preprocessing::{ScalerParameters, StandardScaler};
use crate::questionnaire::{
    check_feature_names, FeatureVector, FEATURE_COUNT, FEATURE_NAMES, SCHEMA_VERSION,
};
use crate::traits::Transformer;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

fn current_version() -> u32 {
    SCHEMA_VERSION
}

/// On-disk form of the fitted scaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    /// Feature schema version the scaler was fitted against
    #[serde(default = "current_version")]
    pub schema_version: u32,
    /// Feature order of `mean` and `scale`
    pub feature_names: Vec<String>,
    /// Fitted parameters
    #[serde(flatten)]
    pub parameters: ScalerParameters,
}

/// On-disk form of the representative points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativeArtifact {
    /// Feature schema version the clustering ran on
    #[serde(default = "current_version")]
    pub schema_version: u32,
    /// Feature order of every point
    pub feature_names: Vec<String>,
    /// `clusters[cluster][point][feature]`, in scaled space
    pub clusters: Vec<Vec<Vec<f64>>>,
    /// Status of each cluster index; canonical v1 mapping when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_labels: Option<Vec<NutritionStatus>>,
}

/// Single-file form holding every artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    /// Feature schema version
    #[serde(default = "current_version")]
    pub schema_version: u32,
    /// Feature order shared by the scaler and the points
    pub feature_names: Vec<String>,
    /// Fitted scaler parameters
    pub scaler: ScalerParameters,
    /// `clusters[cluster][point][feature]`, in scaled space
    pub clusters: Vec<Vec<Vec<f64>>>,
    /// Status of each cluster index; canonical v1 mapping when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_labels: Option<Vec<NutritionStatus>>,
}

fn check_version(found: u32) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(NutricareError::UnsupportedSchemaVersion {
            found,
            supported: SCHEMA_VERSION,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        std::fs::read_to_string(path).map_err(|e| NutricareError::artifact_load(path, e))?;
    serde_json::from_str(&text).map_err(|e| NutricareError::artifact_load(path, e))
}

impl ScalerArtifact {
    /// Checks the schema declaration and builds the scaler.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSchemaVersion`, `SchemaMismatch`, or the
    /// parameter errors of [`StandardScaler::from_parameters`].
    pub fn into_scaler(self) -> Result<StandardScaler> {
        check_version(self.schema_version)?;
        check_feature_names(&self.feature_names)?;
        StandardScaler::try_from(self.parameters)
    }
}

impl RepresentativeArtifact {
    /// Checks the schema declaration and builds the point set.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSchemaVersion`, `SchemaMismatch`, or the
    /// construction errors of [`RepresentativeSet::from_points`].
    pub fn into_parts(self) -> Result<(RepresentativeSet, Option<Vec<NutritionStatus>>)> {
        check_version(self.schema_version)?;
        check_feature_names(&self.feature_names)?;
        Ok((
            RepresentativeSet::from_points(self.clusters)?,
            self.cluster_labels,
        ))
    }
}

/// A validated, mutually consistent set of artifacts.
///
/// Holding an `ArtifactSet` guarantees that the scaler, the representative
/// points, and the label map were fitted against the same feature schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSet {
    classifier: NearestRepresentative<StandardScaler>,
    cluster_labels: Vec<NutritionStatus>,
}

impl ArtifactSet {
    /// Validates and combines the artifacts.
    ///
    /// Without `cluster_labels` the canonical v1 mapping is used.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if the scaler or the points are not
    /// [`FEATURE_COUNT`] wide, or if the label map does not cover exactly the
    /// loaded groups; `EmptyClusterSet` or `EmptyCluster` for missing points.
    pub fn new(
        scaler: StandardScaler,
        representatives: RepresentativeSet,
        cluster_labels: Option<Vec<NutritionStatus>>,
    ) -> Result<Self> {
        if scaler.n_features() != FEATURE_COUNT {
            return Err(NutricareError::schema_mismatch(
                "scaler.n_features",
                FEATURE_COUNT,
                scaler.n_features(),
            ));
        }
        let classifier = NearestRepresentative::new(scaler, representatives)?;
        let n_clusters = classifier.representatives().n_clusters();
        let cluster_labels = cluster_labels.unwrap_or_else(|| CANONICAL_CLUSTER_LABELS.to_vec());
        if cluster_labels.len() != n_clusters {
            return Err(NutricareError::schema_mismatch(
                "cluster_labels.len",
                n_clusters,
                cluster_labels.len(),
            ));
        }
        debug!(
            n_clusters,
            n_points = classifier.representatives().n_points(),
            "artifact set validated"
        );
        Ok(Self {
            classifier,
            cluster_labels,
        })
    }

    /// Builds an artifact set from a deserialized bundle.
    ///
    /// # Errors
    ///
    /// Same as [`ArtifactSet::new`], plus `UnsupportedSchemaVersion` and
    /// `SchemaMismatch` for the bundle's schema declaration.
    pub fn from_bundle(bundle: ModelBundle) -> Result<Self> {
        check_version(bundle.schema_version)?;
        check_feature_names(&bundle.feature_names)?;
        let scaler = StandardScaler::try_from(bundle.scaler)?;
        let representatives = RepresentativeSet::from_points(bundle.clusters)?;
        Self::new(scaler, representatives, bundle.cluster_labels)
    }

    /// Loads the scaler and the representative points from separate files.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactLoad` if a file is missing or not valid JSON, and the
    /// validation errors of [`ArtifactSet::new`].
    pub fn load(
        scaler_path: impl AsRef<Path>,
        representatives_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let scaler_path = scaler_path.as_ref();
        let representatives_path = representatives_path.as_ref();
        let scaler = read_json::<ScalerArtifact>(scaler_path)?.into_scaler()?;
        let (representatives, labels) =
            read_json::<RepresentativeArtifact>(representatives_path)?.into_parts()?;
        let set = Self::new(scaler, representatives, labels)?;
        info!(
            scaler = %scaler_path.display(),
            representatives = %representatives_path.display(),
            n_clusters = set.n_clusters(),
            "loaded artifacts"
        );
        Ok(set)
    }

    /// Loads every artifact from one bundle file.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactLoad` if the file is missing or not valid JSON, and
    /// the validation errors of [`ArtifactSet::from_bundle`].
    pub fn load_bundle(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let set = Self::from_bundle(read_json(path)?)?;
        info!(
            bundle = %path.display(),
            n_clusters = set.n_clusters(),
            "loaded artifact bundle"
        );
        Ok(set)
    }

    /// Serializable bundle holding this set.
    #[must_use]
    pub fn to_bundle(&self) -> ModelBundle {
        ModelBundle {
            schema_version: SCHEMA_VERSION,
            feature_names: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
            scaler: self.scaler().clone().into(),
            clusters: self.representatives().to_points(),
            cluster_labels: Some(self.cluster_labels.clone()),
        }
    }

    /// Classifies one encoded subject.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector is not [`FEATURE_COUNT`]
    /// wide, or `NonFiniteFeature` for NaN or infinite values.
    pub fn classify(&self, features: &FeatureVector) -> Result<Classification> {
        self.classifier.classify(features)
    }

    /// Status of a cluster index under this artifact's label map.
    #[must_use]
    pub fn status_of(&self, cluster: usize) -> Option<NutritionStatus> {
        self.cluster_labels.get(cluster).copied()
    }

    /// Feature schema version.
    #[must_use]
    pub fn schema_version(&self) -> u32 {
        SCHEMA_VERSION
    }

    /// Number of cluster groups.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.classifier.representatives().n_clusters()
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        self.classifier.scaler()
    }

    /// The representative points.
    #[must_use]
    pub fn representatives(&self) -> &RepresentativeSet {
        self.classifier.representatives()
    }

    /// Cluster index → status map.
    #[must_use]
    pub fn cluster_labels(&self) -> &[NutritionStatus] {
        &self.cluster_labels
    }
}
