//! Nearest-representative-point classification.
//!
//! Clusters were produced offline by CURE, which summarizes each cluster by a
//! handful of well-scattered representative points (already in scaled
//! space). A new subject belongs to the cluster whose nearest representative
//! point is closest.
//!
//! # Algorithm
//!
//! 1. Scale the feature vector with the fitted scaler
//! 2. For each group, take the minimum Euclidean distance to its points
//! 3. Return the group with the smallest minimum (lowest index on ties)
//!
//! # Example
//!
//! ```
//! use nutricare::cluster::{classify, RepresentativeSet};
//! use nutricare::preprocessing::StandardScaler;
//! use nutricare::questionnaire::FeatureVector;
//!
//! let reps = RepresentativeSet::from_points(vec![
//!     vec![vec![0.0, 0.0], vec![0.5, 0.5]],
//!     vec![vec![5.0, 5.0]],
//! ]).expect("consistent widths");
//! let scaler = StandardScaler::from_parameters(vec![0.0, 0.0], vec![1.0, 1.0])
//!     .expect("valid");
//!
//! let result = classify(&FeatureVector::new(vec![4.0, 4.0]), &scaler, &reps)
//!     .expect("matching widths");
//! assert_eq!(result.cluster, 1);
//! ```

use crate::error::{NutricareError, Result};
use crate::primitives::Matrix;
use crate::questionnaire::FeatureVector;
use crate::traits::Transformer;
use serde::Serialize;
use tracing::trace;

/// Representative points of every cluster, indexed 0..n_clusters.
///
/// Each group is a matrix with one representative point per row. Groups
/// share a single width. Emptiness is reported by [`classify`] and by
/// [`NearestRepresentative::new`], not here, so synthetic sets can be built
/// freely.
#[derive(Debug, Clone, PartialEq)]
pub struct RepresentativeSet {
    groups: Vec<Matrix<f64>>,
    dim: usize,
}

impl RepresentativeSet {
    /// Creates a set from per-group point matrices.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if non-empty groups disagree on width and
    /// `NonFiniteFeature` if any coordinate is NaN or infinite.
    pub fn new(groups: Vec<Matrix<f64>>) -> Result<Self> {
        let mut dim = None;
        for (cluster, group) in groups.iter().enumerate() {
            if group.is_empty() {
                continue;
            }
            match dim {
                None => dim = Some(group.n_cols()),
                Some(d) if d != group.n_cols() => {
                    return Err(NutricareError::dimension_mismatch(
                        &format!("cluster[{cluster}].point_dim"),
                        d,
                        group.n_cols(),
                    ));
                }
                Some(_) => {}
            }
            if let Some(i) = group.as_slice().iter().position(|v| !v.is_finite()) {
                return Err(NutricareError::NonFiniteFeature {
                    field: format!(
                        "cluster[{cluster}].point[{}][{}]",
                        i / group.n_cols(),
                        i % group.n_cols()
                    ),
                });
            }
        }
        Ok(Self {
            groups,
            dim: dim.unwrap_or(0),
        })
    }

    /// Creates a set from nested point lists (`groups[cluster][point][dim]`).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for ragged points, plus the errors of
    /// [`RepresentativeSet::new`].
    pub fn from_points(groups: Vec<Vec<Vec<f64>>>) -> Result<Self> {
        let matrices = groups
            .iter()
            .enumerate()
            .map(|(cluster, points)| {
                Matrix::from_rows(points).map_err(|e| NutricareError::DimensionMismatch {
                    expected: format!("cluster[{cluster}] rectangular points"),
                    actual: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(matrices)
    }

    /// Number of cluster groups.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Width of every representative point (0 if no group has points).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Points of one group.
    #[must_use]
    pub fn group(&self, cluster: usize) -> Option<&Matrix<f64>> {
        self.groups.get(cluster)
    }

    /// Iterates groups in index order.
    pub fn groups(&self) -> impl Iterator<Item = &Matrix<f64>> + '_ {
        self.groups.iter()
    }

    /// Total number of representative points.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.groups.iter().map(Matrix::n_rows).sum()
    }

    /// Mean of a group's representative points.
    ///
    /// Returns `None` for an unknown or empty group.
    #[must_use]
    pub fn group_mean(&self, cluster: usize) -> Option<Vec<f64>> {
        let group = self.groups.get(cluster).filter(|g| !g.is_empty())?;
        let n = group.n_rows() as f64;
        let mut mean = vec![0.0; group.n_cols()];
        for point in group.rows() {
            for (m, v) in mean.iter_mut().zip(point) {
                *m += v;
            }
        }
        Some(mean.into_iter().map(|m| m / n).collect())
    }

    /// Returns the points as nested vectors.
    #[must_use]
    pub fn to_points(&self) -> Vec<Vec<Vec<f64>>> {
        self.groups.iter().map(Matrix::to_rows).collect()
    }

    fn check_non_empty(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(NutricareError::EmptyClusterSet);
        }
        if let Some(cluster) = self.groups.iter().position(Matrix::is_empty) {
            return Err(NutricareError::EmptyCluster { cluster });
        }
        Ok(())
    }
}

/// Outcome of classifying one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Winning cluster index.
    pub cluster: usize,
    /// Distance from the scaled vector to the nearest representative point.
    pub distance: f64,
    /// Row of the nearest representative point within the winning group.
    pub nearest_point: usize,
    /// Minimum distance to every group, in index order.
    pub group_distances: Vec<f64>,
}

/// Euclidean distance between two equal-width points.
#[must_use]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Nearest point of one non-empty group: (row, distance).
fn nearest_in_group(x: &[f64], group: &Matrix<f64>) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (row, point) in group.rows().enumerate() {
        let d = euclidean_distance(x, point);
        if d < best.1 {
            best = (row, d);
        }
    }
    best
}

/// Assigns an already-scaled vector to its nearest group.
///
/// Groups are scanned in ascending index order and only a strictly smaller
/// distance replaces the current best, so ties go to the lowest index.
///
/// # Errors
///
/// Returns `EmptyClusterSet`, `EmptyCluster`, `DimensionMismatch` if the
/// vector width differs from the point width, or `NonFiniteFeature` if the
/// vector holds NaN or infinite values.
pub fn nearest_group(scaled: &[f64], reps: &RepresentativeSet) -> Result<Classification> {
    reps.check_non_empty()?;
    if scaled.len() != reps.dim() {
        return Err(NutricareError::dimension_mismatch(
            "point_dim",
            reps.dim(),
            scaled.len(),
        ));
    }
    if let Some(i) = scaled.iter().position(|v| !v.is_finite()) {
        return Err(NutricareError::NonFiniteFeature {
            field: format!("scaled[{i}]"),
        });
    }

    let nearest: Vec<(usize, f64)> = reps
        .groups()
        .map(|group| nearest_in_group(scaled, group))
        .collect();

    let mut cluster = 0;
    for (i, (_, d)) in nearest.iter().enumerate().skip(1) {
        if *d < nearest[cluster].1 {
            cluster = i;
        }
    }
    let (nearest_point, distance) = nearest[cluster];
    trace!(cluster, distance, "nearest representative group");

    Ok(Classification {
        cluster,
        distance,
        nearest_point,
        group_distances: nearest.into_iter().map(|(_, d)| d).collect(),
    })
}

/// Scales a feature vector and assigns it to its nearest group.
///
/// Pure over its inputs: neither the scaler nor the representative set is
/// modified.
///
/// # Errors
///
/// Returns `EmptyClusterSet` if `reps` has no groups, `DimensionMismatch`
/// if the vector width disagrees with the scaler or the points, and the
/// other errors of [`nearest_group`].
pub fn classify<T: Transformer + ?Sized>(
    features: &FeatureVector,
    scaler: &T,
    reps: &RepresentativeSet,
) -> Result<Classification> {
    reps.check_non_empty()?;
    let scaled = scaler.transform(features.as_slice())?;
    nearest_group(&scaled, reps)
}

/// Classifier over an injected scaler and representative set.
///
/// Construction validates that the two artifacts agree, so classification
/// can only fail on the input vector.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestRepresentative<T> {
    scaler: T,
    reps: RepresentativeSet,
}

impl<T: Transformer> NearestRepresentative<T> {
    /// Pairs a fitted scaler with its representative points.
    ///
    /// # Errors
    ///
    /// Returns `EmptyClusterSet` or `EmptyCluster` for missing points, and
    /// `SchemaMismatch` if the scaler width differs from the point width.
    pub fn new(scaler: T, reps: RepresentativeSet) -> Result<Self> {
        reps.check_non_empty()?;
        if scaler.n_features() != reps.dim() {
            return Err(NutricareError::schema_mismatch(
                "scaler.n_features",
                scaler.n_features(),
                format!("point_dim={}", reps.dim()),
            ));
        }
        Ok(Self { scaler, reps })
    }

    /// Classifies one feature vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the vector width is wrong.
    pub fn classify(&self, features: &FeatureVector) -> Result<Classification> {
        classify(features, &self.scaler, &self.reps)
    }

    /// Input width.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &T {
        &self.scaler
    }

    /// The representative points.
    #[must_use]
    pub fn representatives(&self) -> &RepresentativeSet {
        &self.reps
    }
}

#[cfg(test)]
mod tests;

#[cfg(test)]
#[path = "tests_nearest_contract.rs"]
mod tests_nearest_contract;
