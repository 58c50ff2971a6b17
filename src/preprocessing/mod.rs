//! Preprocessing transformers for fitted feature scaling.
//!
//! The scaler parameters come from the offline fitting step and are loaded
//! read-only; this module only applies them.
//!
//! # Example
//!
//! ```
//! use nutricare::preprocessing::StandardScaler;
//! use nutricare::traits::Transformer;
//!
//! let scaler = StandardScaler::from_parameters(vec![70.0, 1.5], vec![5.0, 0.5])
//!     .expect("matching lengths");
//!
//! let scaled = scaler.transform(&[75.0, 1.0]).expect("two features");
//! assert_eq!(scaled, vec![1.0, -1.0]);
//! ```

use crate::error::{NutricareError, Result};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Scale entries at or below this are treated as 1 (zero-variance feature).
const MIN_SCALE: f64 = 1e-10;

/// Standardizes features with fitted per-feature mean and scale.
///
/// The standard score of a sample x is: z = (x - mean) / scale
///
/// # Example
///
/// ```
/// use nutricare::preprocessing::StandardScaler;
/// use nutricare::traits::Transformer;
///
/// // Zero scale leaves the centered value untouched.
/// let scaler = StandardScaler::from_parameters(vec![0.0, 2.0], vec![0.0, 4.0])
///     .expect("matching lengths");
/// assert_eq!(scaler.transform(&[3.0, 10.0]).expect("ok"), vec![3.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParameters", into = "ScalerParameters")]
pub struct StandardScaler {
    /// Mean of each feature (fitted offline).
    mean: Vec<f64>,
    /// Scale (standard deviation) of each feature (fitted offline).
    scale: Vec<f64>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by scale).
    with_std: bool,
}

/// Serialized form of [`StandardScaler`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParameters {
    /// Per-feature mean
    pub mean: Vec<f64>,
    /// Per-feature scale
    pub scale: Vec<f64>,
    /// Whether centering is applied
    #[serde(default = "enabled")]
    pub with_mean: bool,
    /// Whether scaling is applied
    #[serde(default = "enabled")]
    pub with_std: bool,
}

fn enabled() -> bool {
    true
}

impl StandardScaler {
    /// Creates a scaler from fitted parameters with centering and scaling
    /// enabled.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `mean` and `scale` differ in length or
    /// are empty, `NonFiniteFeature` if any parameter is NaN or infinite, and
    /// `SchemaMismatch` if a scale entry is negative.
    pub fn from_parameters(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.is_empty() {
            return Err(NutricareError::dimension_mismatch("mean_len", 1, 0));
        }
        if mean.len() != scale.len() {
            return Err(NutricareError::dimension_mismatch(
                "scale_len",
                mean.len(),
                scale.len(),
            ));
        }
        for (name, values) in [("mean", &mean), ("scale", &scale)] {
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(NutricareError::NonFiniteFeature {
                    field: format!("{name}[{i}]"),
                });
            }
        }
        if let Some(i) = scale.iter().position(|v| *v < 0.0) {
            return Err(NutricareError::schema_mismatch(
                &format!("scale[{i}]"),
                ">= 0",
                scale[i],
            ));
        }
        Ok(Self {
            mean,
            scale,
            with_mean: true,
            with_std: true,
        })
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by the scale.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Returns the mean of each feature.
    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Returns the scale of each feature.
    #[must_use]
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    fn check_width(&self, x: &[f64]) -> Result<()> {
        if x.len() == self.mean.len() {
            Ok(())
        } else {
            Err(NutricareError::dimension_mismatch(
                "n_features",
                self.mean.len(),
                x.len(),
            ))
        }
    }

    /// Maps a scaled sample back to original units.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the sample width differs from the
    /// fitted width.
    pub fn inverse_transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_width(x)?;
        Ok(x.iter()
            .enumerate()
            .map(|(j, &v)| {
                let mut val = v;
                // Reverse scaling
                if self.with_std && self.scale[j] > MIN_SCALE {
                    val *= self.scale[j];
                }
                // Reverse centering
                if self.with_mean {
                    val += self.mean[j];
                }
                val
            })
            .collect())
    }
}

impl Transformer for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardizes the sample using the fitted mean and scale.
    fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_width(x)?;
        Ok(x.iter()
            .enumerate()
            .map(|(j, &v)| {
                let mut val = v;
                // Center
                if self.with_mean {
                    val -= self.mean[j];
                }
                // Scale
                if self.with_std && self.scale[j] > MIN_SCALE {
                    val /= self.scale[j];
                }
                val
            })
            .collect())
    }
}

impl TryFrom<ScalerParameters> for StandardScaler {
    type Error = NutricareError;

    fn try_from(p: ScalerParameters) -> Result<Self> {
        Ok(Self::from_parameters(p.mean, p.scale)?
            .with_mean(p.with_mean)
            .with_std(p.with_std))
    }
}

impl From<StandardScaler> for ScalerParameters {
    fn from(s: StandardScaler) -> Self {
        Self {
            mean: s.mean,
            scale: s.scale,
            with_mean: s.with_mean,
            with_std: s.with_std,
        }
    }
}


#[cfg(test)]
#[path = "tests_scaling_contract.rs"]
mod tests_scaling_contract;
