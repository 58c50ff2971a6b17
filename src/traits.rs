//! Core traits shared by the encoder, scaler, and classifier.

use crate::error::Result;

/// Fitted, read-only feature transformer (scalers).
///
/// Implementations hold parameters produced offline; this crate never fits
/// them. `transform` must be pure: the same input always produces a
/// bit-identical output.
///
/// # Examples
///
/// ```
/// use nutricare::preprocessing::StandardScaler;
/// use nutricare::traits::Transformer;
///
/// let scaler = StandardScaler::from_parameters(vec![1.0, 10.0], vec![2.0, 5.0])
///     .expect("matching lengths");
/// let scaled = scaler.transform(&[3.0, 20.0]).expect("two features");
/// assert_eq!(scaled, vec![1.0, 2.0]);
/// ```
pub trait Transformer {
    /// Number of features the transformer was fitted on.
    fn n_features(&self) -> usize;

    /// Transforms a single sample.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `x.len() != self.n_features()`.
    fn transform(&self, x: &[f64]) -> Result<Vec<f64>>;
}
