//! Nutricare: nutrition-risk group assignment for elderly subjects.
//!
//! A questionnaire (age, sex, anthropometrics, diet, mobility, oral health,
//! chronic disease, stress, cognition) is encoded into a fixed 14-feature
//! vector, standardized with an offline-fitted scaler, and assigned to the
//! cluster whose nearest CURE representative point is closest. Each cluster
//! maps to a [`NutritionStatus`](intervention::NutritionStatus) that carries
//! its intervention guidance.
//!
//! # Quick Start
//!
//! ```
//! use nutricare::prelude::*;
//!
//! let scaler = StandardScaler::from_parameters(vec![0.0; 2], vec![1.0; 2])
//!     .expect("valid parameters");
//! let reps = RepresentativeSet::from_points(vec![
//!     vec![vec![0.0, 0.0]],
//!     vec![vec![3.0, 3.0]],
//!     vec![vec![-3.0, 3.0]],
//! ]).expect("consistent widths");
//! let classifier = NearestRepresentative::new(scaler, reps).expect("matching widths");
//!
//! let result = classifier
//!     .classify(&FeatureVector::new(vec![2.5, 2.0]))
//!     .expect("two features");
//! assert_eq!(result.cluster, 1);
//! assert_eq!(NutritionStatus::from_cluster(result.cluster), Some(NutritionStatus::SevereMalnutrition));
//! ```
//!
//! # Modules
//!
//! - [`questionnaire`]: Answer label sets, records, and the feature encoder
//! - [`preprocessing`]: Fitted standard scaler
//! - [`cluster`]: Nearest-representative-point classification
//! - [`intervention`]: Nutrition status labels and guidance
//! - [`artifact`]: Versioned artifact files and the shared artifact store
//! - [`assessment`]: End-to-end pipeline for one questionnaire
//! - [`primitives`]: Row-major matrix storage
//! - [`traits`]: Transformer trait
//! - [`error`]: Error taxonomy

pub mod artifact;
pub mod assessment;
pub mod cluster;
pub mod error;
pub mod intervention;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod questionnaire;
pub mod traits;

pub use error::{NutricareError, Result};
pub use traits::Transformer;
