//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use nutricare::prelude::*;
//! ```

pub use crate::artifact::{ArtifactSet, ArtifactStore, ModelBundle};
pub use crate::assessment::{Assessment, Assessor};
pub use crate::cluster::{classify, Classification, NearestRepresentative, RepresentativeSet};
pub use crate::error::{NutricareError, Result};
pub use crate::intervention::{NutritionStatus, WhoCategory};
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::Matrix;
pub use crate::questionnaire::{
    encode, encode_raw, Categorical, FeatureVector, QuestionnaireRecord, RawQuestionnaire,
    FEATURE_COUNT, FEATURE_NAMES,
};
pub use crate::traits::Transformer;
