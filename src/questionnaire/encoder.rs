//! Feature encoding: questionnaire record to fixed-order numeric vector.

use super::labels::Categorical;
use super::record::{QuestionnaireRecord, RawQuestionnaire};
use crate::error::{NutricareError, Result};
use serde::Serialize;

/// Feature schema version this encoder produces.
pub const SCHEMA_VERSION: u32 = 1;

/// Length of every encoded [`FeatureVector`].
pub const FEATURE_COUNT: usize = 14;

/// Canonical feature order. Scaler parameters and representative point
/// coordinates are laid out in exactly this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Umur",
    "Jenis_Kelamin",
    "Berat_Badan",
    "Tinggi_Badan",
    "Penurunan_Berat_Badan",
    "Frekuensi_Makan",
    "Variasi_Makanan",
    "Asupan_Protein",
    "Mobilitas",
    "Aktivitas_Sehari_hari",
    "Kesehatan_Mulut",
    "Penyakit_Kronis",
    "Stres",
    "Masalah_Kognitif",
];

/// Ordered numeric features of one subject.
///
/// [`encode`] always yields [`FEATURE_COUNT`] entries in [`FEATURE_NAMES`]
/// order. Arbitrary vectors can be wrapped with [`FeatureVector::new`];
/// their width is checked when classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wraps raw feature values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Feature values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the vector, returning the values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Pairs each value with its canonical feature name.
    ///
    /// Stops at the shorter of the vector and [`FEATURE_NAMES`].
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NutricareError::NonFiniteFeature {
            field: field.to_string(),
        })
    }
}

fn code<C: Categorical>(answer: C) -> f64 {
    f64::from(answer.code())
}

/// Encodes a typed record into the canonical feature order.
///
/// The name and arm circumference are dropped. Numeric answers pass
/// through unchanged.
///
/// # Errors
///
/// Returns `NonFiniteFeature` if a numeric answer is NaN or infinite.
///
/// # Examples
///
/// ```
/// use nutricare::questionnaire::*;
///
/// let record = QuestionnaireRecord {
///     name: "Siti".into(),
///     age: 70.0,
///     sex: Sex::Female,
///     weight: 50.0,
///     height: 150.0,
///     arm_circumference: None,
///     weight_loss: 0.0,
///     meal_frequency: MealFrequency::ThreeOrMore,
///     food_variety: FoodVariety::Varied,
///     protein_intake: ProteinIntake::TwiceDailyOrMore,
///     mobility: Mobility::Independent,
///     daily_activity: DailyActivity::NoDifficulty,
///     oral_health: OralHealth::NoProblem,
///     chronic_disease: ChronicDisease::No,
///     stress: Stress::No,
///     cognitive_issues: CognitiveIssues::NoMemoryProblem,
/// };
/// let features = encode(&record).expect("finite numbers");
/// assert_eq!(features.len(), FEATURE_COUNT);
/// assert_eq!(
///     features.as_slice(),
///     &[70.0, 1.0, 50.0, 150.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0]
/// );
/// ```
pub fn encode(record: &QuestionnaireRecord) -> Result<FeatureVector> {
    let values = vec![
        finite(FEATURE_NAMES[0], record.age)?,
        code(record.sex),
        finite(FEATURE_NAMES[2], record.weight)?,
        finite(FEATURE_NAMES[3], record.height)?,
        finite(FEATURE_NAMES[4], record.weight_loss)?,
        code(record.meal_frequency),
        code(record.food_variety),
        code(record.protein_intake),
        code(record.mobility),
        code(record.daily_activity),
        code(record.oral_health),
        code(record.chronic_disease),
        code(record.stress),
        code(record.cognitive_issues),
    ];
    debug_assert_eq!(values.len(), FEATURE_COUNT);
    Ok(FeatureVector(values))
}

/// Parses and encodes raw answers in one step.
///
/// # Errors
///
/// Returns `UnknownCategory` for an out-of-domain label and
/// `NonFiniteFeature` for a NaN or infinite number. No partial vector is
/// produced on failure.
pub fn encode_raw(raw: &RawQuestionnaire) -> Result<FeatureVector> {
    encode(&raw.parse()?)
}

/// Verifies that an artifact was fitted against this encoder's schema.
///
/// # Errors
///
/// Returns `SchemaMismatch` if the count or any name differs from
/// [`FEATURE_NAMES`].
pub fn check_feature_names<S: AsRef<str>>(names: &[S]) -> Result<()> {
    if names.len() != FEATURE_COUNT {
        return Err(NutricareError::schema_mismatch(
            "feature_count",
            FEATURE_COUNT,
            names.len(),
        ));
    }
    for (i, (expected, actual)) in FEATURE_NAMES.iter().zip(names).enumerate() {
        if *expected != actual.as_ref() {
            return Err(NutricareError::schema_mismatch(
                &format!("feature[{i}]"),
                expected,
                actual.as_ref(),
            ));
        }
    }
    Ok(())
}
