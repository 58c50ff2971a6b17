//! Questionnaire records: the raw boundary form and the typed form.

use super::labels::{
    Categorical, ChronicDisease, CognitiveIssues, DailyActivity, FoodVariety, MealFrequency,
    Mobility, OralHealth, ProteinIntake, Sex, Stress,
};
use crate::error::{NutricareError, Result};
use serde::{Deserialize, Serialize};

/// Minimum age (years) of an elderly subject ("lansia").
pub const ELDERLY_MIN_AGE: f64 = 60.0;

/// One subject's answers with every categorical field already validated.
///
/// Constructing this type through its fields cannot produce an unknown
/// category; raw external input goes through [`RawQuestionnaire::parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionnaireRecord {
    /// Subject name (never encoded)
    #[serde(rename = "Nama")]
    pub name: String,
    /// Age in years
    #[serde(rename = "Umur")]
    pub age: f64,
    /// Sex
    #[serde(rename = "Jenis_Kelamin")]
    pub sex: Sex,
    /// Body weight in kg
    #[serde(rename = "Berat_Badan")]
    pub weight: f64,
    /// Body height in cm
    #[serde(rename = "Tinggi_Badan")]
    pub height: f64,
    /// Mid-upper arm circumference in cm (collected, not encoded in schema v1)
    #[serde(rename = "Lingkar_Lengan", skip_serializing_if = "Option::is_none")]
    pub arm_circumference: Option<f64>,
    /// Recent weight loss in kg
    #[serde(rename = "Penurunan_Berat_Badan")]
    pub weight_loss: f64,
    /// Meals per day
    #[serde(rename = "Frekuensi_Makan")]
    pub meal_frequency: MealFrequency,
    /// Variety of foods
    #[serde(rename = "Variasi_Makanan")]
    pub food_variety: FoodVariety,
    /// Protein servings
    #[serde(rename = "Asupan_Protein")]
    pub protein_intake: ProteinIntake,
    /// Mobility
    #[serde(rename = "Mobilitas")]
    pub mobility: Mobility,
    /// Activities of daily living
    #[serde(rename = "Aktivitas_Sehari_hari")]
    pub daily_activity: DailyActivity,
    /// Oral health
    #[serde(rename = "Kesehatan_Mulut")]
    pub oral_health: OralHealth,
    /// Chronic disease
    #[serde(rename = "Penyakit_Kronis")]
    pub chronic_disease: ChronicDisease,
    /// Stress
    #[serde(rename = "Stres")]
    pub stress: Stress,
    /// Cognitive issues
    #[serde(rename = "Masalah_Kognitif")]
    pub cognitive_issues: CognitiveIssues,
}

impl QuestionnaireRecord {
    /// Checks record-level constraints that the form enforced before
    /// classification.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` for an empty name, an age below
    /// [`ELDERLY_MIN_AGE`], or a non-positive weight or height.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NutricareError::invalid_record("Nama", "must not be empty"));
        }
        if self.age.is_nan() || self.age < ELDERLY_MIN_AGE {
            return Err(NutricareError::invalid_record(
                "Umur",
                format!("must be at least {ELDERLY_MIN_AGE}, got {}", self.age),
            ));
        }
        if self.weight.is_nan() || self.weight <= 0.0 {
            return Err(NutricareError::invalid_record(
                "Berat_Badan",
                format!("must be positive, got {}", self.weight),
            ));
        }
        if self.height.is_nan() || self.height <= 0.0 {
            return Err(NutricareError::invalid_record(
                "Tinggi_Badan",
                format!("must be positive, got {}", self.height),
            ));
        }
        Ok(())
    }
}

/// Questionnaire answers as received from an external caller.
///
/// Categorical fields are free strings here. Field names follow the
/// questionnaire column names; snake_case English aliases are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuestionnaire {
    /// Subject name
    #[serde(rename = "Nama", alias = "name", default)]
    pub name: String,
    /// Age in years
    #[serde(rename = "Umur", alias = "age")]
    pub age: f64,
    /// Sex label
    #[serde(rename = "Jenis_Kelamin", alias = "sex")]
    pub sex: String,
    /// Body weight in kg
    #[serde(rename = "Berat_Badan", alias = "weight")]
    pub weight: f64,
    /// Body height in cm
    #[serde(rename = "Tinggi_Badan", alias = "height")]
    pub height: f64,
    /// Mid-upper arm circumference in cm
    #[serde(
        rename = "Lingkar_Lengan",
        alias = "arm_circumference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub arm_circumference: Option<f64>,
    /// Recent weight loss in kg
    #[serde(rename = "Penurunan_Berat_Badan", alias = "weight_loss")]
    pub weight_loss: f64,
    /// Meal frequency label
    #[serde(rename = "Frekuensi_Makan", alias = "meal_frequency")]
    pub meal_frequency: String,
    /// Food variety label
    #[serde(rename = "Variasi_Makanan", alias = "food_variety")]
    pub food_variety: String,
    /// Protein intake label
    #[serde(rename = "Asupan_Protein", alias = "protein_intake")]
    pub protein_intake: String,
    /// Mobility label
    #[serde(rename = "Mobilitas", alias = "mobility")]
    pub mobility: String,
    /// Daily activity label
    #[serde(rename = "Aktivitas_Sehari_hari", alias = "daily_activity")]
    pub daily_activity: String,
    /// Oral health label
    #[serde(rename = "Kesehatan_Mulut", alias = "oral_health")]
    pub oral_health: String,
    /// Chronic disease label
    #[serde(rename = "Penyakit_Kronis", alias = "chronic_disease")]
    pub chronic_disease: String,
    /// Stress label
    #[serde(rename = "Stres", alias = "stress")]
    pub stress: String,
    /// Cognitive issues label
    #[serde(rename = "Masalah_Kognitif", alias = "cognitive_issues")]
    pub cognitive_issues: String,
}

impl RawQuestionnaire {
    /// Parses the categorical answers into their closed label sets.
    ///
    /// Whitespace around every string is stripped first. Fields are checked
    /// in encoding order and the first unknown label is reported.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` naming the first offending field.
    pub fn parse(&self) -> Result<QuestionnaireRecord> {
        Ok(QuestionnaireRecord {
            name: self.name.trim().to_string(),
            age: self.age,
            sex: Sex::parse(&self.sex)?,
            weight: self.weight,
            height: self.height,
            arm_circumference: self.arm_circumference,
            weight_loss: self.weight_loss,
            meal_frequency: MealFrequency::parse(&self.meal_frequency)?,
            food_variety: FoodVariety::parse(&self.food_variety)?,
            protein_intake: ProteinIntake::parse(&self.protein_intake)?,
            mobility: Mobility::parse(&self.mobility)?,
            daily_activity: DailyActivity::parse(&self.daily_activity)?,
            oral_health: OralHealth::parse(&self.oral_health)?,
            chronic_disease: ChronicDisease::parse(&self.chronic_disease)?,
            stress: Stress::parse(&self.stress)?,
            cognitive_issues: CognitiveIssues::parse(&self.cognitive_issues)?,
        })
    }

    /// Reads a questionnaire from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the document is malformed or misses a field.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

impl From<&QuestionnaireRecord> for RawQuestionnaire {
    fn from(record: &QuestionnaireRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            sex: record.sex.label().to_string(),
            weight: record.weight,
            height: record.height,
            arm_circumference: record.arm_circumference,
            weight_loss: record.weight_loss,
            meal_frequency: record.meal_frequency.label().to_string(),
            food_variety: record.food_variety.label().to_string(),
            protein_intake: record.protein_intake.label().to_string(),
            mobility: record.mobility.label().to_string(),
            daily_activity: record.daily_activity.label().to_string(),
            oral_health: record.oral_health.label().to_string(),
            chronic_disease: record.chronic_disease.label().to_string(),
            stress: record.stress.label().to_string(),
            cognitive_issues: record.cognitive_issues.label().to_string(),
        }
    }
}
