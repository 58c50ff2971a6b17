//! Questionnaire model and feature encoder.
//!
//! Raw answers arrive as [`RawQuestionnaire`] (free strings), are parsed into
//! a typed [`QuestionnaireRecord`] whose categorical fields are closed enums,
//! and are then encoded into a [`FeatureVector`] in [`FEATURE_NAMES`] order.
//!
//! # Example
//!
//! ```
//! use nutricare::questionnaire::{encode_raw, RawQuestionnaire, FEATURE_COUNT};
//!
//! let raw = RawQuestionnaire::from_json(r#"{
//!     "Nama": "Budi", "Umur": 72, "Jenis_Kelamin": " Laki-laki ",
//!     "Berat_Badan": 58, "Tinggi_Badan": 165, "Penurunan_Berat_Badan": 2,
//!     "Frekuensi_Makan": "Dua kali",
//!     "Variasi_Makanan": "Makanan terbatas pada beberapa jenis saja",
//!     "Asupan_Protein": "Sekali sehari",
//!     "Mobilitas": "Bergerak dengan bantuan",
//!     "Aktivitas_Sehari_hari": "Kesulitan ringan",
//!     "Kesehatan_Mulut": "Ada kesulitan ringan",
//!     "Penyakit_Kronis": "Ya", "Stres": "Tidak",
//!     "Masalah_Kognitif": "Ada sedikit masalah daya ingat"
//! }"#).expect("well-formed JSON");
//!
//! let features = encode_raw(&raw).expect("all labels known");
//! assert_eq!(features.len(), FEATURE_COUNT);
//! assert_eq!(features.as_slice()[1], 0.0); // Laki-laki
//! ```

mod encoder;
mod labels;
mod record;

pub use encoder::{
    check_feature_names, encode, encode_raw, FeatureVector, FEATURE_COUNT, FEATURE_NAMES,
    SCHEMA_VERSION,
};
pub use labels::{
    field_options, Categorical, ChronicDisease, CognitiveIssues, DailyActivity, FieldOptions,
    FoodVariety, MealFrequency, Mobility, OralHealth, ProteinIntake, Sex, Stress,
};
pub use record::{QuestionnaireRecord, RawQuestionnaire, ELDERLY_MIN_AGE};


#[cfg(test)]
#[path = "tests_encoder_contract.rs"]
mod tests_encoder_contract;
