//! Shared fixtures: a synthetic schema-v1 bundle and questionnaire JSON.

#![allow(dead_code)]

use nutricare::prelude::*;
use serde_json::{json, Value};

include!("../includes/fixture_profiles.rs");

pub fn scaler() -> StandardScaler {
    StandardScaler::from_parameters(MEAN.to_vec(), SCALE.to_vec()).expect("valid parameters")
}

/// Bundle with groups in canonical order: 0 adequate, 1 severe, 2 mild.
pub fn bundle() -> ModelBundle {
    let scaler = scaler();
    let clusters = PROFILES
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|raw| scaler.transform(raw).expect("14 features"))
                .collect::<Vec<_>>()
        })
        .collect();
    ModelBundle {
        schema_version: 1,
        feature_names: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
        scaler: scaler.into(),
        clusters,
        cluster_labels: None,
    }
}

pub fn artifact_set() -> ArtifactSet {
    ArtifactSet::from_bundle(bundle()).expect("consistent fixture")
}

/// Questionnaire with the best answer on every item.
pub fn best_questionnaire() -> Value {
    json!({
        "Nama": "Siti Aminah",
        "Umur": 68,
        "Jenis_Kelamin": "Perempuan",
        "Berat_Badan": 52,
        "Tinggi_Badan": 152,
        "Lingkar_Lengan": 24.5,
        "Penurunan_Berat_Badan": 0,
        "Frekuensi_Makan": "Tiga kali atau lebih",
        "Variasi_Makanan": "Makanan bervariasi (misalnya daging, sayuran, buah)",
        "Asupan_Protein": "Dua kali sehari atau lebih",
        "Mobilitas": "Bergerak dengan bebas tanpa bantuan",
        "Aktivitas_Sehari_hari": "Tidak ada kesulitan",
        "Kesehatan_Mulut": "Tidak ada masalah",
        "Penyakit_Kronis": "Tidak",
        "Stres": "Tidak",
        "Masalah_Kognitif": "Tidak ada masalah daya ingat"
    })
}

/// Best answers, but 5 kg weight loss and almost no protein.
pub fn severe_questionnaire() -> Value {
    let mut q = best_questionnaire();
    q["Penurunan_Berat_Badan"] = json!(5);
    q["Asupan_Protein"] = json!("Kurang dari sekali sehari atau tidak pernah");
    q
}

pub fn raw(value: &Value) -> RawQuestionnaire {
    serde_json::from_value(value.clone()).expect("questionnaire shape")
}
