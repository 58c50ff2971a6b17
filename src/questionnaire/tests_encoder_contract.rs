// =========================================================================
// FALSIFY-ENC: feature encoder contract
//
// The encoder output is consumed positionally by the scaler and the
// representative points, so width, order, and label totality are checked
// here next to the implementation.
// =========================================================================

use super::tests::{best_raw, best_record};
use super::*;
use crate::error::NutricareError;

/// FALSIFY-ENC-001: Fixed width for every combination of categorical answers
#[test]
fn falsify_enc_001_fixed_width() {
    let mut record = best_record();
    for &meal in MealFrequency::ALL {
        for &oral in OralHealth::ALL {
            for &sex in Sex::ALL {
                record.meal_frequency = meal;
                record.oral_health = oral;
                record.sex = sex;
                let features = encode(&record).expect("finite");
                assert_eq!(
                    features.len(),
                    FEATURE_COUNT,
                    "FALSIFIED ENC-001: width {} for {meal:?}/{oral:?}/{sex:?}",
                    features.len()
                );
            }
        }
    }
}

/// FALSIFY-ENC-002: Stable order: repeated encoding is identical
#[test]
fn falsify_enc_002_stable_order() {
    let record = best_record();
    let first = encode(&record).expect("finite");
    for _ in 0..10 {
        let again = encode(&record).expect("finite");
        assert_eq!(first, again, "FALSIFIED ENC-002: encoding changed across calls");
    }
}

/// FALSIFY-ENC-003: Totality: every declared label parses to its variant
#[test]
fn falsify_enc_003_tables_total() {
    fn check<C: Categorical + std::fmt::Debug>() {
        for &variant in C::ALL {
            let parsed = C::parse(variant.label()).expect("declared label parses");
            assert_eq!(parsed, variant, "FALSIFIED ENC-003: {} not total", C::FIELD);
        }
    }
    check::<Sex>();
    check::<ChronicDisease>();
    check::<Stress>();
    check::<MealFrequency>();
    check::<FoodVariety>();
    check::<ProteinIntake>();
    check::<Mobility>();
    check::<DailyActivity>();
    check::<OralHealth>();
    check::<CognitiveIssues>();
}

/// FALSIFY-ENC-004: Codomain: binaries in {0,1}, ordinals in {1,2,3}
#[test]
fn falsify_enc_004_codomain() {
    fn codes<C: Categorical>() -> Vec<u8> {
        let mut codes: Vec<u8> = C::ALL.iter().map(|v| v.code()).collect();
        codes.sort_unstable();
        codes
    }
    assert_eq!(codes::<Sex>(), vec![0, 1]);
    assert_eq!(codes::<ChronicDisease>(), vec![0, 1]);
    assert_eq!(codes::<Stress>(), vec![0, 1]);
    assert_eq!(codes::<MealFrequency>(), vec![1, 2, 3]);
    assert_eq!(codes::<FoodVariety>(), vec![1, 2, 3]);
    assert_eq!(codes::<ProteinIntake>(), vec![1, 2, 3]);
    assert_eq!(codes::<Mobility>(), vec![1, 2, 3]);
    assert_eq!(codes::<DailyActivity>(), vec![1, 2, 3]);
    assert_eq!(codes::<OralHealth>(), vec![1, 2, 3]);
    assert_eq!(codes::<CognitiveIssues>(), vec![1, 2, 3]);
}

/// FALSIFY-ENC-005: Unknown category yields an error and no vector
#[test]
fn falsify_enc_005_unknown_category_no_partial() {
    let mut raw = best_raw();
    raw.protein_intake = "Tiga kali sehari".to_string();
    let result = encode_raw(&raw);
    assert!(
        matches!(result, Err(NutricareError::UnknownCategory { ref field, .. }) if field == "Asupan_Protein"),
        "FALSIFIED ENC-005: got {result:?}"
    );
}

/// FALSIFY-ENC-006: Schema names and width agree
#[test]
fn falsify_enc_006_schema_width() {
    assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    let mut sorted = FEATURE_NAMES.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), FEATURE_COUNT, "FALSIFIED ENC-006: duplicate name");
}
