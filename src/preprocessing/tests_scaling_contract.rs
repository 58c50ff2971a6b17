// =========================================================================
// FALSIFY-SC: fitted scaler contract
//
// Classification compares scaled vectors against representative points
// fitted in the same scaled space; any drift in the transform silently
// moves subjects between groups.
// =========================================================================

use super::*;

fn fitted() -> StandardScaler {
    StandardScaler::from_parameters(
        vec![71.3, 0.52, 55.1, 156.4, 1.9, 2.4, 2.2, 2.1, 2.5, 2.3, 2.4, 0.61, 0.47, 2.2],
        vec![7.9, 0.49, 9.8, 7.7, 2.1, 0.7, 0.8, 0.8, 0.7, 0.8, 0.7, 0.48, 0.49, 0.8],
    )
    .expect("valid parameters")
}

/// FALSIFY-SC-001: Idempotent application: bit-identical on repeat
#[test]
fn falsify_sc_001_bit_identical() {
    let s = fitted();
    let x = [68.0, 1.0, 52.0, 152.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0];
    let a = s.transform(&x).expect("ok");
    let b = s.transform(&x).expect("ok");
    for (j, (u, v)) in a.iter().zip(&b).enumerate() {
        assert_eq!(
            u.to_bits(),
            v.to_bits(),
            "FALSIFIED SC-001: feature {j} differs between applications"
        );
    }
}

/// FALSIFY-SC-002: Width preserved
#[test]
fn falsify_sc_002_width_preserved() {
    let s = fitted();
    let out = s.transform(&[0.0; 14]).expect("ok");
    assert_eq!(out.len(), 14, "FALSIFIED SC-002: width {}", out.len());
}

/// FALSIFY-SC-003: Affine per dimension: mean maps to zero
#[test]
fn falsify_sc_003_mean_maps_to_zero() {
    let s = fitted();
    let out = s.transform(s.mean()).expect("ok");
    for (j, v) in out.iter().enumerate() {
        assert!(v.abs() < 1e-12, "FALSIFIED SC-003: feature {j} = {v}");
    }
}

/// FALSIFY-SC-004: Parameters unchanged by transform
#[test]
fn falsify_sc_004_read_only() {
    let s = fitted();
    let before = s.clone();
    let _ = s.transform(&[1.0; 14]).expect("ok");
    assert_eq!(s, before, "FALSIFIED SC-004: transform mutated the scaler");
}
