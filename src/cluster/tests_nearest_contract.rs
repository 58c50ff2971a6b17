// =========================================================================
// FALSIFY-NR: nearest-representative classification contract
//
// Laws: lowest-index tie-break, determinism, dimension checking, and
// read-only artifacts.
// =========================================================================

use super::*;
use crate::preprocessing::StandardScaler;

fn identity(n: usize) -> StandardScaler {
    StandardScaler::from_parameters(vec![0.0; n], vec![1.0; n]).expect("valid")
}

/// FALSIFY-NR-001: Tie-break: equidistant groups 0 and 1 resolve to 0
#[test]
fn falsify_nr_001_tie_goes_to_lowest_index() {
    let reps = RepresentativeSet::from_points(vec![
        vec![vec![-1.0, 0.0]],
        vec![vec![1.0, 0.0]],
        vec![vec![0.0, 5.0]],
    ])
    .expect("valid");
    let result = classify(&FeatureVector::new(vec![0.0, 0.0]), &identity(2), &reps)
        .expect("widths match");
    assert_eq!(
        result.group_distances[0], result.group_distances[1],
        "query must be equidistant"
    );
    assert_eq!(result.cluster, 0, "FALSIFIED NR-001: tie went to {}", result.cluster);
}

/// FALSIFY-NR-002: Tie-break holds when the tied groups are not first
#[test]
fn falsify_nr_002_tie_between_later_groups() {
    let reps = RepresentativeSet::from_points(vec![
        vec![vec![0.0, 9.0]],
        vec![vec![0.0, 2.0]],
        vec![vec![0.0, -2.0]],
    ])
    .expect("valid");
    let result = classify(&FeatureVector::new(vec![0.0, 0.0]), &identity(2), &reps)
        .expect("widths match");
    assert_eq!(result.cluster, 1, "FALSIFIED NR-002: tie went to {}", result.cluster);
}

/// FALSIFY-NR-003: Determinism: identical inputs, identical output
#[test]
fn falsify_nr_003_deterministic() {
    let reps = RepresentativeSet::from_points(vec![
        vec![vec![0.3, -1.2, 2.2], vec![1.1, 0.4, -0.7]],
        vec![vec![-2.0, 0.9, 0.1]],
        vec![vec![0.8, 0.8, 0.8], vec![-0.1, 2.5, 1.0]],
    ])
    .expect("valid");
    let scaler = StandardScaler::from_parameters(vec![1.0, 2.0, 3.0], vec![0.5, 2.0, 4.0])
        .expect("valid");
    let x = FeatureVector::new(vec![1.4, 3.1, 5.2]);
    let first = classify(&x, &scaler, &reps).expect("ok");
    for _ in 0..20 {
        let again = classify(&x, &scaler, &reps).expect("ok");
        assert_eq!(again.cluster, first.cluster, "FALSIFIED NR-003: cluster changed");
        assert_eq!(
            again.distance.to_bits(),
            first.distance.to_bits(),
            "FALSIFIED NR-003: distance changed"
        );
    }
}

/// FALSIFY-NR-004: Dimension mismatch: N vs M != N never computes a distance
#[test]
fn falsify_nr_004_dimension_mismatch() {
    let reps = RepresentativeSet::from_points(vec![vec![vec![0.0, 0.0, 0.0]]]).expect("valid");
    for n in [1, 2, 4, 14] {
        let scaled = vec![0.0; n];
        let result = nearest_group(&scaled, &reps);
        assert!(
            matches!(result, Err(NutricareError::DimensionMismatch { .. })),
            "FALSIFIED NR-004: width {n} against 3 gave {result:?}"
        );
    }
}

/// FALSIFY-NR-005: Winner is a global minimum over all groups
#[test]
fn falsify_nr_005_global_minimum() {
    let reps = RepresentativeSet::from_points(vec![
        vec![vec![4.0, 4.0], vec![3.0, -3.0]],
        vec![vec![-1.0, 2.0]],
        vec![vec![2.0, 2.0], vec![-3.0, -3.0]],
    ])
    .expect("valid");
    let result = nearest_group(&[0.5, 1.0], &reps).expect("ok");
    for (i, d) in result.group_distances.iter().enumerate() {
        assert!(
            result.distance <= *d,
            "FALSIFIED NR-005: group {i} at {d} beats winner {}",
            result.distance
        );
    }
}

/// FALSIFY-NR-006: Artifacts are read-only
#[test]
fn falsify_nr_006_inputs_unchanged() {
    let reps = RepresentativeSet::from_points(vec![vec![vec![1.0, 1.0]], vec![vec![2.0, 2.0]]])
        .expect("valid");
    let scaler = identity(2);
    let (reps_before, scaler_before) = (reps.clone(), scaler.clone());
    let _ = classify(&FeatureVector::new(vec![1.5, 1.5]), &scaler, &reps).expect("ok");
    assert_eq!(reps, reps_before, "FALSIFIED NR-006: representatives mutated");
    assert_eq!(scaler, scaler_before, "FALSIFIED NR-006: scaler mutated");
}
