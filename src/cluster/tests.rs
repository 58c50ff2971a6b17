use super::*;
use crate::preprocessing::StandardScaler;

fn identity(n: usize) -> StandardScaler {
    StandardScaler::from_parameters(vec![0.0; n], vec![1.0; n]).expect("valid")
}

fn two_groups() -> RepresentativeSet {
    RepresentativeSet::from_points(vec![
        vec![vec![0.0, 0.0], vec![1.0, 0.0]],
        vec![vec![10.0, 10.0], vec![6.0, 8.0], vec![9.0, 9.0]],
    ])
    .expect("consistent widths")
}

// ==================== RepresentativeSet ====================

#[test]
fn test_set_shape() {
    let reps = two_groups();
    assert_eq!(reps.n_clusters(), 2);
    assert_eq!(reps.dim(), 2);
    assert_eq!(reps.n_points(), 5);
    assert_eq!(reps.group(1).map(Matrix::n_rows), Some(3));
    assert!(reps.group(2).is_none());
}

#[test]
fn test_set_rejects_mixed_widths() {
    let err = RepresentativeSet::from_points(vec![vec![vec![0.0, 0.0]], vec![vec![1.0]]])
        .expect_err("widths 2 and 1");
    assert!(matches!(err, NutricareError::DimensionMismatch { .. }));
}

#[test]
fn test_set_rejects_ragged_group() {
    let err = RepresentativeSet::from_points(vec![vec![vec![0.0, 0.0], vec![1.0]]])
        .expect_err("ragged");
    assert!(matches!(err, NutricareError::DimensionMismatch { .. }));
}

#[test]
fn test_set_rejects_nan_coordinate() {
    let err = RepresentativeSet::from_points(vec![vec![vec![0.0, 0.0], vec![1.0, f64::NAN]]])
        .expect_err("nan");
    match err {
        NutricareError::NonFiniteFeature { field } => {
            assert_eq!(field, "cluster[0].point[1][1]");
        }
        other => panic!("expected NonFiniteFeature, got {other:?}"),
    }
}

#[test]
fn test_group_mean() {
    let reps = two_groups();
    assert_eq!(reps.group_mean(0), Some(vec![0.5, 0.0]));
    assert_eq!(reps.group_mean(1), Some(vec![25.0 / 3.0, 9.0]));
    assert_eq!(reps.group_mean(7), None);
}

#[test]
fn test_to_points_round_trip() {
    let points = vec![vec![vec![1.0, 2.0]], vec![vec![3.0, 4.0], vec![5.0, 6.0]]];
    let reps = RepresentativeSet::from_points(points.clone()).expect("valid");
    assert_eq!(reps.to_points(), points);
}

// ==================== Distance ====================

#[test]
fn test_euclidean_distance() {
    assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    assert_eq!(euclidean_distance(&[1.5], &[1.5]), 0.0);
}

// ==================== classify ====================

#[test]
fn test_classify_picks_nearest_group() {
    let result = classify(&FeatureVector::new(vec![0.9, 0.1]), &identity(2), &two_groups())
        .expect("widths match");
    assert_eq!(result.cluster, 0);
    assert_eq!(result.nearest_point, 1);
    assert!((result.distance - 0.02_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_classify_uses_min_over_points_not_centroid() {
    // Group 1's centroid is far from (6, 7), but one of its points is close.
    let result = classify(&FeatureVector::new(vec![6.0, 7.0]), &identity(2), &two_groups())
        .expect("widths match");
    assert_eq!(result.cluster, 1);
    assert_eq!(result.nearest_point, 1);
    assert_eq!(result.distance, 1.0);
}

#[test]
fn test_classify_reports_every_group_distance() {
    let result = classify(&FeatureVector::new(vec![0.0, 0.0]), &identity(2), &two_groups())
        .expect("widths match");
    assert_eq!(result.group_distances.len(), 2);
    assert_eq!(result.group_distances[0], 0.0);
    assert_eq!(result.group_distances[1], 10.0);
}

#[test]
fn test_classify_applies_scaler_first() {
    // Raw (20, 0) scales to (1, 0), which sits on group 0's second point.
    let scaler = StandardScaler::from_parameters(vec![10.0, 0.0], vec![10.0, 1.0]).expect("valid");
    let result = classify(&FeatureVector::new(vec![20.0, 0.0]), &scaler, &two_groups())
        .expect("widths match");
    assert_eq!(result.cluster, 0);
    assert_eq!(result.distance, 0.0);
}

#[test]
fn test_classify_empty_set() {
    let reps = RepresentativeSet::new(Vec::new()).expect("empty set is constructible");
    let err = classify(&FeatureVector::new(vec![0.0, 0.0]), &identity(2), &reps)
        .expect_err("no groups");
    assert!(matches!(err, NutricareError::EmptyClusterSet));
}

#[test]
fn test_classify_empty_group() {
    let reps = RepresentativeSet::from_points(vec![vec![vec![0.0, 0.0]], vec![]]).expect("valid");
    let err = classify(&FeatureVector::new(vec![0.0, 0.0]), &identity(2), &reps)
        .expect_err("group 1 empty");
    assert!(matches!(err, NutricareError::EmptyCluster { cluster: 1 }));
}

#[test]
fn test_nearest_group_rejects_non_finite() {
    let err = nearest_group(&[f64::NAN, 0.0], &two_groups()).expect_err("nan");
    assert!(matches!(err, NutricareError::NonFiniteFeature { .. }));
}

#[test]
fn test_classify_single_group() {
    let reps = RepresentativeSet::from_points(vec![vec![vec![3.0]]]).expect("valid");
    let result = classify(&FeatureVector::new(vec![-1.0]), &identity(1), &reps).expect("ok");
    assert_eq!(result.cluster, 0);
    assert_eq!(result.distance, 4.0);
}

// ==================== NearestRepresentative ====================

#[test]
fn test_nearest_representative_classifies() {
    let model = NearestRepresentative::new(identity(2), two_groups()).expect("consistent");
    assert_eq!(model.n_features(), 2);
    let result = model
        .classify(&FeatureVector::new(vec![9.5, 9.5]))
        .expect("ok");
    assert_eq!(result.cluster, 1);
    assert_eq!(model.representatives().n_clusters(), 2);
    assert_eq!(model.scaler().n_features(), 2);
}

#[test]
fn test_nearest_representative_schema_mismatch() {
    let err = NearestRepresentative::new(identity(3), two_groups()).expect_err("3 vs 2");
    assert!(matches!(err, NutricareError::SchemaMismatch { .. }));
}

#[test]
fn test_nearest_representative_requires_points() {
    let empty = RepresentativeSet::new(Vec::new()).expect("constructible");
    let err = NearestRepresentative::new(identity(2), empty).expect_err("no groups");
    assert!(matches!(err, NutricareError::EmptyClusterSet));

    let hollow = RepresentativeSet::from_points(vec![vec![]]).expect("constructible");
    let err = NearestRepresentative::new(identity(2), hollow).expect_err("empty group");
    assert!(matches!(err, NutricareError::EmptyCluster { cluster: 0 }));
}

#[test]
fn test_nearest_representative_wrong_input_width() {
    let model = NearestRepresentative::new(identity(2), two_groups()).expect("consistent");
    let err = model
        .classify(&FeatureVector::new(vec![1.0, 2.0, 3.0]))
        .expect_err("width 3");
    assert!(matches!(err, NutricareError::DimensionMismatch { .. }));
}
