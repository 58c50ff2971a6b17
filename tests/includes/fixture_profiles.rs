// Synthetic schema-v1 fixture shared by the unit, integration and CLI tests.
// Raw (unscaled) answers in FEATURE_NAMES order.

pub const MEAN: [f64; 14] = [
    70.0, 0.5, 55.0, 155.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 0.5, 0.5, 2.0,
];
pub const SCALE: [f64; 14] = [
    8.0, 0.5, 10.0, 8.0, 2.0, 0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.5, 0.5, 0.8,
];

/// Best answers on every item, no weight loss.
pub const ADEQUATE: [f64; 14] = [
    68.0, 1.0, 52.0, 152.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0,
];
pub const ADEQUATE_ALT: [f64; 14] = [
    72.0, 0.0, 60.0, 160.0, 0.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0,
];
/// Marked weight loss with poor protein intake.
pub const SEVERE: [f64; 14] = [
    68.0, 1.0, 52.0, 152.0, 6.0, 2.0, 3.0, 1.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0,
];
pub const SEVERE_ALT: [f64; 14] = [
    68.0, 1.0, 52.0, 152.0, 8.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];
pub const MILD: [f64; 14] = [
    68.0, 1.0, 52.0, 152.0, 2.0, 3.0, 2.0, 2.0, 3.0, 3.0, 3.0, 0.0, 0.0, 3.0,
];

/// Groups in canonical order: 0 adequate, 1 severe, 2 mild.
pub const PROFILES: [&[[f64; 14]]; 3] = [
    &[ADEQUATE, ADEQUATE_ALT],
    &[SEVERE, SEVERE_ALT],
    &[MILD],
];
