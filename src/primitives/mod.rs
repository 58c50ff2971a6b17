//! Core compute primitives.
//!
//! Representative points are stored row-major in a [`Matrix`], one row per
//! point, so a whole cluster group is one contiguous allocation.

mod matrix;

pub use matrix::Matrix;
