pub mod axis;

pub use axis::{check_axes, AXES};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Rounds `value` to the nearest multiple of `unit`.
///
/// `f64::round` breaks ties away from zero.
#[inline]
#[must_use]
pub fn round_to(value: f64, unit: f64) -> f64 {
    (value / unit).round() * unit
}

/// Sorts coordinate values and removes entries closer than [`TOLERANCE`].
pub fn sort_dedup(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| approx_eq(*a, *b));
}
