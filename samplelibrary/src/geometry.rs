//! Vector geometry backed by `glam`.

use glam::Vec3;

/// Euclidean length of the vector `(x, y, z)`.
///
/// Follows IEEE semantics: a NaN component yields NaN, an infinite component
/// yields infinity, otherwise the result is finite and non-negative.
#[inline]
pub fn vector_length(x: f32, y: f32, z: f32) -> f32 {
    Vec3::new(x, y, z).length()
}
