//! Scalar interpolation helpers shared by tables and the factory.

/// Linear interpolation from `start` to `stop` by `amount`.
#[inline]
pub fn lerp(start: f32, stop: f32, amount: f32) -> f32 {
	start + (stop - start) * amount
}

/// Inverse of [`lerp`]: where `value` sits between `a` and `b`.
///
/// Returns `0.0` for a degenerate `a == b` range.
#[inline]
pub fn lerp_inv(a: f32, b: f32, value: f32) -> f32 {
	if a != b { (value - a) / (b - a) } else { 0.0 }
}

/// [`lerp_inv`] saturated to `[0, 1]`.
#[inline]
pub fn lerp_inv_sat(a: f32, b: f32, value: f32) -> f32 {
	lerp_inv(a, b, value).clamp(0.0, 1.0)
}

/// Maps `value` from `[value_min, value_max]` onto `[range_min, range_max]`,
/// clamping to the target range.
#[inline]
pub fn constrained_map(
	range_min: f32,
	range_max: f32,
	value_min: f32,
	value_max: f32,
	value: f32,
) -> f32 {
	lerp(range_min, range_max, lerp_inv_sat(value_min, value_max, value))
}
