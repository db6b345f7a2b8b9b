//! Integer quantization of scale factors.

use std::fmt;

/// Multiplier between a scale factor and its [`ScaleKey`].
pub const SCALE_KEY_MULTIPLIER: f32 = 100.0;

/// A scale factor quantized to hundredths.
///
/// Keys order the same way as the scale factors they came from, and every
/// scale within the same 0.01 step shares one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScaleKey(i32);

impl ScaleKey {
	/// Wraps a raw key (scale x 100).
	pub const fn new(raw: i32) -> Self {
		Self(raw)
	}

	/// Quantizes a scale factor, rounding to the nearest hundredth.
	#[inline]
	pub fn from_scale(scale: f32) -> Self {
		Self((scale * SCALE_KEY_MULTIPLIER).round() as i32)
	}

	/// Returns the scale factor this key stands for.
	#[inline]
	pub fn scale(self) -> f32 {
		self.0 as f32 / SCALE_KEY_MULTIPLIER
	}

	/// Returns the raw integer key.
	#[inline]
	pub const fn get(self) -> i32 {
		self.0
	}
}

impl fmt::Display for ScaleKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.2}", self.scale())
	}
}
