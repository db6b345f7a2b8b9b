//! Piecewise-linear size lookup tables.
//!
//! A [`ScaleTable`] maps nominal text sizes (sp) to physical sizes (dp) through
//! a small set of sorted anchor pairs. Lookups between anchors interpolate
//! linearly; lookups outside the anchors extend the nearest boundary pair's
//! ratio, so a one-pair table is a pure linear scale.

use std::fmt;

use crate::error::TableError;
use crate::math::constrained_map;

/// Converts between nominal and physical text sizes at one fixed scale.
pub trait FontScaleConverter: Send + Sync {
	/// Converts a nominal size to its physical size.
	fn convert_sp_to_dp(&self, sp: f32) -> f32;

	/// Converts a physical size back to the nominal size that produces it.
	fn convert_dp_to_sp(&self, dp: f32) -> f32;
}

/// Immutable nominal-to-physical size mapping.
///
/// Both arrays have the same non-zero length and are sorted ascending.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTable"))]
pub struct ScaleTable {
	sizes: Box<[f32]>,
	scaled_sizes: Box<[f32]>,
}

impl ScaleTable {
	/// Builds a table from anchor arrays, validating every table invariant.
	pub fn new(sizes: &[f32], scaled_sizes: &[f32]) -> Result<Self, TableError> {
		if sizes.len() != scaled_sizes.len() {
			return Err(TableError::LengthMismatch {
				sizes: sizes.len(),
				scaled_sizes: scaled_sizes.len(),
			});
		}
		if sizes.is_empty() {
			return Err(TableError::Empty);
		}
		for (index, (sp, dp)) in sizes.iter().zip(scaled_sizes.iter()).enumerate() {
			if !sp.is_finite() || !dp.is_finite() {
				return Err(TableError::NonFinite { index });
			}
		}
		if let Some(index) = sizes.windows(2).position(|w| w[0] >= w[1]) {
			return Err(TableError::UnsortedSizes { index: index + 1 });
		}
		if let Some(index) = scaled_sizes.windows(2).position(|w| w[0] > w[1]) {
			return Err(TableError::UnsortedScaledSizes { index: index + 1 });
		}

		Ok(Self::from_parts(sizes.into(), scaled_sizes.into()))
	}

	/// Builds a table from arrays the caller already knows to be well formed.
	pub(crate) fn from_parts(sizes: Box<[f32]>, scaled_sizes: Box<[f32]>) -> Self {
		debug_assert_eq!(sizes.len(), scaled_sizes.len());
		debug_assert!(!sizes.is_empty());
		Self {
			sizes,
			scaled_sizes,
		}
	}

	/// A one-pair table scaling every size by `scale`.
	pub fn linear(scale: f32) -> Self {
		Self::from_parts(Box::new([1.0]), Box::new([scale]))
	}

	/// A table mapping every anchor in `axis` to itself.
	pub fn identity(axis: &[f32]) -> Self {
		Self::from_parts(axis.into(), axis.into())
	}

	/// Converts a nominal size to a physical size.
	#[inline]
	pub fn convert(&self, nominal: f32) -> f32 {
		lookup_and_interpolate(nominal, &self.sizes, &self.scaled_sizes)
	}

	/// Converts a physical size back to a nominal size.
	#[inline]
	pub fn convert_inverse(&self, physical: f32) -> f32 {
		lookup_and_interpolate(physical, &self.scaled_sizes, &self.sizes)
	}

	/// Nominal anchor sizes.
	pub fn sizes(&self) -> &[f32] {
		&self.sizes
	}

	/// Physical anchor sizes, parallel to [`Self::sizes`].
	pub fn scaled_sizes(&self) -> &[f32] {
		&self.scaled_sizes
	}

	/// Iterates `(nominal, physical)` anchor pairs.
	pub fn pairs(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
		self.sizes.iter().copied().zip(self.scaled_sizes.iter().copied())
	}

	/// Number of anchor pairs.
	pub fn len(&self) -> usize {
		self.sizes.len()
	}

	/// Always false; tables hold at least one pair.
	pub fn is_empty(&self) -> bool {
		self.sizes.is_empty()
	}
}

impl FontScaleConverter for ScaleTable {
	fn convert_sp_to_dp(&self, sp: f32) -> f32 {
		self.convert(sp)
	}

	fn convert_dp_to_sp(&self, dp: f32) -> f32 {
		self.convert_inverse(dp)
	}
}

impl fmt::Display for ScaleTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, (sp, dp)) in self.pairs().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{sp} -> {dp}")?;
		}
		f.write_str("}")
	}
}

/// Looks `value` up in `source` and maps it onto `target`.
///
/// Negative values mirror positive ones. Values past the last anchor use the
/// last pair's ratio; values before the first anchor interpolate from the
/// origin.
fn lookup_and_interpolate(value: f32, source: &[f32], target: &[f32]) -> f32 {
	let magnitude = value.abs();
	let sign = value.signum();

	let upper = match source.binary_search_by(|probe| probe.total_cmp(&magnitude)) {
		Ok(index) => return sign * target[index],
		Err(insertion) => insertion,
	};

	let last = source.len() - 1;
	if upper > last {
		let (last_source, last_target) = (source[last], target[last]);
		if last_source == 0.0 {
			return 0.0;
		}
		return value * (last_target / last_source);
	}

	let (start_source, start_target) = match upper.checked_sub(1) {
		Some(lower) => (source[lower], target[lower]),
		None => (0.0, 0.0),
	};

	sign * constrained_map(
		start_target,
		target[upper],
		start_source,
		source[upper],
		magnitude,
	)
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTable {
	sizes: Vec<f32>,
	scaled_sizes: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for ScaleTable {
	type Error = TableError;

	fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
		Self::new(&raw.sizes, &raw.scaled_sizes)
	}
}
