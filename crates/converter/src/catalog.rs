//! Hand-tuned scaling curves.
//!
//! Each curve maps the shared [`COMMON_FONT_SIZES`] axis to physical sizes
//! for one canonical scale factor. The values are readability decisions,
//! not derived data, and must stay bit-for-bit stable.

use std::sync::Arc;

use crate::error::CatalogError;
use crate::key::ScaleKey;
use crate::table::ScaleTable;

/// Scale factors below this always scale linearly.
pub const MIN_SCALE_FOR_NON_LINEAR: f32 = 1.03;

/// Nominal sizes every curve and every interpolated table is anchored on.
pub const COMMON_FONT_SIZES: [f32; 9] = [8.0, 10.0, 12.0, 14.0, 18.0, 20.0, 24.0, 30.0, 100.0];

/// Margin the lowest curve must keep above [`MIN_SCALE_FOR_NON_LINEAR`].
const LOWEST_CURVE_MARGIN: f32 = 0.01;

/// Built-in curves as `(scale, scaled sizes over COMMON_FONT_SIZES)`.
pub const CURATED_CURVES: [(f32, [f32; 9]); 5] = [
	(1.15, [9.2, 11.5, 13.8, 16.4, 19.8, 21.8, 25.2, 30.0, 100.0]),
	(1.3, [10.4, 13.0, 15.6, 18.8, 21.6, 23.6, 26.4, 30.0, 100.0]),
	(1.5, [12.0, 15.0, 18.0, 22.0, 24.0, 26.0, 28.0, 30.0, 100.0]),
	(1.8, [14.4, 18.0, 21.6, 24.4, 27.6, 30.8, 32.8, 34.8, 100.0]),
	(2.0, [16.0, 20.0, 24.0, 26.0, 30.0, 34.0, 36.0, 38.0, 100.0]),
];

/// A validated set of curves sharing one nominal axis, ordered by key.
#[derive(Debug, Clone)]
pub struct CurveCatalog {
	axis: Box<[f32]>,
	curves: Vec<(ScaleKey, Arc<ScaleTable>)>,
}

impl CurveCatalog {
	/// Returns the built-in catalog.
	///
	/// # Panics
	///
	/// Panics if the compiled-in curves fail validation. That is a curation
	/// bug with no runtime recovery.
	pub fn builtin() -> Self {
		match Self::new(&COMMON_FONT_SIZES, CURATED_CURVES) {
			Ok(catalog) => catalog,
			Err(err) => panic!("invalid built-in font scale curves: {err}"),
		}
	}

	/// Validates and assembles a catalog of curves over `axis`.
	pub fn new<S>(
		axis: &[f32],
		curves: impl IntoIterator<Item = (f32, S)>,
	) -> Result<Self, CatalogError>
	where
		S: AsRef<[f32]>,
	{
		let mut built: Vec<(ScaleKey, Arc<ScaleTable>)> = Vec::new();
		for (scale, scaled_sizes) in curves {
			let key = ScaleKey::from_scale(scale);
			let table = ScaleTable::new(axis, scaled_sizes.as_ref())
				.map_err(|source| CatalogError::Table { key, source })?;
			built.push((key, Arc::new(table)));
		}

		built.sort_by_key(|(key, _)| *key);
		if let Some(pair) = built.windows(2).find(|w| w[0].0 == w[1].0) {
			return Err(CatalogError::DuplicateKey { key: pair[0].0 });
		}

		let Some((lowest, _)) = built.first() else {
			return Err(CatalogError::Empty);
		};
		if lowest.scale() - LOWEST_CURVE_MARGIN <= MIN_SCALE_FOR_NON_LINEAR {
			return Err(CatalogError::BelowNonLinearThreshold {
				key: *lowest,
				min_scale: MIN_SCALE_FOR_NON_LINEAR,
			});
		}

		Ok(Self {
			axis: axis.into(),
			curves: built,
		})
	}

	/// The nominal axis shared by all curves.
	pub fn axis(&self) -> &[f32] {
		&self.axis
	}

	/// Curves in ascending key order.
	pub fn curves(&self) -> &[(ScaleKey, Arc<ScaleTable>)] {
		&self.curves
	}

	/// Looks up the curve for an exact key.
	pub fn get(&self, key: ScaleKey) -> Option<&Arc<ScaleTable>> {
		self.curves
			.binary_search_by_key(&key, |(k, _)| *k)
			.ok()
			.map(|index| &self.curves[index].1)
	}

	/// The identity table over [`Self::axis`], used as the 1.0x curve.
	pub fn identity(&self) -> ScaleTable {
		ScaleTable::identity(&self.axis)
	}

	/// Number of curves.
	pub fn len(&self) -> usize {
		self.curves.len()
	}

	/// Always false for a validated catalog.
	pub fn is_empty(&self) -> bool {
		self.curves.is_empty()
	}
}

impl Default for CurveCatalog {
	fn default() -> Self {
		Self::builtin()
	}
}
