//! Scale-factor resolution with on-demand table synthesis.
//!
//! [`FontScaleConverterFactory::for_scale`] answers from the registry when
//! the quantized key is already cached. On a miss it brackets the requested
//! scale between its neighbouring entries and builds a new table:
//!
//! * above every entry: a one-pair linear table `(1.0, scale)`;
//! * below every entry: interpolation from the identity table at 1.0x toward
//!   the lowest entry;
//! * otherwise: interpolation between the entries just below and above.
//!
//! The new table is cached under its key before it is returned, so later
//! requests at the same rounded scale are lock-free hits.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::{CurveCatalog, MIN_SCALE_FOR_NON_LINEAR};
use crate::key::ScaleKey;
use crate::math::{constrained_map, lerp};
use crate::registry::Registry;
use crate::table::ScaleTable;

/// Returns true if non-linear curves apply at `font_scale`.
///
/// False for linear scaling, no scaling, and non-finite scales.
#[inline]
pub fn is_non_linear_font_scaling_active(font_scale: f32) -> bool {
	font_scale.is_finite() && font_scale >= MIN_SCALE_FOR_NON_LINEAR
}

/// Builds the table for a scale lying between two known tables.
pub trait TableInterpolator: Send + Sync {
	/// Blends `start` toward `end` by `t` in `[0, 1]`, sampling at each `axis` size.
	fn interpolate(&self, axis: &[f32], start: &ScaleTable, end: &ScaleTable, t: f32) -> ScaleTable;
}

/// Pointwise linear blend of the two tables' outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl TableInterpolator for LinearInterpolator {
	fn interpolate(&self, axis: &[f32], start: &ScaleTable, end: &ScaleTable, t: f32) -> ScaleTable {
		let scaled: Box<[f32]> = axis
			.iter()
			.map(|&sp| lerp(start.convert(sp), end.convert(sp), t))
			.collect();
		ScaleTable::from_parts(axis.into(), scaled)
	}
}

/// Resolves scale factors to cached [`ScaleTable`]s.
pub struct FontScaleConverterFactory<I = LinearInterpolator> {
	catalog: CurveCatalog,
	identity: ScaleTable,
	registry: Registry,
	interpolator: I,
}

impl FontScaleConverterFactory {
	/// Creates a factory over the built-in curves.
	pub fn new() -> Self {
		Self::with_catalog(CurveCatalog::builtin())
	}

	/// Creates a factory over a custom catalog.
	pub fn with_catalog(catalog: CurveCatalog) -> Self {
		Self::with_interpolator(catalog, LinearInterpolator)
	}
}

impl Default for FontScaleConverterFactory {
	fn default() -> Self {
		Self::new()
	}
}

impl<I: TableInterpolator> FontScaleConverterFactory<I> {
	/// Creates a factory with a custom interpolation strategy.
	pub fn with_interpolator(catalog: CurveCatalog, interpolator: I) -> Self {
		let registry = Registry::from_catalog(&catalog);
		let identity = catalog.identity();
		Self {
			catalog,
			identity,
			registry,
			interpolator,
		}
	}

	/// See [`is_non_linear_font_scaling_active`].
	#[inline]
	pub fn is_non_linear_font_scaling_active(&self, font_scale: f32) -> bool {
		is_non_linear_font_scaling_active(font_scale)
	}

	/// Finds or builds the table for `font_scale`.
	///
	/// Returns `None` when non-linear scaling does not apply; callers then
	/// scale linearly (`size * font_scale`).
	pub fn for_scale(&self, font_scale: f32) -> Option<Arc<ScaleTable>> {
		if !is_non_linear_font_scaling_active(font_scale) {
			trace!(scale = font_scale, "below non-linear threshold");
			return None;
		}

		let key = ScaleKey::from_scale(font_scale);
		let snap = self.registry.snapshot();
		let higher = match snap.search(key) {
			Ok(index) => {
				trace!(scale = font_scale, %key, "font scale table cache hit");
				return snap.value_at(index).cloned();
			}
			Err(insertion) => insertion,
		};

		let table = match snap.entry_at(higher) {
			None => {
				debug!(scale = font_scale, %key, kind = "linear", "building font scale table");
				ScaleTable::linear(font_scale)
			}
			Some((end_key, end)) => {
				let (start_scale, start) = match higher.checked_sub(1).and_then(|i| snap.entry_at(i)) {
					Some((start_key, start)) => (start_key.scale(), start.as_ref()),
					None => (1.0, &self.identity),
				};
				let t = constrained_map(0.0, 1.0, start_scale, end_key.scale(), font_scale);
				debug!(
					scale = font_scale,
					%key,
					kind = "interpolated",
					from = start_scale,
					to = end_key.scale(),
					t,
					"building font scale table"
				);
				self.interpolator.interpolate(self.catalog.axis(), start, end, t)
			}
		};

		let table = Arc::new(table);
		self.registry.put(key, Arc::clone(&table));
		Some(table)
	}

	/// Scales one nominal size, falling back to `nominal * font_scale` when
	/// non-linear scaling does not apply.
	pub fn scale_font_size(&self, nominal: f32, font_scale: f32) -> f32 {
		match self.for_scale(font_scale) {
			Some(table) => table.convert(nominal),
			None => nominal * font_scale,
		}
	}

	/// The curated curves this factory was built from.
	pub fn catalog(&self) -> &CurveCatalog {
		&self.catalog
	}

	/// The table cache.
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn interpolator(&self) -> &I {
		&self.interpolator
	}
}

impl<I> std::fmt::Debug for FontScaleConverterFactory<I> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FontScaleConverterFactory")
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
