//! Non-linear font scaling.
//!
//! Maps nominal text sizes to physical sizes for an accessibility font-scale
//! factor using hand-tuned curves instead of a flat multiplier, so large text
//! grows less than small text.
//!
//! ```
//! use fontscale_converter::for_scale;
//!
//! let table = for_scale(1.15).expect("non-linear at 1.15x");
//! assert_eq!(table.convert(14.0), 16.4);
//! assert!(for_scale(1.0).is_none());
//! ```

/// Hand-tuned curves and the non-linear threshold.
pub mod catalog;
/// Error types.
pub mod error;
/// Scale-factor resolution and table synthesis.
pub mod factory;
/// Quantized scale keys.
pub mod key;
/// Interpolation helpers.
pub mod math;
/// Copy-on-write table cache.
pub mod registry;
/// Size lookup tables.
pub mod table;

use std::sync::{Arc, LazyLock};

pub use catalog::{COMMON_FONT_SIZES, CURATED_CURVES, CurveCatalog, MIN_SCALE_FOR_NON_LINEAR};
pub use error::{CatalogError, TableError};
pub use factory::{
	FontScaleConverterFactory, LinearInterpolator, TableInterpolator,
	is_non_linear_font_scaling_active,
};
pub use key::{SCALE_KEY_MULTIPLIER, ScaleKey};
pub use registry::{Registry, Snapshot};
pub use table::{FontScaleConverter, ScaleTable};

static GLOBAL: LazyLock<FontScaleConverterFactory> = LazyLock::new(FontScaleConverterFactory::new);

/// Returns the process-wide factory over the built-in curves.
pub fn global() -> &'static FontScaleConverterFactory {
	&GLOBAL
}

/// Resolves `font_scale` against the process-wide factory.
///
/// See [`FontScaleConverterFactory::for_scale`].
pub fn for_scale(font_scale: f32) -> Option<Arc<ScaleTable>> {
	GLOBAL.for_scale(font_scale)
}

/// Scales `nominal` against the process-wide factory, linearly when
/// non-linear scaling does not apply.
pub fn scale_font_size(nominal: f32, font_scale: f32) -> f32 {
	GLOBAL.scale_font_size(nominal, font_scale)
}
