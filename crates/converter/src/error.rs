use crate::key::ScaleKey;

/// Rejected [`ScaleTable`](crate::ScaleTable) arrays.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
	#[error("table must have at least one size pair")]
	Empty,

	#[error("array lengths must match: {sizes} sizes, {scaled_sizes} scaled sizes")]
	LengthMismatch { sizes: usize, scaled_sizes: usize },

	#[error("non-finite value at index {index}")]
	NonFinite { index: usize },

	#[error("nominal sizes must be strictly increasing (index {index})")]
	UnsortedSizes { index: usize },

	#[error("scaled sizes must be non-decreasing (index {index})")]
	UnsortedScaledSizes { index: usize },
}

/// Rejected [`CurveCatalog`](crate::CurveCatalog) contents.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("catalog has no curves")]
	Empty,

	#[error("duplicate curve for scale {key}")]
	DuplicateKey { key: ScaleKey },

	#[error(
		"lowest curve at scale {key} is too close to the non-linear threshold {min_scale}; \
		 only apply non-linear scaling to font scales > 1"
	)]
	BelowNonLinearThreshold { key: ScaleKey, min_scale: f32 },

	#[error("invalid curve for scale {key}: {source}")]
	Table {
		key: ScaleKey,
		#[source]
		source: TableError,
	},
}
