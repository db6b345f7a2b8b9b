use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::catalog::{COMMON_FONT_SIZES, CURATED_CURVES};

/// Delegates to [`LinearInterpolator`] and counts invocations.
#[derive(Default)]
struct CountingInterpolator {
	calls: AtomicUsize,
}

impl CountingInterpolator {
	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl TableInterpolator for CountingInterpolator {
	fn interpolate(&self, axis: &[f32], start: &ScaleTable, end: &ScaleTable, t: f32) -> ScaleTable {
		self.calls.fetch_add(1, Ordering::SeqCst);
		LinearInterpolator.interpolate(axis, start, end, t)
	}
}

fn counting_factory() -> FontScaleConverterFactory<CountingInterpolator> {
	FontScaleConverterFactory::with_interpolator(
		CurveCatalog::builtin(),
		CountingInterpolator::default(),
	)
}

fn curve(scale: f32) -> [f32; 9] {
	CURATED_CURVES
		.iter()
		.find(|(s, _)| *s == scale)
		.map(|(_, c)| *c)
		.unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
	assert_eq!(actual.len(), expected.len());
	for (a, e) in actual.iter().zip(expected) {
		assert!((a - e).abs() < 1e-4, "{actual:?} != {expected:?}");
	}
}

#[rstest]
#[case(1.0)]
#[case(0.5)]
#[case(1.029)]
#[case(-2.0)]
#[case(f32::NAN)]
#[case(f32::INFINITY)]
fn inactive_scales_resolve_to_none(#[case] scale: f32) {
	let factory = FontScaleConverterFactory::new();
	assert!(!factory.is_non_linear_font_scaling_active(scale));
	assert!(factory.for_scale(scale).is_none());
}

#[test]
fn threshold_is_inclusive() {
	assert!(is_non_linear_font_scaling_active(MIN_SCALE_FOR_NON_LINEAR));
	assert!(FontScaleConverterFactory::new().for_scale(1.03).is_some());
}

#[rstest]
#[case(1.15)]
#[case(1.3)]
#[case(1.5)]
#[case(1.8)]
#[case(2.0)]
fn curated_scales_return_curated_tables(#[case] scale: f32) {
	let factory = counting_factory();
	let table = factory.for_scale(scale).unwrap();
	assert_eq!(table.sizes(), &COMMON_FONT_SIZES);
	assert_eq!(table.scaled_sizes(), &curve(scale));
	assert_eq!(factory.interpolator().calls(), 0);
	assert_eq!(factory.registry().len(), 5);
}

#[test]
fn midpoint_between_curves_is_mean() {
	let factory = FontScaleConverterFactory::new();
	let table = factory.for_scale(1.225).unwrap();
	let expected: Vec<f32> = curve(1.15)
		.iter()
		.zip(curve(1.3).iter())
		.map(|(a, b)| (a + b) / 2.0)
		.collect();
	assert_eq!(table.sizes(), &COMMON_FONT_SIZES);
	assert_close(table.scaled_sizes(), &expected);
}

#[test]
fn below_lowest_curve_interpolates_from_identity() {
	let factory = FontScaleConverterFactory::new();
	let table = factory.for_scale(1.1).unwrap();
	let t = (1.1 - 1.0) / (1.15 - 1.0);
	let expected: Vec<f32> = COMMON_FONT_SIZES
		.iter()
		.zip(curve(1.15).iter())
		.map(|(sp, dp)| sp + (dp - sp) * t)
		.collect();
	assert_close(table.scaled_sizes(), &expected);
}

#[rstest]
#[case(3.0)]
#[case(2.5)]
#[case(10.0)]
fn beyond_highest_curve_is_linear(#[case] scale: f32) {
	let factory = counting_factory();
	let table = factory.for_scale(scale).unwrap();
	assert_eq!(table.len(), 1);
	assert_eq!(table.convert(1.0), scale);
	for sp in [0.5, 8.0, 14.0, 100.0, 400.0] {
		assert_eq!(table.convert(sp), scale * sp);
	}
	assert_eq!(factory.interpolator().calls(), 0);
}

#[test]
fn cached_scale_is_not_recomputed() {
	let factory = counting_factory();
	let first = factory.for_scale(1.4).unwrap();
	let second = factory.for_scale(1.4).unwrap();

	assert_eq!(factory.interpolator().calls(), 1);
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(first.scaled_sizes(), second.scaled_sizes());
	assert_eq!(factory.registry().len(), 6);
}

#[test]
fn scales_in_the_same_hundredth_share_a_table() {
	let factory = counting_factory();
	let first = factory.for_scale(1.401).unwrap();
	let second = factory.for_scale(1.399).unwrap();
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(factory.interpolator().calls(), 1);
}

#[test]
fn cached_tables_bracket_later_requests() {
	let factory = FontScaleConverterFactory::new();
	let at_140 = factory.for_scale(1.4).unwrap();
	let at_145 = factory.for_scale(1.45).unwrap();
	let at_150 = factory.for_scale(1.5).unwrap();

	let expected: Vec<f32> = at_140
		.scaled_sizes()
		.iter()
		.zip(at_150.scaled_sizes())
		.map(|(a, b)| (a + b) / 2.0)
		.collect();
	assert_close(at_145.scaled_sizes(), &expected);
}

#[test]
fn interpolation_lands_between_neighbours() {
	let factory = FontScaleConverterFactory::new();
	let low = factory.for_scale(1.5).unwrap();
	let mid = factory.for_scale(1.65).unwrap();
	let high = factory.for_scale(1.8).unwrap();
	for sp in COMMON_FONT_SIZES {
		assert!(low.convert(sp) <= mid.convert(sp) + 1e-4);
		assert!(mid.convert(sp) <= high.convert(sp) + 1e-4);
	}
}

#[test]
fn scale_font_size_falls_back_to_linear() {
	let factory = FontScaleConverterFactory::new();
	assert_eq!(factory.scale_font_size(14.0, 1.0), 14.0);
	assert_eq!(factory.scale_font_size(10.0, 0.85), 8.5);
	assert_eq!(factory.scale_font_size(14.0, 2.0), 26.0);
	assert_eq!(factory.scale_font_size(14.0, 1.15), 16.4);
}

#[test]
fn custom_catalog_drives_resolution() {
	let catalog = CurveCatalog::new(&[10.0, 20.0], [(1.5, [20.0, 25.0])]).unwrap();
	let factory = FontScaleConverterFactory::with_catalog(catalog);

	let table = factory.for_scale(1.25).unwrap();
	assert_eq!(table.sizes(), &[10.0, 20.0]);
	assert_close(table.scaled_sizes(), &[15.0, 22.5]);

	let linear = factory.for_scale(1.75).unwrap();
	assert_eq!(linear.convert(20.0), 35.0);
}
