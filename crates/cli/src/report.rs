//! Text and JSON rendering of resolved tables.

use std::io::Write;

use fontscale_converter::{
	CurveCatalog, FontScaleConverterFactory, ScaleKey, ScaleTable, TableInterpolator,
};
use serde::Serialize;

/// What the factory resolved for one scale factor.
#[derive(Debug, Serialize)]
pub struct TableReport {
	pub scale: f32,
	pub non_linear: bool,
	pub key: Option<ScaleKey>,
	pub table: Option<ScaleTable>,
}

impl TableReport {
	pub fn resolve<I: TableInterpolator>(factory: &FontScaleConverterFactory<I>, scale: f32) -> Self {
		let table = factory.for_scale(scale);
		Self {
			scale,
			non_linear: table.is_some(),
			key: table.as_ref().map(|_| ScaleKey::from_scale(scale)),
			table: table.as_deref().cloned(),
		}
	}

	pub fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
		let Some(table) = &self.table else {
			return writeln!(out, "scale {}: linear (size x {})", self.scale, self.scale);
		};
		writeln!(out, "scale {}:", self.scale)?;
		for (sp, dp) in table.pairs() {
			writeln!(out, "  {sp:>6} -> {dp}")?;
		}
		Ok(())
	}
}

/// Converts `sizes` at `scale`, linearly when non-linear scaling is inactive.
pub fn convert_sizes<I: TableInterpolator>(
	factory: &FontScaleConverterFactory<I>,
	scale: f32,
	sizes: &[f32],
	inverse: bool,
) -> Vec<(f32, f32)> {
	let table = factory.for_scale(scale);
	sizes
		.iter()
		.map(|&size| {
			let converted = match (&table, inverse) {
				(Some(table), false) => table.convert(size),
				(Some(table), true) => table.convert_inverse(size),
				(None, false) => size * scale,
				(None, true) => size / scale,
			};
			(size, converted)
		})
		.collect()
}

#[derive(Serialize)]
struct CurveReport<'a> {
	scale: f32,
	table: &'a ScaleTable,
}

pub fn write_curves(out: &mut impl Write, catalog: &CurveCatalog, json: bool) -> anyhow::Result<()> {
	if json {
		let curves: Vec<CurveReport<'_>> = catalog
			.curves()
			.iter()
			.map(|(key, table)| CurveReport {
				scale: key.scale(),
				table,
			})
			.collect();
		serde_json::to_writer_pretty(&mut *out, &curves)?;
		writeln!(out)?;
		return Ok(());
	}

	write!(out, "{:>6}", "sp")?;
	for (key, _) in catalog.curves() {
		write!(out, " {:>6}", key.to_string())?;
	}
	writeln!(out)?;
	for (row, sp) in catalog.axis().iter().enumerate() {
		write!(out, "{sp:>6}")?;
		for (_, table) in catalog.curves() {
			write!(out, " {:>6}", table.scaled_sizes()[row])?;
		}
		writeln!(out)?;
	}
	Ok(())
}
