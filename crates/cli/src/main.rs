//! `fontscale` binary: inspect the tables the converter resolves.

mod cli;
mod report;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Command};
use fontscale_converter::{FontScaleConverterFactory, TableInterpolator};
use report::{TableReport, convert_sizes, write_curves};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let factory = FontScaleConverterFactory::new();
	let stdout = std::io::stdout();
	run(&factory, cli.command, &mut stdout.lock())
}

fn run<I: TableInterpolator>(
	factory: &FontScaleConverterFactory<I>,
	command: Command,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	match command {
		Command::Table { scale, json } => {
			ensure_finite(scale)?;
			let report = TableReport::resolve(factory, scale);
			debug!(scale, non_linear = report.non_linear, "resolved table");
			if json {
				serde_json::to_writer_pretty(&mut *out, &report)?;
				writeln!(out)?;
			} else {
				report.write_text(out)?;
			}
		}
		Command::Convert {
			scale,
			sizes,
			inverse,
		} => {
			ensure_finite(scale)?;
			for (size, converted) in convert_sizes(factory, scale, &sizes, inverse) {
				writeln!(out, "{size} -> {converted}")?;
			}
		}
		Command::Active { scale } => {
			writeln!(out, "{}", factory.is_non_linear_font_scaling_active(scale))?;
		}
		Command::Curves { json } => write_curves(out, factory.catalog(), json)?,
	}
	Ok(())
}

fn ensure_finite(scale: f32) -> anyhow::Result<()> {
	if !scale.is_finite() || scale <= 0.0 {
		anyhow::bail!("font scale must be a positive finite number, got {scale}");
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("FONTSCALE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("fontscale_converter=trace,debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
