use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fontscale")]
#[command(about = "Inspect non-linear font scale tables")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the size table resolved for a scale factor
	Table {
		/// Font scale factor (e.g. 1.3)
		scale: f32,

		/// Print JSON instead of text
		#[arg(long)]
		json: bool,
	},
	/// Convert sizes at a scale factor
	Convert {
		/// Font scale factor (e.g. 1.3)
		scale: f32,

		/// Sizes to convert
		#[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
		sizes: Vec<f32>,

		/// Convert physical sizes back to nominal sizes
		#[arg(long)]
		inverse: bool,
	},
	/// Report whether non-linear scaling is active at a scale factor
	Active {
		/// Font scale factor (e.g. 1.3)
		scale: f32,
	},
	/// List the built-in curves
	Curves {
		/// Print JSON instead of text
		#[arg(long)]
		json: bool,
	},
}
