//! # hex2color
//!
//! Turns a hex color copied from a design tool into a ready-to-paste
//! `Color::new(r, g, b);` literal.
//!
//! The command-line layer lives here so it can be driven with an explicit
//! argument list; the binary in `main.rs` only adds logging and exit codes.
//!
//! ```
//! let output = hex2color::run(["hex2color", "#ff0000"]).unwrap();
//! assert_eq!(output, "\n Color::new(1.0, 0.0, 0.0); \n");
//! ```

use clap::{CommandFactory, Parser};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use hex2color_core::{ChannelTriplet, parse_hex_color_strict, render_literal};
use log::debug;
use std::ffi::OsString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
	#[error(transparent)]
	Arguments(#[from] clap::Error),

	#[error("Must provide correct hex string format: FFFFFF or #FFFFFF")]
	InvalidInputLength { length: usize },

	#[error(transparent)]
	InvalidHexDigits(anyhow::Error),
}

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
)]
pub struct Cli {
	/// hex color to convert, e.g. 1a2b3c or #1a2b3c
	#[arg(value_name = "HEX_STRING", allow_hyphen_values = true)]
	pub hex: Option<String>,

	/// reject characters that are not hex digits
	/// instead of reading their channel as 0
	#[arg(long, verbatim_doc_comment)]
	pub strict: bool,

	#[command(flatten)]
	pub verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

impl Cli {
	pub fn try_parse_args<I, T>(args: I) -> Result<Self, CliError>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		Ok(Self::try_parse_from(args)?)
	}
}

/// Returns the text to print: the usage when no hex string is given,
/// otherwise the literal framed as `\n <literal> \n`.
pub fn run_cli(cli: &Cli) -> Result<String, CliError> {
	let Some(hex) = cli.hex.as_deref() else {
		return Ok(Cli::command().render_help().to_string());
	};

	let length = hex.chars().count();
	if !(6..=7).contains(&length) {
		return Err(CliError::InvalidInputLength { length });
	}

	let triplet = if cli.strict {
		let bytes = parse_hex_color_strict(hex).map_err(CliError::InvalidHexDigits)?;
		ChannelTriplet::from_bytes(bytes)
	} else {
		ChannelTriplet::from_hex(hex)
	};
	let literal = render_literal(&triplet);
	debug!("converted {hex:?} (bytes {:?}) into {literal}", triplet.to_bytes());

	Ok(format!("\n {literal} \n"))
}

pub fn run<I, T>(args: I) -> Result<String, CliError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let cli = Cli::try_parse_args(args)?;
	run_cli(&cli)
}
