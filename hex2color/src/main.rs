use anyhow::Result;
use hex2color::{Cli, CliError, run_cli};

// Main function for running the command-line interface
fn main() -> Result<()> {
	let cli = match Cli::try_parse_args(std::env::args_os()) {
		Ok(cli) => cli,
		// clap prints help, version and usage errors itself and picks the exit code
		Err(CliError::Arguments(e)) => e.exit(),
		Err(e) => return Err(e.into()),
	};

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	let output = run_cli(&cli)?;
	println!("{output}");

	Ok(())
}
