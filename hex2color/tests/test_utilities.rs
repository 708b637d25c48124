#![allow(unused)]

use assert_cmd::{Command, cargo};

#[cfg(windows)]
pub const BINARY_NAME: &str = "hex2color.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "hex2color";

/// Helper to create a Command for the hex2color binary.
pub fn hex2color_cmd() -> Command {
	Command::new(cargo::cargo_bin!("hex2color"))
}

/// Captured result of a single hex2color invocation.
pub struct Output {
	pub success: bool,
	pub code: i32,
	pub stdout: String,
	pub stderr: String,
}

/// Runs hex2color with the given arguments and captures its output.
pub fn hex2color_output(args: &[&str]) -> Output {
	let output = hex2color_cmd().args(args).output().expect("failed to run hex2color");
	Output {
		success: output.status.success(),
		code: output.status.code().unwrap_or(-1),
		stdout: String::from_utf8(output.stdout).unwrap(),
		stderr: String::from_utf8(output.stderr).unwrap(),
	}
}
