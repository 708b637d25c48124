//! Hex color parsing.
//!
//! Parsing is lenient by default: a channel that is not exactly two hex digits
//! becomes `0`. [`parse_hex_color_strict`] rejects such input instead.

use anyhow::{Result, bail, ensure};
use log::trace;

/// Red, green and blue channels, each scaled into `0.0..=1.0` when built from bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelTriplet([f64; 3]);

impl ChannelTriplet {
	pub const BLACK: ChannelTriplet = ChannelTriplet([0.0, 0.0, 0.0]);
	pub const WHITE: ChannelTriplet = ChannelTriplet([1.0, 1.0, 1.0]);

	pub fn new(r: f64, g: f64, b: f64) -> Self {
		Self([r, g, b])
	}

	/// Scales every byte by `1 / 255`.
	pub fn from_bytes(bytes: [u8; 3]) -> Self {
		Self(bytes.map(|byte| f64::from(byte) / 255.0))
	}

	/// Lenient conversion of a hex color string, see [`normalize`] and [`parse_channels`].
	///
	/// ```
	/// use hex2color_core::ChannelTriplet;
	///
	/// assert_eq!(ChannelTriplet::from_hex("#FFFFFF"), ChannelTriplet::WHITE);
	/// assert_eq!(ChannelTriplet::from_hex("  000000 "), ChannelTriplet::BLACK);
	/// ```
	pub fn from_hex(input: &str) -> Self {
		let bytes = parse_channels(normalize(input));
		trace!("parsed {input:?} into bytes {bytes:?}");
		Self::from_bytes(bytes)
	}

	pub fn channels(&self) -> [f64; 3] {
		self.0
	}

	pub fn as_tuple(&self) -> (f64, f64, f64) {
		let [r, g, b] = self.0;
		(r, g, b)
	}

	/// Scales back to bytes, rounding to the nearest value and clamping to `0..=255`.
	pub fn to_bytes(&self) -> [u8; 3] {
		self.channels().map(|channel| (channel * 255.0).round().clamp(0.0, 255.0) as u8)
	}
}

/// Drops a single leading `#`; otherwise trims surrounding whitespace.
///
/// Whitespace after a `#` is kept, so `"# 1a2b3c"` does not normalize to `"1a2b3c"`.
pub fn normalize(input: &str) -> &str {
	match input.strip_prefix('#') {
		Some(rest) => rest,
		None => input.trim(),
	}
}

/// Splits `cleaned` into the character ranges `[0, 2)`, `[2, 4)` and `[4, 6)`
/// and parses each as a base-16 byte.
///
/// Characters past the sixth are ignored. A range that is shorter than two
/// characters or contains a non-hex character yields `0`.
pub fn parse_channels(cleaned: &str) -> [u8; 3] {
	let chars: Vec<char> = cleaned.chars().collect();
	std::array::from_fn(|i| parse_byte(chars.get(i * 2..i * 2 + 2).unwrap_or_default()))
}

fn parse_byte(chunk: &[char]) -> u8 {
	match chunk {
		[high, low] => match (high.to_digit(16), low.to_digit(16)) {
			(Some(high), Some(low)) => (high * 16 + low) as u8,
			_ => 0,
		},
		_ => 0,
	}
}

/// Parses a hex color string, failing unless it normalizes to exactly six hex digits.
///
/// ```
/// use hex2color_core::parse_hex_color_strict;
///
/// assert_eq!(parse_hex_color_strict("#FF5733").unwrap(), [255, 87, 51]);
/// assert!(parse_hex_color_strict("GG0000").is_err());
/// ```
pub fn parse_hex_color_strict(input: &str) -> Result<[u8; 3]> {
	let hex = normalize(input);

	ensure!(
		hex.chars().count() == 6,
		"Invalid hex color '{hex}': expected 6 hex characters"
	);

	if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
		bail!("Invalid hex color '{hex}': '{c}' is not a hex digit");
	}

	Ok(parse_channels(hex))
}
