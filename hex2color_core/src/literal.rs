//! Rendering of channel triplets as `Color::new(r, g, b);` literals.

use crate::ChannelTriplet;
use log::trace;
use std::fmt::{self, Display};

/// Formats one channel so that it always reads as a float literal.
///
/// Whole numbers get a trailing `.0`; everything else uses the shortest
/// representation that round-trips through `f64`.
pub fn format_channel(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{value:.1}")
	} else {
		value.to_string()
	}
}

pub fn render_literal(triplet: &ChannelTriplet) -> String {
	triplet.to_string()
}

/// Full pipeline from a hex color string to a literal. Never fails; see
/// [`crate::parse_channels`] for how malformed input is handled.
pub fn convert(input: &str) -> String {
	let literal = render_literal(&ChannelTriplet::from_hex(input));
	trace!("converted {input:?} into {literal}");
	literal
}

impl Display for ChannelTriplet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (r, g, b) = self.as_tuple();
		write!(
			f,
			"Color::new({}, {}, {});",
			format_channel(r),
			format_channel(g),
			format_channel(b)
		)
	}
}
