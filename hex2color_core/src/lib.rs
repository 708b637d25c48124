//! Converts hex color strings into `Color::new(r, g, b);` source literals.
//!
//! The pipeline is: normalize the input, split it into three two-digit channels,
//! scale each byte into `0.0..=1.0` and render the result as a literal.
//!
//! ```
//! use hex2color_core::convert;
//!
//! assert_eq!(convert("#ff0000"), "Color::new(1.0, 0.0, 0.0);");
//! assert_eq!(convert("000000"), "Color::new(0.0, 0.0, 0.0);");
//! ```

pub mod color;
pub use color::*;

pub mod literal;
pub use literal::*;
