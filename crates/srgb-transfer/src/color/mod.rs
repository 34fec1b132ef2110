//! Color types and the sRGB transfer function
//!
//! Encoded ([`Srgb`]) and linear ([`LinearRgb`]) triples are distinct types;
//! the only way from one to the other is [`srgb_to_linear`] applied per
//! channel through `LinearRgb::from`.
//!
//! # Example
//!
//! ```
//! use srgb_transfer::{LinearRgb, Srgb};
//!
//! let linear = LinearRgb::from(Srgb::new(0.0, 0.5, 1.0));
//! assert_eq!(linear.r, 0.0);
//! assert_eq!(linear.b, 1.0);
//! ```

mod linear_rgb;
mod srgb;
mod transfer;

pub use linear_rgb::LinearRgb;
pub use srgb::{Srgb, CHANNEL_DIVISOR};
pub use transfer::{srgb_to_linear, LINEAR_THRESHOLD};
