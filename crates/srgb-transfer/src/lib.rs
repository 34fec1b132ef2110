//! srgb-transfer: sRGB to linear RGB conversion
//!
//! This library provides the IEC 61966-2-1 decoding curve and the textual
//! color formats accepted by the `linrgb` tool.
//!
//! # Quick Start
//!
//! ```
//! use srgb_transfer::{InputFormat, LinearRgb};
//!
//! let encoded = InputFormat::Decimal.parse("0.2 0.5 0.9").unwrap();
//! let linear = LinearRgb::from(encoded);
//! println!("{linear}");
//! ```
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded channel values, as typed by the user
//! - [`LinearRgb`]: light-intensity-proportional values, as printed
//!
//! # Transfer Function
//!
//! ```text
//! s <= 0.04045:  l = s / 12.92
//! otherwise:     l = ((s + 0.055) / 1.055) ^ 2.4
//! ```
//!
//! The threshold is inclusive on the linear side. Inputs are neither clamped
//! nor validated.
//!
//! # Input Formats
//!
//! | Selector | Format | Example | Normalization |
//! |----------|--------|---------|---------------|
//! | 0 | [`InputFormat::Decimal`] | `0.2 0.5 0.9` | none |
//! | 1 | [`InputFormat::Byte`] | `128 128 128` | divide by 256 |
//! | 2 | [`InputFormat::Hex`] | `EECCFF` | divide by 256 |
//!
//! Byte and hex channels are divided by 256, so the largest 8-bit value
//! encodes to 0.99609375 rather than 1.0.

pub mod color;
pub mod format;


pub use color::{srgb_to_linear, LinearRgb, Srgb};
pub use format::{InputFormat, ParseColorError};
