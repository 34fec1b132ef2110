//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.

use std::fmt;

use super::srgb::Srgb;
use super::transfer::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power.
/// They are typically in the range 0.0..=1.0 but follow the input when it
/// is out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear light values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode each channel with the exact sRGB transfer function.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

impl fmt::Display for LinearRgb {
    /// Formats as `(r, g, b)` using the shortest round-trip float text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.r, self.g, self.b)
    }
}
