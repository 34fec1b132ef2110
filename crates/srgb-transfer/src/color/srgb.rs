//! sRGB color type
//!
//! sRGB is the standard color space for display and storage of images.
//! It applies a gamma curve to linear light values for perceptual uniformity.

/// Divisor used to normalize 8-bit channel integers.
///
/// Note this is 256, not 255: a channel of 255 encodes to 0.99609375.
pub const CHANNEL_DIVISOR: f64 = 256.0;

/// A color in sRGB color space.
///
/// Values are nominally in the range 0.0..=1.0 but are not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from encoded float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit style channel integers.
    ///
    /// Each channel is divided by [`CHANNEL_DIVISOR`]. Integers outside
    /// 0..=255 are accepted and scaled the same way.
    ///
    /// # Example
    /// ```
    /// use srgb_transfer::Srgb;
    /// let color = Srgb::from_channel_bytes(128, 255, 0);
    /// assert_eq!(color.r, 0.5);
    /// assert_eq!(color.g, 0.99609375);
    /// ```
    #[inline]
    pub fn from_channel_bytes(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: r as f64 / CHANNEL_DIVISOR,
            g: g as f64 / CHANNEL_DIVISOR,
            b: b as f64 / CHANNEL_DIVISOR,
        }
    }
}
