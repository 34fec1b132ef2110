//! The sRGB electro-optical transfer function (IEC 61966-2-1).

/// Upper bound (inclusive) of the linear segment near black.
pub const LINEAR_THRESHOLD: f64 = 0.04045;

/// Decode one sRGB-encoded channel value into linear light.
///
/// Values at or below [`LINEAR_THRESHOLD`] use the linear segment, everything
/// else the 2.4 power-law segment. The input is not clamped; values outside
/// 0.0..=1.0 follow the same two formulas (negative inputs take the linear
/// branch).
///
/// # Example
/// ```
/// use srgb_transfer::srgb_to_linear;
///
/// assert_eq!(srgb_to_linear(0.0), 0.0);
/// assert_eq!(srgb_to_linear(1.0), 1.0);
/// ```
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= LINEAR_THRESHOLD {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
