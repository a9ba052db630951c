//! A minimal RGB color type, as a non-numeric range value.
//!
//! Scales are generic over their range values; [`Rgb`] is the one
//! non-numeric value type this crate ships, so color gradients can be driven
//! through the same piecewise machinery as numbers. Parsing color strings
//! and color-space conversions are out of scope.

use crate::interpolate::Interpolate;

/// An 8-bit-per-channel RGB color.
///
/// # Examples
///
/// ```rust
/// use skala::{Interpolate, color::Rgb};
///
/// let mid = Rgb::interpolate(&Rgb::RED, &Rgb::BLUE, 0.5);
/// assert_eq!(mid, Rgb::new(128, 0, 128));
/// assert_eq!(mid.to_string(), "rgb(128, 0, 128)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 128, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Blends one channel in f64 space, then rounds and saturates.
/// A NaN position collapses the channel to 0.
fn blend_channel(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) * (1.0 - t) + f64::from(b) * t;
    v.round().clamp(0.0, 255.0) as u8
}

impl Interpolate for Rgb {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: blend_channel(a.r, b.r, t),
            g: blend_channel(a.g, b.g, t),
            b: blend_channel(a.b, b.b, t),
        }
    }

    // Channels are already quantized; the rounding variant is the same blend.

    fn to_f64(&self) -> Option<f64> {
        None
    }
}
