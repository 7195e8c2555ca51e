//! 8-bit RGB color type.
//!
//! [`Color`] is the pixel type of [`crate::Image`] and the input type of
//! the shift engine. Channels are `u8`, so a constructed `Color` is always
//! in range; the fallible constructors ([`Color::try_from_channels`],
//! [`Color::from_normalized`], [`Color::from_hex`]) are where malformed
//! inputs are rejected with [`Error::InvalidColor`].
//!
//! # Example
//!
//! ```rust
//! use hueshift_core::Color;
//!
//! let orange = Color::from_hex("#F37502").unwrap();
//! assert_eq!(orange, Color::new(243, 117, 2));
//! assert_eq!(orange.to_string(), "#F37502");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::hsv::{quantize, rgb_to_hsv, Hsv};
use crate::{Error, Result};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Creates a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from wide integer channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any channel is outside `[0, 255]`.
    ///
    /// ```rust
    /// use hueshift_core::Color;
    ///
    /// assert!(Color::try_from_channels(0, 128, 255).is_ok());
    /// assert!(Color::try_from_channels(0, -1, 255).is_err());
    /// ```
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, x: i64| {
            u8::try_from(x)
                .map_err(|_| Error::invalid_color(format!("{name} channel {x} outside [0, 255]")))
        };
        Ok(Self::new(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Creates a color from channels normalized to `[0, 1]`.
    ///
    /// Channels are scaled by 255 and truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any channel is not a finite number
    /// in `[0, 1]`.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Result<Self> {
        for (name, x) in [("red", r), ("green", g), ("blue", b)] {
            if !(0.0..=1.0).contains(&x) {
                return Err(Error::invalid_color(format!(
                    "{name} channel {x} outside [0, 1]"
                )));
            }
        }
        Ok(Self::new(quantize(r), quantize(g), quantize(b)))
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for anything other than six hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(format!(
                "expected #RRGGBB, got {s:?}"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Error::invalid_color(format!("{s:?}: {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the channels divided by 255.
    #[inline]
    pub fn to_normalized(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Converts to HSV.
    ///
    /// ```rust
    /// use hueshift_core::Color;
    ///
    /// let hsv = Color::new(0, 0, 255).to_hsv();
    /// assert!((hsv.h - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.to_normalized();
        let (h, s, v) = rgb_to_hsv(r, g, b);
        Hsv { h, s, v }
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
