//! HSV color model and RGB conversions.
//!
//! Hue is expressed as a fraction of a full turn in `[0, 1)` rather than in
//! degrees, so a hue rotation is a plain addition followed by [`wrap_hue`].
//! Saturation and value are in `[0, 1]`.
//!
//! The conversions use the hexcone model: value is the largest RGB
//! component, saturation is chroma relative to value, and hue is the
//! position around the six-sided cone.
//!
//! ```text
//!   0      1/6     2/6     3/6     4/6     5/6      1
//!   |  red  | yellow| green | cyan  | blue  |magenta|
//! ```
//!
//! # Example
//!
//! ```rust
//! use hueshift_core::hsv::{hsv_to_rgb, rgb_to_hsv};
//!
//! let (h, s, v) = rgb_to_hsv(0.0, 0.0, 1.0);
//! assert!((h - 2.0 / 3.0).abs() < 1e-12);
//! assert_eq!((s, v), (1.0, 1.0));
//!
//! let (r, g, b) = hsv_to_rgb(h, s, v);
//! assert!(r.abs() < 1e-12 && g.abs() < 1e-12 && (b - 1.0).abs() < 1e-12);
//! ```

use crate::{Color, Error, Result};

/// An HSV triple.
///
/// Fields are public so shifted values, which may legitimately leave the
/// nominal ranges (a saturation scale of 3 turns `s = 0.9` into `2.7`), can
/// be carried without validation. Use [`Hsv::new`] for inputs coming from
/// outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue as a fraction of a full turn, `[0, 1)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value, `[0, 1]`.
    pub v: f64,
}

impl Hsv {
    /// Creates a validated HSV triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any component is not a finite
    /// number in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hueshift_core::Hsv;
    ///
    /// assert!(Hsv::new(0.5, 1.0, 1.0).is_ok());
    /// assert!(Hsv::new(0.5, 1.5, 1.0).is_err());
    /// ```
    pub fn new(h: f64, s: f64, v: f64) -> Result<Self> {
        for (name, x) in [("hue", h), ("saturation", s), ("value", v)] {
            if !(0.0..=1.0).contains(&x) {
                return Err(Error::invalid_color(format!(
                    "{name} {x} outside [0, 1]"
                )));
            }
        }
        Ok(Self { h, s, v })
    }

    /// Converts to an 8-bit color.
    ///
    /// Each channel is scaled by 255, truncated toward zero and clamped into
    /// `[0, 255]`, so out-of-range saturation or value never wraps.
    pub fn to_color(self) -> Color {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Color::new(quantize(r), quantize(g), quantize(b))
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        color.to_hsv()
    }
}

/// Wraps a hue into `[0, 1)`.
///
/// Equivalent to repeatedly adding or subtracting one full turn.
///
/// ```rust
/// use hueshift_core::wrap_hue;
///
/// assert!((wrap_hue(0.05 - 0.8) - 0.25).abs() < 1e-12);
/// assert!((wrap_hue(1.25) - 0.25).abs() < 1e-12);
/// assert_eq!(wrap_hue(1.0), 0.0);
/// ```
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Converts normalized RGB to HSV.
///
/// Grays (including black) have hue 0 and saturation 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let v = max_c;
    if max_c == min_c {
        return (0.0, 0.0, v);
    }
    let chroma = max_c - min_c;
    let s = chroma / max_c;

    // distance of each channel from the max, relative to chroma
    let rc = (max_c - r) / chroma;
    let gc = (max_c - g) / chroma;
    let bc = (max_c - b) / chroma;

    let h = if r == max_c {
        bc - gc
    } else if g == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (wrap_hue(h / 6.0), s, v)
}

/// Converts HSV to normalized RGB.
///
/// Hue is taken modulo one turn. Saturation or value outside `[0, 1]`
/// produce channels outside `[0, 1]`; callers clamp when quantizing.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scales a normalized channel to 8 bits: truncate toward zero, then clamp.
#[inline]
pub(crate) fn quantize(x: f64) -> u8 {
    (x * 255.0).trunc().clamp(0.0, 255.0) as u8
}
