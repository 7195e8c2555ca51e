//! Shift parameters learned from a reference/target color pair.
//!
//! Per pixel:
//! - `v_out = v * value_scale`
//! - `s_out = s * saturation_scale`
//! - `h_out = wrap(h + hue_rotation)` into `[0, 1)`
//!
//! The result is converted back to RGB, truncated and clamped to 8 bits.

use hueshift_core::{wrap_hue, Color, Error, Hsv, Result};

/// HSV delta from a reference color to a target color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftParameters {
    /// Additive hue offset in turns. Not wrapped; wrapping happens per pixel.
    pub hue_rotation: f64,
    /// Saturation multiplier (1.0 = no change).
    pub saturation_scale: f64,
    /// Value multiplier (1.0 = no change).
    pub value_scale: f64,
}

impl Default for ShiftParameters {
    fn default() -> Self {
        Self {
            hue_rotation: 0.0,
            saturation_scale: 1.0,
            value_scale: 1.0,
        }
    }
}

impl ShiftParameters {
    /// Create identity (no change).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Computes the shift that maps `reference` onto `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReferenceColor`] if the reference saturation
    /// or value is zero.
    ///
    /// ```rust
    /// use hueshift_core::Hsv;
    /// use hueshift_ops::ShiftParameters;
    ///
    /// let reference = Hsv { h: 0.9, s: 0.5, v: 0.5 };
    /// let target = Hsv { h: 0.1, s: 1.0, v: 0.25 };
    /// let p = ShiftParameters::between(reference, target).unwrap();
    /// assert!((p.hue_rotation + 0.8).abs() < 1e-12);
    /// assert_eq!(p.saturation_scale, 2.0);
    /// assert_eq!(p.value_scale, 0.5);
    /// ```
    pub fn between(reference: Hsv, target: Hsv) -> Result<Self> {
        if reference.s == 0.0 || reference.v == 0.0 {
            return Err(Error::invalid_reference(reference.s, reference.v));
        }
        Ok(Self::from_checked_reference(reference, target))
    }

    /// Delta computation for a reference already known to have non-zero
    /// saturation and value.
    #[inline]
    pub(crate) fn from_checked_reference(reference: Hsv, target: Hsv) -> Self {
        Self {
            hue_rotation: target.h - reference.h,
            saturation_scale: target.s / reference.s,
            value_scale: target.v / reference.v,
        }
    }

    /// Check if this is identity (no-op).
    pub fn is_identity(&self) -> bool {
        wrap_hue(self.hue_rotation) == 0.0
            && self.saturation_scale == 1.0
            && self.value_scale == 1.0
    }

    /// Shifts one HSV triple.
    ///
    /// Saturation and value are not clamped here; an oversaturated result
    /// is clamped when it is quantized back to a [`Color`].
    #[inline]
    pub fn shift_hsv(&self, hsv: Hsv) -> Hsv {
        Hsv {
            h: wrap_hue(hsv.h + self.hue_rotation),
            s: hsv.s * self.saturation_scale,
            v: hsv.v * self.value_scale,
        }
    }

    /// Shifts one 8-bit color.
    #[inline]
    pub fn shift_color(&self, color: Color) -> Color {
        self.shift_hsv(color.to_hsv()).to_color()
    }
}
