//! Error types for hueshift operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure mode of the color shift core:
//! - Reference colors that cannot anchor a shift (zero saturation or value)
//! - Color inputs outside their valid ranges (channels, hex strings, HSV)
//! - Image buffers whose sizes do not line up
//!
//! All errors are detected synchronously at the point of the invalid input.
//! None of them are transient, so nothing in hueshift retries.
//!
//! # Usage
//!
//! ```rust
//! use hueshift_core::{Color, Error};
//!
//! let err = Color::try_from_channels(300, 0, 0).unwrap_err();
//! assert!(err.is_color_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building colors, images, or shift parameters.
///
/// # Categories
///
/// - **Color errors**: [`InvalidReferenceColor`](Error::InvalidReferenceColor), [`InvalidColor`](Error::InvalidColor)
/// - **Dimension errors**: [`DimensionMismatch`](Error::DimensionMismatch), [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The reference color has zero saturation or zero value.
    ///
    /// Shift scale factors are computed by dividing by the reference
    /// saturation and value, so grays and black cannot be references.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hueshift_core::Error;
    ///
    /// let err = Error::invalid_reference(0.0, 0.5);
    /// assert!(err.to_string().contains("saturation"));
    /// ```
    #[error("invalid reference color: saturation {saturation} and value {value} must both be non-zero")]
    InvalidReferenceColor {
        /// Reference saturation in [0, 1]
        saturation: f64,
        /// Reference value in [0, 1]
        value: f64,
    },

    /// A supplied color component is outside its valid range.
    ///
    /// RGB channels must be in [0, 255] (or [0, 1] when normalized) and HSV
    /// components in [0, 1].
    #[error("invalid color: {reason}")]
    InvalidColor {
        /// What was wrong with the input
        reason: String,
    },

    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: u32,
        /// First image height
        a_height: u32,
        /// Second image width
        b_width: u32,
        /// Second image height
        b_height: u32,
    },

    /// Pixel data does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidReferenceColor`] error.
    #[inline]
    pub fn invalid_reference(saturation: f64, value: f64) -> Self {
        Self::InvalidReferenceColor { saturation, value }
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was caused by a color input.
    #[inline]
    pub fn is_color_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColor { .. } | Self::InvalidReferenceColor { .. }
        )
    }

    /// Returns `true` if this error was caused by image dimensions.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference() {
        let err = Error::invalid_reference(0.0, 0.75);
        let msg = err.to_string();
        assert!(msg.contains("0.75"));
        assert!(err.is_color_error());
        assert!(!err.is_dimension_error());
    }

    #[test]
    fn test_invalid_color() {
        let err = Error::invalid_color("red channel 300 outside [0, 255]");
        assert!(err.to_string().contains("300"));
        assert!(err.is_color_error());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 100), (200, 200));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x200"));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 16 pixels, got 3");
        assert!(err.to_string().contains("4x4"));
        assert!(err.is_dimension_error());
    }
}
