//! # hueshift-core
//!
//! Core types for hue shifting.
//!
//! This crate provides the foundational types used by the hueshift crates:
//!
//! - [`Color`] - 8-bit RGB color
//! - [`Hsv`] - Hue/saturation/value triple with hue as a fraction of a turn
//! - [`Image`] - Row-major grid of [`Color`] with copy-on-write storage
//! - [`Error`] - Error taxonomy shared by every hueshift crate
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The transform engine lives in
//! `hueshift-ops`:
//!
//! ```text
//! hueshift-core (this crate)
//!    ^
//!    |
//!    +-- hueshift-ops (ShiftParameters, ColorShiftEngine)
//!           ^
//!           +-- hueshift-cli
//!           +-- hueshift-bench
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hueshift_core::{Color, Image};
//!
//! let orange: Color = "#F37502".parse().unwrap();
//! let hsv = orange.to_hsv();
//! assert!(hsv.s > 0.99);
//!
//! let img = Image::filled(4, 4, orange);
//! assert_eq!(img.pixel(3, 3), orange);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod hsv;
pub mod image;

// Re-exports for convenience
pub use color::Color;
pub use error::{Error, Result};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, wrap_hue, Hsv};
pub use image::Image;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use hueshift_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::hsv::{hsv_to_rgb, rgb_to_hsv, wrap_hue, Hsv};
    pub use crate::image::Image;
}
