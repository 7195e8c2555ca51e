//! # hueshift-ops
//!
//! Learns a color shift in HSV space and applies it to images.
//!
//! A shift is measured from a *reference* color to a *target* color:
//!
//! - hue rotation: `h_target - h_reference`
//! - saturation scale: `s_target / s_reference`
//! - value scale: `v_target / v_reference`
//!
//! Applying the shift to the reference color reproduces the target, and
//! every other pixel moves by the same relative amount.
//!
//! # Modules
//!
//! - [`params`] - [`ShiftParameters`] and the per-pixel HSV step
//! - [`engine`] - [`ColorShiftEngine`], the configure/apply state holder
//! - [`parallel`] - Row-parallel pixel map (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use hueshift_core::{Color, Image};
//! use hueshift_ops::ColorShiftEngine;
//!
//! let engine = ColorShiftEngine::new(Color::new(243, 117, 2)).unwrap();
//! engine.configure(Color::new(0, 0, 255));
//!
//! let src = Image::filled(8, 8, Color::new(243, 117, 2));
//! let dst = engine.apply(&src);
//! let px = dst.pixel(0, 0);
//! assert!(px.r <= 1 && px.g <= 1 && px.b >= 254);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - apply shifts across rows with rayon. Output is
//!   byte-identical to the sequential path.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod engine;
pub mod params;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use engine::{ColorShiftEngine, DEFAULT_REFERENCE};
pub use params::ShiftParameters;

pub use hueshift_core::{Error, Result};
