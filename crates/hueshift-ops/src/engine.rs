//! Color shift engine.
//!
//! [`ColorShiftEngine`] holds a reference color and the current
//! [`ShiftParameters`]. Collaborators (a color picker, a render loop) call
//! [`configure`](ColorShiftEngine::configure) whenever a new target color is
//! chosen and [`apply`](ColorShiftEngine::apply) to recolor an image.
//!
//! # States
//!
//! ```text
//!  new(reference) ──> Unconfigured (identity) ──configure──> Configured
//!                                                   ^            │
//!                                                   └─configure──┘
//! ```
//!
//! `apply` is valid in both states. There is no terminal state.
//!
//! # Concurrency
//!
//! Both operations take `&self`. The parameters sit behind an [`RwLock`] and
//! `apply` copies them once before touching any pixel, so a concurrent
//! `configure` can never mix old and new values within one call.

use std::sync::{PoisonError, RwLock};

use hueshift_core::{Color, Error, Hsv, Image, Result};
use tracing::{debug, trace};

use crate::ShiftParameters;

/// Default reference color (`#F37502`).
///
/// This is the dominant orange of the bundled sample asset.
pub const DEFAULT_REFERENCE: Color = Color::new(0xF3, 0x75, 0x02);

#[derive(Debug, Clone, Copy)]
struct EngineState {
    params: ShiftParameters,
    configured: bool,
}

/// Learns an HSV shift from a reference color to a target color and applies
/// it to images.
///
/// # Example
///
/// ```rust
/// use hueshift_core::{Color, Image};
/// use hueshift_ops::ColorShiftEngine;
///
/// let engine = ColorShiftEngine::default();
/// assert!(!engine.is_configured());
///
/// engine.configure(Color::new(0, 128, 255));
/// assert!(engine.is_configured());
///
/// let recolored = engine.apply(&Image::filled(4, 4, engine.reference()));
/// assert_eq!(recolored.dimensions(), (4, 4));
/// ```
#[derive(Debug)]
pub struct ColorShiftEngine {
    reference: Color,
    reference_hsv: Hsv,
    state: RwLock<EngineState>,
}

impl ColorShiftEngine {
    /// Creates an engine anchored at `reference`, starting with the identity
    /// shift.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReferenceColor`] if the reference has zero
    /// saturation (any gray) or zero value (black).
    ///
    /// ```rust
    /// use hueshift_core::Color;
    /// use hueshift_ops::ColorShiftEngine;
    ///
    /// assert!(ColorShiftEngine::new(Color::new(243, 117, 2)).is_ok());
    /// assert!(ColorShiftEngine::new(Color::new(128, 128, 128)).is_err());
    /// ```
    pub fn new(reference: Color) -> Result<Self> {
        let reference_hsv = reference.to_hsv();
        if reference_hsv.s == 0.0 || reference_hsv.v == 0.0 {
            return Err(Error::invalid_reference(reference_hsv.s, reference_hsv.v));
        }
        debug!(
            %reference,
            h = reference_hsv.h,
            s = reference_hsv.s,
            v = reference_hsv.v,
            "Creating color shift engine"
        );
        Ok(Self::with_checked_reference(reference, reference_hsv))
    }

    fn with_checked_reference(reference: Color, reference_hsv: Hsv) -> Self {
        Self {
            reference,
            reference_hsv,
            state: RwLock::new(EngineState {
                params: ShiftParameters::identity(),
                configured: false,
            }),
        }
    }

    /// Returns the reference color.
    #[inline]
    pub fn reference(&self) -> Color {
        self.reference
    }

    /// Returns the reference color in HSV.
    #[inline]
    pub fn reference_hsv(&self) -> Hsv {
        self.reference_hsv
    }

    /// Returns a snapshot of the current shift parameters.
    pub fn parameters(&self) -> ShiftParameters {
        self.snapshot().params
    }

    /// Returns `true` once any target has been configured.
    pub fn is_configured(&self) -> bool {
        self.snapshot().configured
    }

    /// Sets the shift so that the reference color maps onto `target`.
    pub fn configure(&self, target: Color) {
        let params = ShiftParameters::from_checked_reference(self.reference_hsv, target.to_hsv());
        debug!(%target, "Configuring color shift");
        self.store(params);
    }

    /// Sets the shift from a target given in HSV.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any component is outside `[0, 1]`.
    /// The previous parameters are kept.
    pub fn configure_hsv(&self, target: Hsv) -> Result<()> {
        let target = Hsv::new(target.h, target.s, target.v)?;
        let params = ShiftParameters::from_checked_reference(self.reference_hsv, target);
        debug!(h = target.h, s = target.s, v = target.v, "Configuring color shift from HSV");
        self.store(params);
        Ok(())
    }

    /// Shifts a single color with the current parameters.
    pub fn shift_color(&self, color: Color) -> Color {
        self.parameters().shift_color(color)
    }

    /// Returns a new image with the current shift applied to every pixel.
    ///
    /// `source` is never modified. Repeated calls without an intervening
    /// `configure` return identical images. An empty source yields an empty
    /// image of the same dimensions.
    pub fn apply(&self, source: &Image) -> Image {
        let params = self.parameters();
        trace!(width = source.width(), height = source.height(), "ColorShiftEngine::apply");

        #[cfg(feature = "parallel")]
        {
            crate::parallel::map_image(source, |c| params.shift_color(c))
        }
        #[cfg(not(feature = "parallel"))]
        {
            source.mapped(|c| params.shift_color(c))
        }
    }

    /// Writes the shifted `source` into a caller-owned `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in size;
    /// `dest` is left untouched.
    pub fn apply_into(&self, source: &Image, dest: &mut Image) -> Result<()> {
        let params = self.parameters();
        trace!(width = source.width(), height = source.height(), "ColorShiftEngine::apply_into");

        #[cfg(feature = "parallel")]
        {
            crate::parallel::map_into(source, dest, |c| params.shift_color(c))
        }
        #[cfg(not(feature = "parallel"))]
        {
            if source.dimensions() != dest.dimensions() {
                return Err(Error::dimension_mismatch(source.dimensions(), dest.dimensions()));
            }
            for (out, &px) in dest.data_mut().iter_mut().zip(source.data()) {
                *out = params.shift_color(px);
            }
            Ok(())
        }
    }

    fn snapshot(&self) -> EngineState {
        // the state is plain Copy data, so a poisoned lock still holds a consistent value
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self, params: ShiftParameters) {
        debug!(
            hue_rotation = params.hue_rotation,
            saturation_scale = params.saturation_scale,
            value_scale = params.value_scale,
            "Shift parameters updated"
        );
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = EngineState {
            params,
            configured: true,
        };
    }
}

impl Default for ColorShiftEngine {
    /// Engine anchored at [`DEFAULT_REFERENCE`].
    fn default() -> Self {
        Self::with_checked_reference(DEFAULT_REFERENCE, DEFAULT_REFERENCE.to_hsv())
    }
}
