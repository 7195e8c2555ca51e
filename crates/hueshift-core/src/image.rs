//! Image buffer type.
//!
//! [`Image`] is a row-major grid of [`Color`] with fixed dimensions.
//!
//! # Memory Layout
//!
//! Pixels are stored top-to-bottom, left-to-right; pixel `(x, y)` (column
//! `x`, row `y`) lives at index `y * width + x`:
//!
//! ```text
//! [P(0,0) P(1,0) P(2,0) ...]  <- Row 0
//! [P(0,1) P(1,1) P(2,1) ...]  <- Row 1
//! ...
//! ```
//!
//! The buffer is shared through an [`Arc`], so cloning an image is cheap and
//! writes go through copy-on-write. A clone handed to a transform can never
//! be changed behind the caller's back.
//!
//! # Usage
//!
//! ```rust
//! use hueshift_core::{Color, Image};
//!
//! let mut img = Image::new(4, 3);
//! img.set_pixel(1, 2, Color::WHITE);
//! assert_eq!(img.pixel(1, 2), Color::WHITE);
//! assert_eq!(img.pixel(0, 0), Color::BLACK);
//! ```
//!
//! Zero-area images are valid and iterate over nothing.

use std::sync::Arc;

use crate::{Color, Error, Result};

/// Owned image buffer of 8-bit RGB pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    /// Pixel data (Arc for cheap cloning)
    data: Arc<Vec<Color>>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

/// Element count of a `width x height` buffer with `per_pixel` elements each.
fn checked_len(width: u32, height: u32, per_pixel: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(per_pixel))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "image dimensions overflow"))
}

impl Image {
    /// Creates a new black image.
    ///
    /// ```rust
    /// use hueshift_core::Image;
    ///
    /// let img = Image::new(1920, 1080);
    /// assert_eq!(img.dimensions(), (1920, 1080));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Creates an image filled with one color.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` pixels cannot be allocated.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixel_count = (width as usize).saturating_mul(height as usize);
        Self {
            data: Arc::new(vec![color; pixel_count]),
            width,
            height,
        }
    }

    /// Creates an image from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len()` is not
    /// `width * height`.
    ///
    /// ```rust
    /// use hueshift_core::{Color, Image};
    ///
    /// let img = Image::from_pixels(2, 1, vec![Color::BLACK, Color::WHITE]).unwrap();
    /// assert_eq!(img.pixel(1, 0), Color::WHITE);
    /// assert!(Image::from_pixels(2, 2, vec![Color::BLACK]).is_err());
    /// ```
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = checked_len(width, height, 1)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(pixels),
            width,
            height,
        })
    }

    /// Creates an image from interleaved `[R G B R G B ...]` bytes.
    ///
    /// This is the layout most pixel-buffer collaborators hand over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `bytes.len()` is not
    /// `width * height * 3`, or if that size overflows `usize`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = checked_len(width, height, 3)?;
        if bytes.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, bytes.len()),
            ));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Color::new(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Returns the pixels as interleaved `[R G B R G B ...]` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Returns the pixel data mutably.
    ///
    /// If the data is shared, it is cloned first (copy-on-write).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Color] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.pixel_offset(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data_mut()[offset] = color;
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[Color] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to each pixel in place.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Color) -> Color,
    {
        for px in self.data_mut() {
            *px = f(*px);
        }
    }

    /// Returns a new image with `f` applied to every pixel.
    ///
    /// `self` is left untouched.
    ///
    /// ```rust
    /// use hueshift_core::{Color, Image};
    ///
    /// let src = Image::filled(2, 2, Color::new(10, 20, 30));
    /// let dst = src.mapped(|c| Color::new(c.b, c.g, c.r));
    /// assert_eq!(dst.pixel(0, 0), Color::new(30, 20, 10));
    /// assert_eq!(src.pixel(0, 0), Color::new(10, 20, 30));
    /// ```
    pub fn mapped<F>(&self, f: F) -> Image
    where
        F: Fn(Color) -> Color,
    {
        Image {
            data: Arc::new(self.data.iter().map(|&c| f(c)).collect()),
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
