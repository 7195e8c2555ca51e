//! Benchmark fixtures for hueshift.
//!
//! Run with: `cargo bench -p hueshift-bench`

use hueshift_core::{Color, Image};

/// Builds a `width x height` image that ramps red along x and green along y,
/// with blue set to `red ^ green`.
pub fn gradient(width: u32, height: u32) -> Image {
    let mut img = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            img.set_pixel(x, y, Color::new(r, g, r ^ g));
        }
    }
    img
}
