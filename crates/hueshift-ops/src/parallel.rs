//! Parallel pixel mapping using Rayon.
//!
//! Rows are processed independently, so the output is byte-identical to a
//! sequential map as long as the pixel function is pure.
//!
//! # Example
//!
//! ```rust
//! use hueshift_core::{Color, Image};
//! use hueshift_ops::parallel;
//!
//! let src = Image::filled(256, 256, Color::new(10, 20, 30));
//! let dst = parallel::map_image(&src, |c| Color::new(c.b, c.g, c.r));
//! assert_eq!(dst.pixel(255, 255), Color::new(30, 20, 10));
//! ```

use hueshift_core::{Color, Error, Image, Result};
use rayon::prelude::*;

/// Returns a new image with `f` applied to every pixel, rows in parallel.
pub fn map_image<F>(src: &Image, f: F) -> Image
where
    F: Fn(Color) -> Color + Sync,
{
    let mut dst = Image::new(src.width(), src.height());
    map_rows(src, &mut dst, &f);
    dst
}

/// Writes `f` applied to every pixel of `src` into `dst`, rows in parallel.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the images differ in size; `dst`
/// is left untouched.
pub fn map_into<F>(src: &Image, dst: &mut Image, f: F) -> Result<()>
where
    F: Fn(Color) -> Color + Sync,
{
    if src.dimensions() != dst.dimensions() {
        return Err(Error::dimension_mismatch(src.dimensions(), dst.dimensions()));
    }
    map_rows(src, dst, &f);
    Ok(())
}

/// Parallel row pass. Dimensions must already match.
fn map_rows<F>(src: &Image, dst: &mut Image, f: &F)
where
    F: Fn(Color) -> Color + Sync,
{
    if src.is_empty() {
        return;
    }
    let width = src.width() as usize;
    let src_data = src.data();

    dst.data_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let src_row = &src_data[y * width..(y + 1) * width];
            for (out, &px) in row.iter_mut().zip(src_row) {
                *out = f(px);
            }
        });
}
