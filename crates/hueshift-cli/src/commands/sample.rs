//! Sample command.
//!
//! Recolors the bundled 4x4 swatch, a waffle texture whose dominant color is
//! the default reference `#F37502`.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, trace};

use hueshift_core::{Color, Image};

use super::{build_engine, format_grid};

/// Swatch width and height in pixels.
pub const SAMPLE_SIZE: u32 = 4;

/// Interleaved RGB bytes of the sample swatch, row-major.
pub const SAMPLE_RGB: [u8; 48] = [
    0xFE, 0x98, 0x00, 0xFF, 0x9A, 0x00, 0xFF, 0x9B, 0x00, 0xFF, 0x9A, 0x00, //
    0xFF, 0x9A, 0x00, 0xE5, 0x69, 0x00, 0xD7, 0x4E, 0x00, 0xEA, 0x61, 0x00, //
    0xFF, 0x9B, 0x00, 0xE0, 0x50, 0x00, 0xD6, 0x38, 0x00, 0xE7, 0x4A, 0x04, //
    0xFF, 0x9A, 0x00, 0xFE, 0x68, 0x00, 0xFD, 0x51, 0x04, 0xFD, 0x70, 0x1B, //
];

/// Arguments for the `sample` command.
#[derive(Args)]
pub struct SampleArgs {
    /// Target color (#RRGGBB); omit to print the unshifted swatch
    pub target: Option<Color>,

    /// Print interleaved RGB bytes instead of a hex grid
    #[arg(long)]
    pub raw: bool,
}

/// Decode the bundled swatch.
pub fn sample_image() -> Result<Image> {
    Image::from_rgb_bytes(SAMPLE_SIZE, SAMPLE_SIZE, &SAMPLE_RGB).context("Corrupt sample swatch")
}

/// Run the sample command.
pub fn run(args: SampleArgs, reference: Color) -> Result<()> {
    trace!(%reference, raw = args.raw, "sample::run");
    let engine = build_engine(reference, args.target)?;
    let source = sample_image()?;

    let image = engine.apply(&source);
    info!(w = image.width(), h = image.height(), configured = engine.is_configured(), "Recolored sample");

    if args.raw {
        let bytes: Vec<String> = image.to_rgb_bytes().iter().map(u8::to_string).collect();
        println!("{}", bytes.join(" "));
    } else {
        println!("{}", format_grid(&image));
    }
    Ok(())
}
