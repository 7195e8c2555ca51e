//! Params command.
//!
//! Prints the shift learned from the reference color to a target color.

use anyhow::Result;
use clap::Args;
use tracing::{info, trace};

use hueshift_core::Color;

use super::build_engine;

/// Arguments for the `params` command.
#[derive(Args)]
pub struct ParamsArgs {
    /// Target color (#RRGGBB)
    pub target: Color,
}

/// Run the params command.
pub fn run(args: ParamsArgs, reference: Color) -> Result<()> {
    trace!(%reference, target = %args.target, "params::run");
    let engine = build_engine(reference, Some(args.target))?;

    let r = engine.reference_hsv();
    let t = args.target.to_hsv();
    let p = engine.parameters();
    info!(identity = p.is_identity(), "Computed shift parameters");

    println!("reference        {}  h={:.4} s={:.4} v={:.4}", reference, r.h, r.s, r.v);
    println!("target           {}  h={:.4} s={:.4} v={:.4}", args.target, t.h, t.s, t.v);
    println!("hue_rotation     {:+.6}", p.hue_rotation);
    println!("saturation_scale {:.6}", p.saturation_scale);
    println!("value_scale      {:.6}", p.value_scale);
    Ok(())
}
