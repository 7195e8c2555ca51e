//! Shift command.
//!
//! Shifts individual colors and prints `input -> output` per line.

use anyhow::Result;
use clap::Args;
use tracing::{debug, trace};

use hueshift_core::Color;

use super::build_engine;

/// Arguments for the `shift` command.
#[derive(Args)]
pub struct ShiftArgs {
    /// Target color (#RRGGBB)
    pub target: Color,

    /// Colors to shift (#RRGGBB)
    #[arg(required = true)]
    pub colors: Vec<Color>,
}

/// Run the shift command.
pub fn run(args: ShiftArgs, reference: Color) -> Result<()> {
    trace!(%reference, target = %args.target, count = args.colors.len(), "shift::run");
    let engine = build_engine(reference, Some(args.target))?;

    for line in shift_lines(&engine, &args.colors) {
        println!("{line}");
    }
    Ok(())
}

fn shift_lines(engine: &hueshift_ops::ColorShiftEngine, colors: &[Color]) -> Vec<String> {
    colors
        .iter()
        .map(|&c| {
            let out = engine.shift_color(c);
            debug!(input = %c, output = %out, "Shifted color");
            format!("{c} -> {out}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_lines() {
        let engine = build_engine(Color::new(243, 117, 2), Some(Color::new(0, 0, 255))).unwrap();
        let lines = shift_lines(&engine, &[Color::new(243, 117, 2), Color::BLACK]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#F37502 -> #0000F"));
        assert_eq!(lines[1], "#000000 -> #000000");
    }
}
