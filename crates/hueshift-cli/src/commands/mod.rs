//! CLI command implementations

pub mod params;
pub mod sample;
pub mod shift;

use anyhow::{Context, Result};
use hueshift_core::{Color, Image};
use hueshift_ops::ColorShiftEngine;

/// Build an engine anchored at `reference`, configured for `target` if given.
pub fn build_engine(reference: Color, target: Option<Color>) -> Result<ColorShiftEngine> {
    let engine = ColorShiftEngine::new(reference)
        .with_context(|| format!("Cannot use {} as the reference color", reference))?;
    if let Some(target) = target {
        engine.configure(target);
    }
    Ok(engine)
}

/// Format an image as rows of space-separated `#RRGGBB` values.
pub fn format_grid(image: &Image) -> String {
    (0..image.height())
        .map(|y| {
            image
                .row(y)
                .iter()
                .map(Color::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_engine_rejects_gray() {
        let err = build_engine(Color::new(50, 50, 50), None).unwrap_err();
        assert!(err.to_string().contains("#323232"));
    }

    #[test]
    fn test_build_engine_configures_target() {
        let engine = build_engine(Color::new(243, 117, 2), Some(Color::new(0, 0, 255))).unwrap();
        assert!(engine.is_configured());
        assert!(!build_engine(Color::new(243, 117, 2), None).unwrap().is_configured());
    }

    #[test]
    fn test_format_grid() {
        let img = Image::from_pixels(
            2,
            2,
            vec![Color::BLACK, Color::WHITE, Color::new(1, 2, 3), Color::new(255, 0, 16)],
        )
        .unwrap();
        assert_eq!(format_grid(&img), "#000000 #FFFFFF\n#010203 #FF0010");
        assert_eq!(format_grid(&Image::new(0, 0)), "");
    }
}
