//! End-to-end properties of the color shift engine.
//!
//! Covers identity, round-trip, hue wrap, determinism, clamping, the
//! reference-to-target scenario, empty images, and parameter snapshots under
//! concurrent reconfiguration.

use std::sync::atomic::{AtomicBool, Ordering};

use approx::assert_abs_diff_eq;
use hueshift_core::{Color, Hsv, Image};
use hueshift_ops::{ColorShiftEngine, ShiftParameters, DEFAULT_REFERENCE};

// ============================================================================
// Helpers
// ============================================================================

/// Every 17th value per channel: 16^3 colors covering both ends of each axis.
fn color_grid() -> Image {
    let steps: Vec<u8> = (0..=255u16).step_by(17).map(|v| v as u8).collect();
    let mut pixels = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                pixels.push(Color::new(r, g, b));
            }
        }
    }
    let width = steps.len() as u32;
    let height = (pixels.len() / steps.len()) as u32;
    Image::from_pixels(width, height, pixels).unwrap()
}

fn assert_within_one(actual: &Image, expected: &Image) {
    assert_eq!(actual.dimensions(), expected.dimensions());
    for ((x, y, a), e) in actual.pixels().zip(expected.data()) {
        for (ca, ce) in a.to_array().into_iter().zip(e.to_array()) {
            assert!(ca.abs_diff(ce) <= 1, "pixel ({x}, {y}): {a} vs {e}");
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn identity_when_target_equals_reference() {
    let engine = ColorShiftEngine::new(DEFAULT_REFERENCE).unwrap();
    engine.configure(DEFAULT_REFERENCE);

    let p = engine.parameters();
    assert_abs_diff_eq!(p.hue_rotation, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.saturation_scale, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.value_scale, 1.0, epsilon = 1e-12);

    let src = color_grid();
    assert_within_one(&engine.apply(&src), &src);
}

#[test]
fn rgb_hsv_round_trip() {
    let src = color_grid();
    let back = src.mapped(|c| c.to_hsv().to_color());
    assert_within_one(&back, &src);
}

#[test]
fn hue_rotation_wraps_into_unit_interval() {
    let p = ShiftParameters::between(
        Hsv::new(0.9, 1.0, 1.0).unwrap(),
        Hsv::new(0.1, 1.0, 1.0).unwrap(),
    )
    .unwrap();
    assert_abs_diff_eq!(p.hue_rotation, -0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(p.shift_hsv(Hsv { h: 0.95, s: 1.0, v: 1.0 }).h, 0.15, epsilon = 1e-12);
    assert_abs_diff_eq!(p.shift_hsv(Hsv { h: 0.05, s: 1.0, v: 1.0 }).h, 0.25, epsilon = 1e-12);

    for i in 0..100 {
        let h = p.shift_hsv(Hsv { h: f64::from(i) / 100.0, s: 1.0, v: 1.0 }).h;
        assert!((0.0..1.0).contains(&h));
    }
}

#[test]
fn apply_is_deterministic() {
    let engine = ColorShiftEngine::default();
    engine.configure(Color::new(40, 180, 220));
    let src = color_grid();

    let first = engine.apply(&src);
    let second = engine.apply(&src);
    assert_eq!(first.to_rgb_bytes(), second.to_rgb_bytes());
}

#[test]
fn parallel_matches_sequential_reference() {
    let engine = ColorShiftEngine::default();
    engine.configure(Color::new(200, 30, 120));
    let params = engine.parameters();
    let src = color_grid();

    let sequential = src.mapped(|c| params.shift_color(c));
    assert_eq!(engine.apply(&src), sequential);
}

#[test]
fn oversaturation_is_clamped() {
    // reference saturation 1/3, target saturation 1: scale 3
    let engine = ColorShiftEngine::new(Color::new(255, 170, 170)).unwrap();
    engine.configure(Color::new(255, 0, 0));
    assert_abs_diff_eq!(engine.parameters().saturation_scale, 3.0, epsilon = 1e-9);

    // s = 0.9 becomes 2.7
    let src = Image::filled(2, 2, Color::new(255, 25, 25));
    let dst = engine.apply(&src);
    assert!(dst.data().iter().all(|&c| c == Color::new(255, 0, 0)));
}

#[test]
fn value_overflow_is_clamped() {
    let engine = ColorShiftEngine::new(Color::new(128, 0, 0)).unwrap();
    engine.configure(Color::new(255, 0, 0));
    assert_abs_diff_eq!(engine.parameters().value_scale, 255.0 / 128.0, epsilon = 1e-9);

    // v = 200/255 becomes 1.5625; red saturates, the others scale to 0.78125
    let src = Image::filled(2, 2, Color::new(200, 100, 100));
    let dst = engine.apply(&src);
    assert!(dst.data().iter().all(|&c| c == Color::new(255, 199, 199)));
    assert_eq!(engine.shift_color(Color::WHITE), Color::WHITE);
}

#[test]
fn reference_shifted_to_blue() {
    let reference = Color::new(243, 117, 2);
    let engine = ColorShiftEngine::new(reference).unwrap();
    engine.configure(Color::new(0, 0, 255));

    let p = engine.parameters();
    assert_abs_diff_eq!(p.hue_rotation, 0.5871, epsilon = 1e-3);
    assert_abs_diff_eq!(p.saturation_scale, 1.0083, epsilon = 1e-3);
    assert_abs_diff_eq!(p.value_scale, 1.0494, epsilon = 1e-3);

    let dst = engine.apply(&Image::filled(1, 1, reference));
    assert_within_one(&dst, &Image::filled(1, 1, Color::new(0, 0, 255)));
}

#[test]
fn empty_images() {
    let engine = ColorShiftEngine::default();
    engine.configure(Color::new(0, 255, 0));
    for (w, h) in [(0, 0), (0, 3), (3, 0)] {
        let dst = engine.apply(&Image::new(w, h));
        assert_eq!(dst.dimensions(), (w, h));
        assert!(dst.is_empty());
    }
}

#[test]
fn reconfigure_replaces_parameters() {
    let engine = ColorShiftEngine::default();
    engine.configure(Color::new(0, 255, 0));
    let green = engine.parameters();
    engine.configure(Color::new(0, 0, 255));
    let blue = engine.parameters();
    assert_ne!(green, blue);

    engine.configure(Color::new(0, 255, 0));
    assert_eq!(engine.parameters(), green);
}

#[test]
fn concurrent_configure_never_tears() {
    let engine = ColorShiftEngine::default();
    let targets = [Color::new(0, 255, 0), Color::new(60, 0, 200)];
    let src = color_grid();

    let expected: Vec<Image> = targets
        .iter()
        .map(|&t| {
            let params = ShiftParameters::between(DEFAULT_REFERENCE.to_hsv(), t.to_hsv()).unwrap();
            src.mapped(|c| params.shift_color(c))
        })
        .collect();

    engine.configure(targets[0]);
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        s.spawn(|| {
            let mut i = 0;
            while !done.load(Ordering::Relaxed) {
                engine.configure(targets[i % 2]);
                i += 1;
            }
        });

        for _ in 0..20 {
            let out = engine.apply(&src);
            assert!(
                out == expected[0] || out == expected[1],
                "apply mixed parameters from two configurations"
            );
        }
        done.store(true, Ordering::Relaxed);
    });
}
