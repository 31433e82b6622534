use approx::assert_abs_diff_eq;
use ndarray::Array2;

use hivesample_core::color::debayer::{debayer, BayerPattern, DebayerMethod};

// ---------------------------------------------------------------------------
// Helper: create synthetic Bayer mosaics
// ---------------------------------------------------------------------------

/// Build a mosaic for `pattern` where R=red_val, G=green_val, B=blue_val.
fn patterned(
    h: usize,
    w: usize,
    pattern: BayerPattern,
    red_val: f32,
    green_val: f32,
    blue_val: f32,
) -> Array2<f32> {
    let (rr, rc) = match pattern {
        BayerPattern::RGGB => (0, 0),
        BayerPattern::GRBG => (0, 1),
        BayerPattern::GBRG => (1, 0),
        BayerPattern::BGGR => (1, 1),
    };
    Array2::from_shape_fn((h, w), |(row, col)| {
        match (row % 2 == rr, col % 2 == rc) {
            (true, true) => red_val,
            (false, false) => blue_val,
            _ => green_val,
        }
    })
}

const BLUE: usize = 0;
const GREEN: usize = 1;
const RED: usize = 2;

// ---------------------------------------------------------------------------
// Bilinear
// ---------------------------------------------------------------------------

#[test]
fn test_bilinear_uniform_keeps_value_scale() {
    let raw = Array2::<f32>::from_elem((16, 16), 1200.0);
    let color = debayer(&raw, BayerPattern::RGGB, DebayerMethod::Bilinear);
    assert_eq!(color.dim(), (16, 16, 3));
    for v in color.iter() {
        assert_abs_diff_eq!(*v, 1200.0, epsilon = 1e-3);
    }
}

#[test]
fn test_bilinear_separates_channels_bgr() {
    for pattern in [
        BayerPattern::RGGB,
        BayerPattern::GRBG,
        BayerPattern::GBRG,
        BayerPattern::BGGR,
    ] {
        let raw = patterned(12, 12, pattern, 200.0, 100.0, 50.0);
        let color = debayer(&raw, pattern, DebayerMethod::Bilinear);
        for row in 2..10 {
            for col in 2..10 {
                assert_abs_diff_eq!(color[[row, col, RED]], 200.0, epsilon = 1e-3);
                assert_abs_diff_eq!(color[[row, col, GREEN]], 100.0, epsilon = 1e-3);
                assert_abs_diff_eq!(color[[row, col, BLUE]], 50.0, epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_bilinear_native_pixels_untouched() {
    let raw = Array2::from_shape_fn((8, 8), |(r, c)| (r * 8 + c) as f32);
    let color = debayer(&raw, BayerPattern::RGGB, DebayerMethod::Bilinear);
    assert_eq!(color[[0, 0, RED]], raw[[0, 0]]);
    assert_eq!(color[[0, 1, GREEN]], raw[[0, 1]]);
    assert_eq!(color[[1, 1, BLUE]], raw[[1, 1]]);
}

#[test]
fn test_bilinear_large_image_matches_small_path() {
    // 256x256 crosses the row-parallel threshold
    let raw = Array2::from_shape_fn((256, 256), |(r, c)| ((r * 7 + c * 3) % 251) as f32);
    let color = debayer(&raw, BayerPattern::GRBG, DebayerMethod::Bilinear);

    let crop = raw.slice(ndarray::s![0..16, 0..16]).to_owned();
    let small = debayer(&crop, BayerPattern::GRBG, DebayerMethod::Bilinear);
    // interior of the crop is unaffected by border clamping
    for row in 1..15 {
        for col in 1..15 {
            for ch in 0..3 {
                assert_abs_diff_eq!(color[[row, col, ch]], small[[row, col, ch]], epsilon = 1e-3);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Malvar-He-Cutler
// ---------------------------------------------------------------------------

#[test]
fn test_mhc_uniform() {
    let raw = Array2::<f32>::from_elem((16, 16), 0.5);
    let color = debayer(&raw, BayerPattern::RGGB, DebayerMethod::MalvarHeCutler);
    for v in color.iter() {
        assert_abs_diff_eq!(*v, 0.5, epsilon = 1e-4);
    }
}

#[test]
fn test_mhc_never_negative() {
    let raw = patterned(16, 16, BayerPattern::BGGR, 0.0, 1000.0, 0.0);
    let color = debayer(&raw, BayerPattern::BGGR, DebayerMethod::MalvarHeCutler);
    assert!(color.iter().all(|&v| v >= 0.0));
}

#[test]
fn test_method_display() {
    assert_eq!(format!("{}", DebayerMethod::Bilinear), "Bilinear");
    assert_eq!(format!("{}", DebayerMethod::MalvarHeCutler), "Malvar-He-Cutler");
    assert_eq!(DebayerMethod::default(), DebayerMethod::Bilinear);
    assert_eq!(BayerPattern::default(), BayerPattern::RGGB);
}
