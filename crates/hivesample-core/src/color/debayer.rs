use ndarray::{Array2, Array3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_PIXEL_THRESHOLD};

/// Debayering (demosaicing) algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DebayerMethod {
    /// Simple bilinear interpolation.
    #[default]
    Bilinear,
    /// Malvar-He-Cutler gradient-corrected, sharper edges at moderate cost.
    MalvarHeCutler,
}

impl std::fmt::Display for DebayerMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bilinear => write!(f, "Bilinear"),
            Self::MalvarHeCutler => write!(f, "Malvar-He-Cutler"),
        }
    }
}

/// Which color sits at position (0,0) in the 2x2 Bayer cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum BayerPattern {
    #[default]
    RGGB,
    GRBG,
    GBRG,
    BGGR,
}

impl BayerPattern {
    /// Returns `(row_parity, col_parity)` of the red pixel within the 2x2 cell.
    fn red_position(self) -> (usize, usize) {
        match self {
            Self::RGGB => (0, 0),
            Self::GRBG => (0, 1),
            Self::GBRG => (1, 0),
            Self::BGGR => (1, 1),
        }
    }
}

impl std::fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Channel indices in the output array (BGR order, as the camera tooling stores it).
const BLUE: usize = 0;
const GREEN: usize = 1;
const RED: usize = 2;

/// Debayer a raw mosaic into a `(height, width, 3)` BGR array.
///
/// Pixel values keep the scale of the raw input.
pub fn debayer(raw: &Array2<f32>, pattern: BayerPattern, method: DebayerMethod) -> Array3<f32> {
    let (h, w) = raw.dim();

    let rows: Vec<Vec<[f32; 3]>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| demosaic_row(raw, row, pattern, method))
            .collect()
    } else {
        (0..h)
            .map(|row| demosaic_row(raw, row, pattern, method))
            .collect()
    };

    let mut out = Array3::<f32>::zeros((h, w, COLOR_CHANNEL_COUNT));
    for (row, pixels) in rows.into_iter().enumerate() {
        for (col, [r, g, b]) in pixels.into_iter().enumerate() {
            out[[row, col, RED]] = r;
            out[[row, col, GREEN]] = g;
            out[[row, col, BLUE]] = b;
        }
    }
    out
}

/// Interpolate one row, returning `[r, g, b]` per pixel.
fn demosaic_row(
    raw: &Array2<f32>,
    row: usize,
    pattern: BayerPattern,
    method: DebayerMethod,
) -> Vec<[f32; 3]> {
    let (_, w) = raw.dim();
    let (r_row, r_col) = pattern.red_position();
    let ri = row as isize;
    let is_red_row = (row % 2) == r_row;

    (0..w)
        .map(|col| {
            let ci = col as isize;
            let is_red_col = (col % 2) == r_col;
            let site = match (is_red_row, is_red_col) {
                (true, true) => Site::Red,
                (true, false) => Site::GreenRedRow,
                (false, true) => Site::GreenBlueRow,
                (false, false) => Site::Blue,
            };
            match method {
                DebayerMethod::Bilinear => bilinear_at(raw, ri, ci, site),
                DebayerMethod::MalvarHeCutler => mhc_at(raw, ri, ci, site),
            }
        })
        .collect()
}

/// Native color of a mosaic position.
#[derive(Clone, Copy)]
enum Site {
    Red,
    GreenRedRow,
    GreenBlueRow,
    Blue,
}

/// Clamped indexing into the raw Bayer mosaic.
#[inline]
fn px(raw: &Array2<f32>, row: isize, col: isize) -> f32 {
    let (h, w) = raw.dim();
    let r = row.clamp(0, h as isize - 1) as usize;
    let c = col.clamp(0, w as isize - 1) as usize;
    raw[[r, c]]
}

// ---------------------------------------------------------------------------
// Bilinear demosaicing
// ---------------------------------------------------------------------------

fn bilinear_at(raw: &Array2<f32>, r: isize, c: isize, site: Site) -> [f32; 3] {
    let native = px(raw, r, c);
    match site {
        Site::Red => [native, avg_cross(raw, r, c), avg_diagonal(raw, r, c)],
        Site::GreenRedRow => [avg_horizontal(raw, r, c), native, avg_vertical(raw, r, c)],
        Site::GreenBlueRow => [avg_vertical(raw, r, c), native, avg_horizontal(raw, r, c)],
        Site::Blue => [avg_diagonal(raw, r, c), avg_cross(raw, r, c), native],
    }
}

/// Average of 4 cross (cardinal) neighbours.
#[inline]
fn avg_cross(raw: &Array2<f32>, r: isize, c: isize) -> f32 {
    (px(raw, r - 1, c) + px(raw, r + 1, c) + px(raw, r, c - 1) + px(raw, r, c + 1)) * 0.25
}

/// Average of 4 diagonal neighbours.
#[inline]
fn avg_diagonal(raw: &Array2<f32>, r: isize, c: isize) -> f32 {
    (px(raw, r - 1, c - 1)
        + px(raw, r - 1, c + 1)
        + px(raw, r + 1, c - 1)
        + px(raw, r + 1, c + 1))
        * 0.25
}

#[inline]
fn avg_horizontal(raw: &Array2<f32>, r: isize, c: isize) -> f32 {
    (px(raw, r, c - 1) + px(raw, r, c + 1)) * 0.5
}

#[inline]
fn avg_vertical(raw: &Array2<f32>, r: isize, c: isize) -> f32 {
    (px(raw, r - 1, c) + px(raw, r + 1, c)) * 0.5
}

// ---------------------------------------------------------------------------
// Malvar-He-Cutler (MHC) demosaicing
// ---------------------------------------------------------------------------
//
// "High-quality linear interpolation for demosaicing of Bayer-patterned
// color images", Malvar, He, Cutler (2004). Kernels are scaled by 2 from the
// paper values so every coefficient is an integer; all divide by 16.

/// Green at a red or blue location.
const MHC_G_AT_RB: [[i32; 5]; 5] = [
    [0, 0, -2, 0, 0],
    [0, 0, 4, 0, 0],
    [-2, 4, 8, 4, -2],
    [0, 0, 4, 0, 0],
    [0, 0, -2, 0, 0],
];

/// Red at green in a red row / Blue at green in a blue row.
const MHC_RB_AT_G_SAME_ROW: [[i32; 5]; 5] = [
    [0, 0, 1, 0, 0],
    [0, -2, 0, -2, 0],
    [-2, 8, 10, 8, -2],
    [0, -2, 0, -2, 0],
    [0, 0, 1, 0, 0],
];

/// Red at green in a blue row / Blue at green in a red row.
const MHC_RB_AT_G_DIFF_ROW: [[i32; 5]; 5] = [
    [0, 0, -2, 0, 0],
    [0, -2, 8, -2, 0],
    [1, 0, 10, 0, 1],
    [0, -2, 8, -2, 0],
    [0, 0, -2, 0, 0],
];

/// Red at blue / Blue at red.
const MHC_RB_AT_BR: [[i32; 5]; 5] = [
    [0, 0, -3, 0, 0],
    [0, 4, 0, 4, 0],
    [-3, 0, 12, 0, -3],
    [0, 4, 0, 4, 0],
    [0, 0, -3, 0, 0],
];

const MHC_DIVISOR: f32 = 16.0;

/// Apply a 5x5 kernel centred at (r,c). Negative overshoot is clipped to 0.
#[inline]
fn apply_kernel(raw: &Array2<f32>, r: isize, c: isize, kernel: &[[i32; 5]; 5]) -> f32 {
    let mut sum = 0.0_f32;
    for (kr, krow) in kernel.iter().enumerate() {
        for (kc, &kval) in krow.iter().enumerate() {
            if kval != 0 {
                sum += kval as f32 * px(raw, r + kr as isize - 2, c + kc as isize - 2);
            }
        }
    }
    (sum / MHC_DIVISOR).max(0.0)
}

fn mhc_at(raw: &Array2<f32>, r: isize, c: isize, site: Site) -> [f32; 3] {
    let native = px(raw, r, c);
    match site {
        Site::Red => [
            native,
            apply_kernel(raw, r, c, &MHC_G_AT_RB),
            apply_kernel(raw, r, c, &MHC_RB_AT_BR),
        ],
        Site::GreenRedRow => [
            apply_kernel(raw, r, c, &MHC_RB_AT_G_SAME_ROW),
            native,
            apply_kernel(raw, r, c, &MHC_RB_AT_G_DIFF_ROW),
        ],
        Site::GreenBlueRow => [
            apply_kernel(raw, r, c, &MHC_RB_AT_G_DIFF_ROW),
            native,
            apply_kernel(raw, r, c, &MHC_RB_AT_G_SAME_ROW),
        ],
        Site::Blue => [
            apply_kernel(raw, r, c, &MHC_RB_AT_BR),
            apply_kernel(raw, r, c, &MHC_G_AT_RB),
            native,
        ],
    }
}
