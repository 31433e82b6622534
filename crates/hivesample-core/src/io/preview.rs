use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::consts::DISPLAY_MAX;
use crate::error::Result;
use crate::photo::Photo;

const MARKER_RADIUS: i64 = 3;
const START_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const END_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const SAMPLE_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Render the visible region as an 8-bit RGB image.
///
/// Pixels are scaled by `gain` and clipped to 255. Sample points (when
/// `sample_count` is given) are drawn yellow, then the start point blue and
/// the end point red.
pub fn render_visible(photo: &Photo, gain: f32, sample_count: Option<usize>) -> Result<RgbImage> {
    let view = photo.visible_image();
    let (h, w, _) = view.dim();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            // stored BGR
            let b = to_display(view[[row, col, 0]], gain);
            let g = to_display(view[[row, col, 1]], gain);
            let r = to_display(view[[row, col, 2]], gain);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    if let Some(n) = sample_count {
        for p in photo.visible_samples(n)? {
            draw_cross(&mut img, p, SAMPLE_COLOR);
        }
    }
    if let Some(p) = photo.visible_start() {
        draw_cross(&mut img, p, START_COLOR);
    }
    if let Some(p) = photo.visible_end() {
        draw_cross(&mut img, p, END_COLOR);
    }

    Ok(img)
}

/// Render and save as PNG.
pub fn save_preview(
    photo: &Photo,
    gain: f32,
    sample_count: Option<usize>,
    path: &Path,
) -> Result<()> {
    let img = render_visible(photo, gain, sample_count)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[inline]
fn to_display(v: f32, gain: f32) -> u8 {
    (v * gain).clamp(0.0, DISPLAY_MAX) as u8
}

/// Draw an `x`-shaped marker centred on `(x, y)`, clipped to the image.
fn draw_cross(img: &mut RgbImage, (x, y): (i64, i64), color: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for d in -MARKER_RADIUS..=MARKER_RADIUS {
        for (px, py) in [(x + d, y + d), (x + d, y - d)] {
            if px >= 0 && px < w && py >= 0 && py < h {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
