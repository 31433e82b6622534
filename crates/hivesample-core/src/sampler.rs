use ndarray::{ArrayD, Axis, Slice};
use tracing::debug;

use crate::consts::PHOTO_EXTENSION;
use crate::error::{HiveError, Result};
use crate::geometry::{clip_range, Point};
use crate::source::SourceImage;

/// The two reference points a sample line runs between.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sampler {
    start: Option<Point>,
    end: Option<Point>,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Set `start`, then `end`. Further marks are ignored until [`reset`](Self::reset).
    pub fn mark(&mut self, point: Point) {
        if self.start.is_none() {
            self.start = Some(point);
        } else if self.end.is_none() {
            self.end = Some(point);
        } else {
            debug!(%point, "both points already marked; ignoring");
        }
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// `n` evenly spaced points from `start` to `end`, both included.
    ///
    /// Coordinates are truncated toward zero per axis. Returns an empty list
    /// while either end is unmarked.
    pub fn compute_sample_points(&self, n: usize) -> Result<Vec<Point>> {
        if n < 2 {
            return Err(HiveError::InvalidArgument(format!(
                "sample count must be at least 2, got {n}"
            )));
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Ok(Vec::new());
        };

        let steps = (n - 1) as f64;
        let step_x = (end.x - start.x) as f64 / steps;
        let step_y = (end.y - start.y) as f64 / steps;

        Ok((0..n)
            .map(|i| {
                let i = i as f64;
                Point::new(
                    (start.x as f64 + step_x * i) as i64,
                    (start.y as f64 + step_y * i) as i64,
                )
            })
            .collect())
    }
}

/// Half size of a square patch with the given side length.
pub fn half_size_for(side: usize) -> usize {
    side.saturating_sub(1) / 2
}

/// One extracted patch, ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRecord {
    /// Blob field the patch replaces (`colorimg` or `img`).
    pub photo_type_field: &'static str,
    pub patch: ArrayD<f32>,
    /// `(row, col)` of the patch's nominal top-left corner in the source.
    pub anchor: (i64, i64),
    pub filename: String,
    pub label: String,
}

/// Cut a `(2 * half_size + 1)`-square patch around each point.
///
/// Patches near the border are clipped to the image and may be empty.
/// `labels[i]` names sample `i`; missing or blank labels fall back to `i`.
/// Record filenames end in `.{extension}`.
pub fn extract_patches(
    image: &SourceImage,
    points: &[Point],
    half_size: usize,
    labels: &[String],
    extension: &str,
) -> Vec<SampleRecord> {
    let kind = image.kind();
    let source = image.sample_source();
    let base = strip_extension(image.filename());
    let h = half_size as i64;

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let patch = cut_patch(source, *p, h);
            let label = label_for(labels, i);
            SampleRecord {
                photo_type_field: kind.field(),
                patch,
                anchor: (p.y - h, p.x - h),
                filename: format!("{base}_{label}.{extension}"),
                label,
            }
        })
        .collect()
}

fn cut_patch(source: &ArrayD<f32>, p: Point, h: i64) -> ArrayD<f32> {
    let (r0, r1) = clip_range(p.y - h, p.y + h + 1, source.len_of(Axis(0)));
    let (c0, c1) = clip_range(p.x - h, p.x + h + 1, source.len_of(Axis(1)));
    source
        .slice_axis(Axis(0), Slice::from(r0..r1))
        .slice_axis(Axis(1), Slice::from(c0..c1))
        .to_owned()
}

fn label_for(labels: &[String], i: usize) -> String {
    match labels.get(i) {
        Some(l) if !l.is_empty() => l.clone(),
        _ => i.to_string(),
    }
}

/// Drop a trailing photo extension from a capture filename.
pub fn strip_extension(filename: &str) -> &str {
    filename
        .strip_suffix(PHOTO_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename)
}

/// Split a free-text label list. Entries are trimmed; blank entries are kept
/// in place so later labels stay aligned with their sample index.
///
/// A blank entry is labelled with its sample index when saved, never with an
/// empty string.
pub fn parse_labels(text: &str, delimiter: char) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(delimiter).map(|s| s.trim().to_string()).collect()
}
