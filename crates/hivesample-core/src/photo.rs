use std::path::{Path, PathBuf};

use ndarray::{s, ArrayView3};

use crate::config::{DebayerConfig, SamplerConfig};
use crate::error::Result;
use crate::geometry::Point;
use crate::io::samples::save_samples;
use crate::sampler::{extract_patches, half_size_for, Sampler};
use crate::source::SourceImage;
use crate::viewport::Viewport;

/// A photo under review: the image plus its pan/zoom and marked points.
#[derive(Clone, Debug)]
pub struct Photo {
    pub path: PathBuf,
    pub image: SourceImage,
    pub viewport: Viewport,
    pub sampler: Sampler,
}

impl Photo {
    pub fn new(path: PathBuf, image: SourceImage) -> Self {
        let viewport = Viewport::new(image.width(), image.height());
        Self {
            path,
            image,
            viewport,
            sampler: Sampler::new(),
        }
    }

    pub fn open(path: &Path, debayer_config: &DebayerConfig) -> Result<Self> {
        let image = SourceImage::load(path, debayer_config)?;
        Ok(Self::new(path.to_path_buf(), image))
    }

    /// Mark a point clicked at viewport-local coordinates.
    pub fn mark_local(&mut self, local_x: i64, local_y: i64) {
        let point = self.viewport.to_full(local_x, local_y);
        self.sampler.mark(point);
    }

    pub fn visible_start(&self) -> Option<(i64, i64)> {
        self.sampler.start().and_then(|p| self.viewport.to_local(p))
    }

    pub fn visible_end(&self) -> Option<(i64, i64)> {
        self.sampler.end().and_then(|p| self.viewport.to_local(p))
    }

    /// Sample points inside the visible region, in viewport-local coordinates.
    pub fn visible_samples(&self, n: usize) -> Result<Vec<(i64, i64)>> {
        Ok(self
            .sampler
            .compute_sample_points(n)?
            .into_iter()
            .filter_map(|p| self.viewport.to_local(p))
            .collect())
    }

    /// The color image cropped to the visible region.
    pub fn visible_image(&self) -> ArrayView3<'_, f32> {
        let r = self.viewport.visible_region();
        self.image.color().slice(s![
            r.y0 as usize..r.y1 as usize,
            r.x0 as usize..r.x1 as usize,
            ..
        ])
    }

    /// Extract `n` samples of side `side` and write them out.
    pub fn save_samples(
        &self,
        n: usize,
        side: usize,
        labels: &[String],
        config: &SamplerConfig,
    ) -> Result<Vec<PathBuf>> {
        let points: Vec<Point> = self.sampler.compute_sample_points(n)?;
        let records = extract_patches(
            &self.image,
            &points,
            half_size_for(side),
            labels,
            &config.output.extension,
        );
        save_samples(&self.image, &records, &config.output)
    }
}
