use std::path::Path;

use ndarray::{Array3, ArrayD, Ix2, Ix3};
use tracing::debug;

use crate::blob::PhotoBlob;
use crate::color::debayer::debayer;
use crate::config::DebayerConfig;
use crate::consts::{COLOR_IMAGE_KEY, RAW_IMAGE_KEY};
use crate::error::{HiveError, Result};

/// Which blob field holds the photo's own pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoKind {
    /// `colorimg` was stored by the camera tooling.
    Color,
    /// Only the raw Bayer mosaic `img` was stored; color is derived on load.
    Raw,
}

impl PhotoKind {
    /// Blob key of the pixel array samples are cut from.
    pub fn field(self) -> &'static str {
        match self {
            Self::Color => COLOR_IMAGE_KEY,
            Self::Raw => RAW_IMAGE_KEY,
        }
    }
}

/// An immutable loaded photo.
///
/// The color array is always available: for raw captures it is debayered
/// once at construction.
#[derive(Clone, Debug)]
pub struct SourceImage {
    blob: PhotoBlob,
    kind: PhotoKind,
    color: Array3<f32>,
    filename: String,
}

impl SourceImage {
    /// Load and validate a photo blob from disk.
    pub fn load(path: &Path, debayer_config: &DebayerConfig) -> Result<Self> {
        let blob = PhotoBlob::load(path)?;
        Self::from_blob(blob, debayer_config)
    }

    /// Validate a blob and derive its color image if needed.
    pub fn from_blob(blob: PhotoBlob, debayer_config: &DebayerConfig) -> Result<Self> {
        let filename = blob
            .filename()
            .ok_or_else(|| HiveError::InvalidPhoto("missing filename".into()))?
            .to_string();

        let (kind, color) = if let Some(color) = blob.array(COLOR_IMAGE_KEY) {
            let color = color
                .view()
                .into_dimensionality::<Ix3>()
                .map_err(|e| HiveError::InvalidPhoto(format!("{filename}: colorimg {e}")))?
                .to_owned();
            (PhotoKind::Color, color)
        } else if let Some(raw) = blob.array(RAW_IMAGE_KEY) {
            let raw = raw
                .view()
                .into_dimensionality::<Ix2>()
                .map_err(|e| HiveError::InvalidPhoto(format!("{filename}: img {e}")))?
                .to_owned();
            debug!(
                filename = %filename,
                pattern = %debayer_config.pattern,
                method = %debayer_config.method,
                "deriving color image from raw mosaic"
            );
            let color = debayer(&raw, debayer_config.pattern, debayer_config.method);
            (PhotoKind::Raw, color)
        } else {
            return Err(HiveError::InvalidPhoto(format!(
                "{filename}: neither colorimg nor img present"
            )));
        };

        let (h, w, _) = color.dim();
        if h == 0 || w == 0 {
            return Err(HiveError::InvalidPhoto(format!(
                "{filename}: empty image {w}x{h}"
            )));
        }

        Ok(Self {
            blob,
            kind,
            color,
            filename,
        })
    }

    pub fn blob(&self) -> &PhotoBlob {
        &self.blob
    }

    pub fn kind(&self) -> PhotoKind {
        self.kind
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Color image, shape `(height, width, 3)`, BGR.
    pub fn color(&self) -> &Array3<f32> {
        &self.color
    }

    /// The stored array samples are cut from (`colorimg` or `img`).
    pub fn sample_source(&self) -> &ArrayD<f32> {
        self.blob
            .array(self.kind.field())
            .expect("validated photo keeps its pixel field")
    }

    pub fn width(&self) -> usize {
        self.color.dim().1
    }

    pub fn height(&self) -> usize {
        self.color.dim().0
    }
}
