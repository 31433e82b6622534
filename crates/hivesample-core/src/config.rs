use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::debayer::{BayerPattern, DebayerMethod};
use crate::consts::{
    DEFAULT_DISPLAY_GAIN, DEFAULT_FILENAME_SUBSTITUTE, DEFAULT_LABEL_DELIMITER,
    DEFAULT_SAMPLE_DIR, DEFAULT_ZOOM_STEP, PHOTO_EXTENSION,
};
use crate::error::{HiveError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub debayer: DebayerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub labels: LabelConfig,
}

impl SamplerConfig {
    /// Load a TOML config file. Missing sections take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| HiveError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| HiveError::Config(e.to_string()))
    }
}

/// Where and how sample blobs are written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// Extension of written blobs, without the dot.
    pub extension: String,
    /// Replacement for characters illegal in file names.
    pub substitute: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_SAMPLE_DIR),
            extension: PHOTO_EXTENSION.to_string(),
            substitute: DEFAULT_FILENAME_SUBSTITUTE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DebayerConfig {
    #[serde(default)]
    pub pattern: BayerPattern,
    #[serde(default)]
    pub method: DebayerMethod,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixel multiplier before clipping to 8 bits.
    pub gain: f32,
    /// Zoom multiplier per zoom-in action.
    pub zoom_step: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gain: DEFAULT_DISPLAY_GAIN,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub delimiter: char,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_LABEL_DELIMITER,
        }
    }
}
