//! Serialized photo blobs.
//!
//! A blob is an open-ended mapping of string keys to tagged values. Only
//! `filename` and one of `colorimg` / `img` carry meaning for this crate;
//! every other key is carried through untouched when samples are written.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::consts::FILENAME_KEY;
use crate::error::Result;

/// A single value stored in a blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BlobValue {
    Array(ArrayD<f32>),
    Text(String),
    Tuple(Vec<i64>),
    Scalar(f64),
    Flag(bool),
    Null,
}

impl BlobValue {
    pub fn as_array(&self) -> Option<&ArrayD<f32>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short human-readable description, e.g. `array 480x640x3`.
    pub fn describe(&self) -> String {
        match self {
            Self::Array(a) => {
                let dims: Vec<String> = a.shape().iter().map(|d| d.to_string()).collect();
                format!("array {}", dims.join("x"))
            }
            Self::Text(s) => format!("text {s:?}"),
            Self::Tuple(t) => format!("tuple {t:?}"),
            Self::Scalar(v) => format!("scalar {v}"),
            Self::Flag(b) => format!("flag {b}"),
            Self::Null => "null".to_string(),
        }
    }
}

/// Key/value mapping loaded from or written to a `.np` file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoBlob {
    entries: BTreeMap<String, BlobValue>,
}

impl PhotoBlob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a blob from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the blob to disk, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&BlobValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: BlobValue) -> Option<BlobValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<BlobValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BlobValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-null array stored under `key`.
    pub fn array(&self, key: &str) -> Option<&ArrayD<f32>> {
        self.get(key).and_then(BlobValue::as_array)
    }

    /// The capture filename, if present.
    pub fn filename(&self) -> Option<&str> {
        self.get(FILENAME_KEY).and_then(BlobValue::as_text)
    }
}
