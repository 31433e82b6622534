use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3};

use hivesample_core::blob::{BlobValue, PhotoBlob};

/// Color image where pixel `(row, col, ch)` holds `row * 100 + col + ch * 0.1`.
pub fn gradient_color(h: usize, w: usize) -> Array3<f32> {
    Array3::from_shape_fn((h, w, 3), |(r, c, ch)| (r * 100 + c) as f32 + ch as f32 * 0.1)
}

/// Raw mosaic where pixel `(row, col)` holds `row * 100 + col`.
pub fn gradient_raw(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| (r * 100 + c) as f32)
}

/// Blob with a pre-converted color image plus some pass-through metadata.
pub fn color_blob(filename: &str, h: usize, w: usize) -> PhotoBlob {
    let mut blob = PhotoBlob::new();
    blob.insert("filename", BlobValue::Text(filename.to_string()));
    blob.insert("colorimg", BlobValue::Array(gradient_color(h, w).into_dyn()));
    blob.insert("img", BlobValue::Array(gradient_raw(h, w).into_dyn()));
    blob.insert("exposure", BlobValue::Scalar(0.5));
    blob.insert("hive", BlobValue::Text("north".to_string()));
    blob
}

/// Blob holding only a raw mosaic; `colorimg` is present but null.
pub fn raw_blob(filename: &str, h: usize, w: usize) -> PhotoBlob {
    let mut blob = PhotoBlob::new();
    blob.insert("filename", BlobValue::Text(filename.to_string()));
    blob.insert("colorimg", BlobValue::Null);
    blob.insert("img", BlobValue::Array(gradient_raw(h, w).into_dyn()));
    blob.insert("exposure", BlobValue::Scalar(0.5));
    blob
}

/// Save `blob` as `dir/name` and return the path.
pub fn write_blob(dir: &Path, name: &str, blob: &PhotoBlob) -> PathBuf {
    let path = dir.join(name);
    blob.save(&path).expect("write blob");
    path
}
