use std::path::PathBuf;

use tracing::info;

use crate::blob::{BlobValue, PhotoBlob};
use crate::config::OutputConfig;
use crate::consts::{ANCHOR_KEY, COLOR_IMAGE_KEY, FILENAME_KEY, ILLEGAL_FILENAME_CHARS};
use crate::error::Result;
use crate::sampler::SampleRecord;
use crate::source::{PhotoKind, SourceImage};

/// Replace characters the filesystem rejects with `substitute`.
pub fn sanitize_filename(name: &str, substitute: char) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) {
                substitute
            } else {
                c
            }
        })
        .collect()
}

/// Build the blob written for one sample: the source metadata with the
/// pixel field, anchor and filename overwritten.
pub fn sample_blob(image: &SourceImage, record: &SampleRecord) -> PhotoBlob {
    let mut blob = image.blob().clone();
    if image.kind() == PhotoKind::Raw {
        blob.remove(COLOR_IMAGE_KEY);
    }
    blob.insert(record.photo_type_field, BlobValue::Array(record.patch.clone()));
    blob.insert(
        ANCHOR_KEY,
        BlobValue::Tuple(vec![record.anchor.0, record.anchor.1]),
    );
    blob.insert(FILENAME_KEY, BlobValue::Text(record.filename.clone()));
    blob
}

/// Write every record into `output.directory`, creating it if needed.
///
/// Returns the written paths in record order.
pub fn save_samples(
    image: &SourceImage,
    records: &[SampleRecord],
    output: &OutputConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&output.directory)?;

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = output
            .directory
            .join(sanitize_filename(&record.filename, output.substitute));
        sample_blob(image, record).save(&path)?;
        written.push(path);
    }

    info!(
        source = image.filename(),
        count = written.len(),
        dir = %output.directory.display(),
        "saved samples"
    );
    Ok(written)
}
