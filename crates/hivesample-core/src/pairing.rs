//! Pairing of time-correlated captures.
//!
//! Captures are named `<...time>.<...id>.np`: the last 17 characters of the
//! first dot-separated segment are the capture time, the last 4 characters
//! of the second segment are a sequence id. Two captures pair up when their
//! times match and the second id is greater.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::blob::PhotoBlob;
use crate::consts::{PHOTO_EXTENSION, SEQUENCE_ID_LEN, SUBTRACTED_DIR_SUFFIX, TIMESTAMP_LEN};
use crate::error::{HiveError, Result};
use crate::io::samples::sanitize_filename;

/// Time and sequence id parsed from a capture file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureName {
    pub timestamp: String,
    pub id: u32,
}

/// Parse a capture file name. Returns `None` for names that do not follow
/// the `<...time>.<...id>.<ext>` layout.
pub fn parse_time_and_id(name: &str) -> Option<CaptureName> {
    let mut segments = name.split('.');
    let first = segments.next()?;
    let second = segments.next()?;

    let timestamp = last_chars(first, TIMESTAMP_LEN).to_string();
    let id = last_chars(second, SEQUENCE_ID_LEN).parse().ok()?;
    Some(CaptureName { timestamp, id })
}

fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// A capture and the later capture taken at the same time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturePair {
    pub source: PathBuf,
    pub target: PathBuf,
    pub timestamp: String,
    pub source_id: u32,
    pub target_id: u32,
}

/// Photo files directly inside `dir`, sorted by path.
pub fn photo_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == PHOTO_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn capture_name(path: &Path) -> Option<CaptureName> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_time_and_id)
}

/// Among `candidates`, the capture with the same time as `file` and the
/// smallest id greater than its own.
pub fn pair_among(file: &Path, candidates: &[PathBuf]) -> Option<CapturePair> {
    let own = capture_name(file)?;
    candidates
        .iter()
        .filter_map(|c| capture_name(c).map(|name| (c, name)))
        .filter(|(_, name)| name.timestamp == own.timestamp && name.id > own.id)
        .min_by_key(|(_, name)| name.id)
        .map(|(c, name)| CapturePair {
            source: file.to_path_buf(),
            target: c.clone(),
            timestamp: own.timestamp.clone(),
            source_id: own.id,
            target_id: name.id,
        })
}

/// Look for the partner of `file` in `dir`.
pub fn find_pair(file: &Path, dir: &Path) -> Result<Option<CapturePair>> {
    let candidates = photo_files(dir)?;
    Ok(pair_among(file, &candidates))
}

/// Combines a capture with its later partner.
///
/// Returning `None` means nothing is written for the pair.
pub trait PairCombiner {
    fn combine(
        &self,
        pair: &CapturePair,
        source: &PhotoBlob,
        target: &PhotoBlob,
    ) -> Result<Option<PhotoBlob>>;
}

/// Loads both captures and reports the pair without producing output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOnly;

impl PairCombiner for ReportOnly {
    fn combine(
        &self,
        pair: &CapturePair,
        _source: &PhotoBlob,
        _target: &PhotoBlob,
    ) -> Result<Option<PhotoBlob>> {
        info!(
            timestamp = %pair.timestamp,
            source_id = pair.source_id,
            target_id = pair.target_id,
            "found pair"
        );
        Ok(None)
    }
}

/// Outcome of [`process_directory`].
#[derive(Clone, Debug, Default)]
pub struct PairReport {
    pub scanned: usize,
    pub pairs: Vec<CapturePair>,
    pub written: Vec<PathBuf>,
}

/// Pair every capture in `src` and hand each pair to `combiner`.
///
/// `target` is created if missing. Combined blobs are written there under
/// their sanitized `filename`. `progress` is called with `(files_done, total)`.
pub fn process_directory(
    src: &Path,
    target: &Path,
    combiner: &dyn PairCombiner,
    substitute: char,
    mut progress: impl FnMut(usize, usize),
) -> Result<PairReport> {
    if !src.is_dir() {
        return Err(HiveError::MissingSourceDirectory(src.to_path_buf()));
    }
    std::fs::create_dir_all(target)?;

    let files = photo_files(src)?;
    let total = files.len();
    let mut report = PairReport {
        scanned: total,
        ..Default::default()
    };

    for (i, file) in files.iter().enumerate() {
        if capture_name(file).is_none() {
            warn!(path = %file.display(), "unrecognised capture name; skipping");
        } else if let Some(pair) = pair_among(file, &files) {
            debug!(source = %pair.source.display(), target = %pair.target.display(), "pairing");
            let source_blob = PhotoBlob::load(&pair.source)?;
            let target_blob = PhotoBlob::load(&pair.target)?;

            if let Some(combined) = combiner.combine(&pair, &source_blob, &target_blob)? {
                let name = combined
                    .filename()
                    .map(str::to_string)
                    .or_else(|| {
                        pair.source
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                    })
                    .unwrap_or_else(|| format!("{}.{}", pair.source_id, PHOTO_EXTENSION));
                let path = target.join(sanitize_filename(&name, substitute));
                combined.save(&path)?;
                report.written.push(path);
            }
            report.pairs.push(pair);
        }
        progress(i + 1, total);
    }

    Ok(report)
}

/// Default target directory for a pairing source: `<source>_subtracted`.
pub fn default_target_dir(source: &Path) -> PathBuf {
    let normalized: PathBuf = source.components().collect();
    let mut name = normalized.into_os_string();
    name.push(SUBTRACTED_DIR_SUFFIX);
    PathBuf::from(name)
}
