#[allow(dead_code)]
mod common;

use std::cell::RefCell;
use std::path::Path;

use tempfile::TempDir;

use hivesample_core::blob::{BlobValue, PhotoBlob};
use hivesample_core::error::{HiveError, Result};
use hivesample_core::pairing::{
    default_target_dir, find_pair, parse_time_and_id, process_directory, CaptureName,
    CapturePair, PairCombiner, ReportOnly,
};

const T1: &str = "2022-05-01_120000";
const T2: &str = "2022-05-01_120500";

fn capture(dir: &Path, time: &str, id: u32) -> std::path::PathBuf {
    let name = format!("hive_{time}.cam{id:04}.np");
    common::write_blob(dir, &name, &common::color_blob(&name, 2, 2))
}

// ---------------------------------------------------------------------------
// Name parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_time_and_id() {
    assert_eq!(
        parse_time_and_id("hive_2022-05-01_120000.cam0012.np"),
        Some(CaptureName {
            timestamp: "2022-05-01_120000".into(),
            id: 12
        })
    );
}

#[test]
fn test_parse_short_segments_use_whole_segment() {
    assert_eq!(
        parse_time_and_id("t1.7.np"),
        Some(CaptureName {
            timestamp: "t1".into(),
            id: 7
        })
    );
}

#[test]
fn test_parse_rejects_unrecognised_names() {
    assert_eq!(parse_time_and_id("noseparator"), None);
    assert_eq!(parse_time_and_id("hive_2022.camABCD.np"), None);
}

// ---------------------------------------------------------------------------
// Finding pairs
// ---------------------------------------------------------------------------

#[test]
fn test_find_pair_same_time_greater_id() {
    let dir = TempDir::new().unwrap();
    let a = capture(dir.path(), T1, 1);
    let b = capture(dir.path(), T1, 3);
    capture(dir.path(), T1, 2);
    capture(dir.path(), T2, 9);

    let pair = find_pair(&a, dir.path()).unwrap().unwrap();
    assert_eq!(pair.source_id, 1);
    assert_eq!(pair.target_id, 2);
    assert_eq!(pair.timestamp, T1);

    // the last capture of a time has no partner
    assert_eq!(find_pair(&b, dir.path()).unwrap(), None);
}

#[test]
fn test_find_pair_ignores_other_times_and_extensions() {
    let dir = TempDir::new().unwrap();
    let a = capture(dir.path(), T1, 1);
    capture(dir.path(), T2, 5);
    std::fs::write(dir.path().join(format!("hive_{T1}.cam0009.png")), b"x").unwrap();

    assert_eq!(find_pair(&a, dir.path()).unwrap(), None);
}

// ---------------------------------------------------------------------------
// process_directory
// ---------------------------------------------------------------------------

#[test]
fn test_missing_source_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = process_directory(&missing, &dir.path().join("out"), &ReportOnly, '%', |_, _| {})
        .unwrap_err();
    assert!(matches!(err, HiveError::MissingSourceDirectory(_)));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_report_only_finds_pairs_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("captures");
    std::fs::create_dir(&src).unwrap();
    capture(&src, T1, 1);
    capture(&src, T1, 2);
    capture(&src, T2, 1);
    capture(&src, T2, 4);
    capture(&src, T2, 7);
    std::fs::write(src.join("readme.np"), b"{}").unwrap();

    let target = default_target_dir(&src);
    let mut calls = Vec::new();
    let report = process_directory(&src, &target, &ReportOnly, '%', |done, total| {
        calls.push((done, total))
    })
    .unwrap();

    assert!(target.is_dir());
    assert_eq!(report.scanned, 6);
    let ids: Vec<(String, u32, u32)> = report
        .pairs
        .iter()
        .map(|p| (p.timestamp.clone(), p.source_id, p.target_id))
        .collect();
    assert_eq!(
        ids,
        vec![
            (T1.to_string(), 1, 2),
            (T2.to_string(), 1, 4),
            (T2.to_string(), 4, 7),
        ]
    );
    assert!(report.written.is_empty());
    assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    assert_eq!(calls.last(), Some(&(6, 6)));
}

/// Combiner that records pairs and emits a small marker blob for each.
struct Marker {
    seen: RefCell<Vec<(u32, u32)>>,
}

impl PairCombiner for Marker {
    fn combine(
        &self,
        pair: &CapturePair,
        source: &PhotoBlob,
        target: &PhotoBlob,
    ) -> Result<Option<PhotoBlob>> {
        self.seen.borrow_mut().push((pair.source_id, pair.target_id));
        let mut out = PhotoBlob::new();
        let name = format!("{}:{}", source.filename().unwrap(), target.filename().unwrap());
        out.insert("filename", BlobValue::Text(name));
        Ok(Some(out))
    }
}

#[test]
fn test_combiner_output_is_written_sanitized() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("captures");
    std::fs::create_dir(&src).unwrap();
    capture(&src, T1, 1);
    capture(&src, T1, 2);

    let target = dir.path().join("combined");
    let combiner = Marker {
        seen: RefCell::new(Vec::new()),
    };
    let report = process_directory(&src, &target, &combiner, '%', |_, _| {}).unwrap();

    assert_eq!(combiner.seen.borrow().as_slice(), &[(1, 2)]);
    assert_eq!(report.written.len(), 1);
    let name = report.written[0].file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, format!("hive_{T1}.cam0001.np%hive_{T1}.cam0002.np"));
    assert!(report.written[0].exists());
}

#[test]
fn test_default_target_dir() {
    assert_eq!(
        default_target_dir(Path::new("./captures")),
        Path::new("./captures_subtracted")
    );
    assert_eq!(
        default_target_dir(Path::new("captures/")),
        Path::new("captures_subtracted")
    );
}
