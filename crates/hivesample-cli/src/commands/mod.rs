pub mod config;
pub mod info;
pub mod pair;
pub mod preview;
pub mod sample;

use std::path::Path;

use anyhow::{Context, Result};
use hivesample_core::config::SamplerConfig;
use hivesample_core::geometry::Point;

/// Load the config file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SamplerConfig> {
    match path {
        Some(path) => SamplerConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(SamplerConfig::default()),
    }
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}
