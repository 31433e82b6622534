use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use hivesample_core::config::SamplerConfig;
use hivesample_core::geometry::Point;
use hivesample_core::photo::Photo;
use hivesample_core::sampler::parse_labels;
use tracing::debug;

use super::parse_point;
use crate::summary::print_sample_summary;

#[derive(Args)]
pub struct SampleArgs {
    /// Input photo blob (.np)
    pub file: PathBuf,

    /// Start point in full-image x,y
    #[arg(long, value_parser = parse_point)]
    pub start: Point,

    /// End point in full-image x,y
    #[arg(long, value_parser = parse_point)]
    pub end: Point,

    /// Number of samples along the line, ends included
    #[arg(long, default_value = "2", value_parser = RangedU64ValueParser::<usize>::new().range(2..))]
    pub count: usize,

    /// Side length of each square patch in pixels (odd)
    #[arg(long, default_value = "1", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub size: usize,

    /// Sample labels, separated by the configured delimiter (default ';')
    #[arg(long, default_value = "")]
    pub labels: String,

    /// Output directory (overrides the config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &SampleArgs, config: &SamplerConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(ref dir) = args.output_dir {
        config.output.directory = dir.clone();
    }

    let mut photo = Photo::open(&args.file, &config.debayer)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    photo.sampler.mark(args.start);
    photo.sampler.mark(args.end);

    let labels = parse_labels(&args.labels, config.labels.delimiter);
    debug!(?labels, count = args.count, size = args.size, "sampling");
    let written = photo.save_samples(args.count, args.size, &labels, &config)?;

    print_sample_summary(&photo, &written);
    Ok(())
}
