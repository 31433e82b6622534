use std::path::Path;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use hivesample_core::config::SamplerConfig;
use hivesample_core::pairing::{default_target_dir, process_directory, ReportOnly};

#[derive(Args)]
pub struct PairArgs {
    /// Source sub-directory, relative to the current directory
    pub source: String,

    /// Target sub-directory (default: <source>_subtracted)
    pub target: Option<String>,
}

pub fn run(args: &PairArgs, config: &SamplerConfig) -> Result<()> {
    let source = Path::new(".").join(&args.source);
    let target = match args.target {
        Some(ref t) => Path::new(".").join(t),
        None => default_target_dir(&source),
    };
    println!("Pairing captures in {}", source.display());

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Pairing [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let report = process_directory(
        &source,
        &target,
        &ReportOnly,
        config.output.substitute,
        |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        },
    )?;
    pb.finish_and_clear();

    for pair in &report.pairs {
        println!(
            "  {}  {} -> {}",
            pair.timestamp, pair.source_id, pair.target_id
        );
    }
    println!(
        "{} pair(s) among {} file(s); {} written to {}",
        report.pairs.len(),
        report.scanned,
        report.written.len(),
        target.display()
    );
    Ok(())
}
