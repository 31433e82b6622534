use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use hivesample_core::config::SamplerConfig;
use hivesample_core::session::PhotoSet;

use crate::summary::print_photo_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Photo blob files (.np)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &InfoArgs, config: &SamplerConfig) -> Result<()> {
    let set = PhotoSet::open(args.files.iter().cloned(), &config.debayer);
    let skipped = args.files.len() - set.len();

    if set.is_empty() {
        bail!("None of the {} file(s) is a valid photo", args.files.len());
    }

    for photo in set.photos() {
        print_photo_summary(photo);
    }
    if skipped > 0 {
        println!("Skipped {skipped} invalid file(s); run with --verbose for details");
    }

    Ok(())
}
