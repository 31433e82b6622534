use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use hivesample_core::config::SamplerConfig;
use hivesample_core::geometry::Point;
use hivesample_core::io::preview::save_preview;
use hivesample_core::photo::Photo;

use super::parse_point;

#[derive(Args)]
pub struct PreviewArgs {
    /// Input photo blob (.np)
    pub file: PathBuf,

    /// Recentre on a viewport-local x,y and zoom in (repeatable, applied in order)
    #[arg(long, value_parser = parse_point)]
    pub zoom_at: Vec<Point>,

    /// Start point in full-image x,y
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// End point in full-image x,y
    #[arg(long, value_parser = parse_point, requires = "start")]
    pub end: Option<Point>,

    /// Number of sample points to draw between start and end
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(2..))]
    pub count: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs, config: &SamplerConfig) -> Result<()> {
    let mut photo = Photo::open(&args.file, &config.debayer)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    for p in &args.zoom_at {
        photo
            .viewport
            .zoom_at(p.x, p.y, config.display.zoom_step);
    }
    for p in args.start.iter().chain(args.end.iter()) {
        photo.sampler.mark(*p);
    }

    save_preview(&photo, config.display.gain, args.count, &args.output)?;

    let r = photo.viewport.visible_region();
    println!(
        "Visible ({}, {})..({}, {}) at zoom {}",
        r.x0,
        r.y0,
        r.x1,
        r.y1,
        photo.viewport.zoom()
    );
    println!("Saved to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        preview: PreviewArgs,
    }

    #[test]
    fn test_end_without_start_is_rejected() {
        let err = TestCli::try_parse_from(["preview", "a.np", "--end", "4,5"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_start_and_end_parse_in_order() {
        let cli =
            TestCli::try_parse_from(["preview", "a.np", "--start", "1,2", "--end", "4,5"])
                .unwrap();
        assert_eq!(cli.preview.start, Some(Point::new(1, 2)));
        assert_eq!(cli.preview.end, Some(Point::new(4, 5)));
    }
}
