use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hivesample_core::config::SamplerConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the active config (defaults unless `--config` was given) as TOML.
pub fn run(args: &ConfigArgs, config: &SamplerConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hive.toml");
        let mut config = SamplerConfig::default();
        config.display.gain = 2.5;
        config.labels.delimiter = ',';

        run(
            &ConfigArgs {
                output: Some(path.clone()),
            },
            &config,
        )
        .unwrap();

        let loaded = SamplerConfig::load(&path).unwrap();
        assert_eq!(loaded.display.gain, 2.5);
        assert_eq!(loaded.labels.delimiter, ',');
    }
}
