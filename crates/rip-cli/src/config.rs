//! Configuration loading: TOML file first, then command line overrides

use std::fs;
use std::path::Path;

use anyhow::Context;
use rip_engine::RipConfig;

use crate::cli::Cli;

/// Parse a TOML configuration
pub fn parse_config(text: &str) -> anyhow::Result<RipConfig> {
    toml::from_str(text).context("invalid configuration")
}

fn load_file(path: &Path) -> anyhow::Result<RipConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Effective configuration for this run
pub fn resolve(cli: &Cli) -> anyhow::Result<RipConfig> {
    let mut config = match &cli.config {
        Some(path) => load_file(path)?,
        None => RipConfig::default(),
    };

    if cli.minify_css {
        config.minify_css = true;
    }
    for class in &cli.keep {
        if !config.is_kept(class) {
            config.keep.push(class.clone());
        }
    }

    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let config = parse_config("minify_css = true\nkeep = [\"is-open\"]\n").unwrap();
        assert!(config.minify_css);
        assert_eq!(config.keep, ["is-open"]);
        assert_eq!(config.bundle_separator, "");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(parse_config("minfy_css = true").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "classrip", "--html", "a.html", "--minify-css", "--keep", "x", "--keep", "x",
        ]);
        let config = resolve(&cli).unwrap();
        assert!(config.minify_css);
        assert_eq!(config.keep, ["x"]);
    }
}
