//! Loading of the generation configuration from disk and flags.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use iveria_core::GenerationConfig;

/// Command-line values that take precedence over the configuration file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Overrides {
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
    pub(crate) max_passes: Option<u32>,
}

/// Builds the generation configuration from an optional TOML file plus overrides.
pub(crate) fn load(path: Option<&Path>, overrides: Overrides) -> Result<GenerationConfig> {
    let mut config = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            parse(&contents)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => GenerationConfig::default(),
    };

    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if let Some(max_passes) = overrides.max_passes {
        config.max_separation_passes = max_passes;
    }

    Ok(config)
}

fn parse(contents: &str) -> Result<GenerationConfig> {
    toml::from_str(contents).context("failed to parse generation config toml contents")
}

#[cfg(test)]
mod tests {
    use iveria_core::{GenerationConfig, PlacementBand};

    use super::{load, parse, Overrides};

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config = parse(
            r#"
            width = 100
            room_count = { start = 2, end = 6 }

            [placement]
            span_divisor = 4
            "#,
        )
        .expect("config parses");

        assert_eq!(config.width, 100);
        assert_eq!(config.height, GenerationConfig::default().height);
        assert_eq!(config.room_count, 2..6);
        assert_eq!(
            config.placement,
            PlacementBand {
                origin_divisor: 3,
                span_divisor: 4,
            }
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse("width = \"wide\"").is_err());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let config = load(
            None,
            Overrides {
                width: Some(40),
                height: None,
                max_passes: Some(12),
            },
        )
        .expect("defaults load");

        assert_eq!(config.width, 40);
        assert_eq!(config.height, 48);
        assert_eq!(config.max_separation_passes, 12);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = load(
            Some(std::path::Path::new("/nonexistent/iveria.toml")),
            Overrides::default(),
        )
        .expect_err("missing file fails");
        assert!(error.to_string().contains("/nonexistent/iveria.toml"));
    }
}
