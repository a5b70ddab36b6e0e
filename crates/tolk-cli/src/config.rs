//! Loading of `tolk.toml` configuration files.
//!
//! The file deserializes straight into [`TranslatorConfig`]:
//!
//! ```toml
//! resource_directory = "strings"
//! error_handling = "return-error-info"
//! culture = "sv"
//! ```
//!
//! A relative `resource_directory` is resolved against the file's directory.

use std::fs::read_to_string;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tolk::TranslatorConfig;

/// Read the configuration at `path`, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<TranslatorConfig> {
    let Some(path) = path else {
        return Ok(TranslatorConfig::default());
    };

    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    let config = parse_config(&content, path.parent())
        .wrap_err_with(|| format!("invalid config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn parse_config(content: &str, base: Option<&Path>) -> Result<TranslatorConfig> {
    let mut config: TranslatorConfig = toml::from_str(content).into_diagnostic()?;
    if let (Some(directory), Some(base)) = (&config.resource_directory, base) {
        if directory.is_relative() {
            config.resource_directory = Some(base.join(directory));
        }
    }
    Ok(config)
}
