//! Command-line argument parsing for the tagfield demo binary
//!
//! Supports:
//! - Rendering a template given inline or from a file
//! - Per-run fallback values and labels (`NAME=VALUE`)
//! - Printing the surface view, the parsed segments, or JSON
//! - Replaying an interaction script

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Render `{{placeholder}}` templates as inline tags
#[derive(Parser, Debug)]
#[command(name = "tagfield", version, about = "Render {{placeholder}} templates as inline tags")]
pub struct CliArgs {
    /// Template text, e.g. "Hi {{firstName}}"
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Read the template from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "template")]
    pub file: Option<PathBuf>,

    /// Fallback value for a variable (repeatable)
    #[arg(long = "fallback", value_name = "NAME=VALUE")]
    pub fallbacks: Vec<String>,

    /// Display label for a variable (repeatable)
    #[arg(long = "label", value_name = "NAME=LABEL")]
    pub labels: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::View)]
    pub format: OutputFormat,

    /// Replay an interaction script (YAML or JSON) against the template
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Use this config file instead of ~/.config/tagfield/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Surface as text with tags drawn inline
    View,
    /// One parsed segment per line
    Segments,
    /// Machine-readable JSON
    Json,
}

/// Where the template comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Inline(String),
    File(PathBuf),
    Empty,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: TemplateSource,
    pub fallbacks: Vec<(String, String)>,
    pub labels: Vec<(String, String)>,
    pub format: OutputFormat,
    pub script: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let source = match (self.template, self.file) {
            (Some(_), Some(_)) => {
                return Err("Cannot use a TEMPLATE argument together with --file".to_string())
            }
            (Some(text), None) => TemplateSource::Inline(text),
            (None, Some(path)) => TemplateSource::File(path),
            (None, None) => TemplateSource::Empty,
        };

        let fallbacks = self
            .fallbacks
            .iter()
            .map(|pair| parse_pair(pair, "--fallback"))
            .collect::<Result<Vec<_>, _>>()?;
        let labels = self
            .labels
            .iter()
            .map(|pair| parse_pair(pair, "--label"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RunConfig {
            source,
            fallbacks,
            labels,
            format: self.format,
            script: self.script,
            config: self.config,
        })
    }
}

/// Split `NAME=VALUE`; the value may be empty or contain further `=`
fn parse_pair(pair: &str, flag: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("{} expects NAME=VALUE, got {:?}", flag, pair)),
    }
}
