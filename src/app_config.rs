use anyhow::{anyhow, Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles loading, validating and saving the settings that
/// apply to every processed document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Appended to a base name to form the input path
    #[serde(default = "default_input_suffix")]
    pub input_suffix: String,

    /// Appended to a base name to form the output path
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Driver state applied before the first line of every document
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Initial driver settings, equivalent to directives at the top of a file
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    // @field: Same as the #lines directive
    pub lines_as_sentences: bool,

    // @field: Same as the #sourcelinenumbers directive
    pub source_line_numbers: bool,

    // @field: Same as the #ignorerepeats directive
    pub ignore_repeats: bool,

    // @field: Same as #chapterbreaks N; 0 disables chapters
    pub chapter_break_length: usize,

    // @field: Markers appended after the built-in EOS marker
    pub extra_markers: Vec<String>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_input_suffix() -> String {
    "-original.txt".to_string()
}

fn default_output_suffix() -> String {
    "-blanks.txt".to_string()
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_suffix.is_empty() {
            return Err(anyhow!("Input suffix must not be empty"));
        }
        if self.output_suffix.is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }
        // Identical suffixes would overwrite the source document
        if self.input_suffix == self.output_suffix {
            return Err(anyhow!(
                "Input and output suffixes must differ (both are '{}')",
                self.input_suffix
            ));
        }
        if let Some(marker) = self.document.extra_markers.iter().find(|m| m.is_empty()) {
            return Err(anyhow!("Empty end-of-sentence marker in config: {:?}", marker));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_suffix: default_input_suffix(),
            output_suffix: default_output_suffix(),
            log_level: LogLevel::default(),
            document: DocumentConfig::default(),
        }
    }
}
