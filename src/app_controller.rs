use anyhow::Result;
use log::{error, info, debug};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use crate::app_config::Config;
use crate::document::{DocumentDriver, DocumentStats};
use crate::errors::SheetError;
use crate::file_utils::FileManager;

// @module: Application controller for cloze sheet generation

/// Outcome of a run over several base names
#[derive(Debug, Default)]
pub struct RunReport {
    // @field: Base names that produced a sheet, with their counters
    pub processed: Vec<(String, DocumentStats)>,

    // @field: Base names that were skipped, with the reason
    pub failed: Vec<(String, String)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every base name in order. A failure is reported and the
    /// remaining base names still run.
    pub fn run(&self, basenames: &[String]) -> RunReport {
        let mut report = RunReport::default();

        let progress = if basenames.len() > 1 {
            let bar = ProgressBar::new(basenames.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(bar)
        } else {
            None
        };

        for basename in basenames {
            if let Some(bar) = &progress {
                bar.set_message(basename.clone());
            }

            match self.process_basename(basename) {
                Ok(stats) => {
                    info!("{}: {}", basename, stats);
                    report.processed.push((basename.clone(), stats));
                }
                Err(e) => {
                    error!("{}: {}", basename, e);
                    report.failed.push((basename.clone(), e.to_string()));
                }
            }

            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        report
    }

    /// Turn `<basename><input_suffix>` into `<basename><output_suffix>`
    pub fn process_basename(&self, basename: &str) -> Result<DocumentStats, SheetError> {
        info!("{}", basename);
        let input = FileManager::sibling_path(basename, &self.config.input_suffix);
        let output = FileManager::sibling_path(basename, &self.config.output_suffix);
        self.process_file(&input, &output)
    }

    /// Generate one sheet from `input` into `output`
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<DocumentStats, SheetError> {
        // Open the input first so a missing source leaves no empty sheet behind
        let reader = FileManager::open_input(input)?;
        let mut writer = FileManager::create_output(output)?;
        debug!("Reading {:?}, writing {:?}", input, output);

        let driver = DocumentDriver::new(&self.config.document);
        driver.process(reader, &mut writer)
    }
}
