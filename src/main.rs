// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use punchout::app_config::{self, Config};
use punchout::app_controller::Controller;
use punchout::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate cloze sheets for base names (default command)
    Blanks(BlanksArgs),

    /// Write a configuration file holding the default settings
    InitConfig {
        /// Where to write the configuration
        #[arg(short, long, default_value = "punchout.json")]
        config_path: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for punchout
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct BlanksArgs {
    /// Base names; reads <BASENAME>-original.txt and writes <BASENAME>-blanks.txt
    #[arg(value_name = "BASENAME")]
    basenames: Vec<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "punchout.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Start every document in line-as-sentence mode (#lines)
    #[arg(long)]
    lines: bool,

    /// Write source line numbers before each sentence (#sourcelinenumbers)
    #[arg(long)]
    source_line_numbers: bool,

    /// Do not report repeated answers (#ignorerepeats)
    #[arg(long)]
    ignore_repeats: bool,

    /// Start a new chapter every N sentences (#chapterbreaks N)
    #[arg(long, value_name = "N")]
    chapter_breaks: Option<usize>,
}

/// punchout - cloze study sheets from plain text
///
/// Splits each source document into sentences and writes one
/// fill-in-the-blank exercise per word.
#[derive(Parser, Debug)]
#[command(name = "punchout")]
#[command(version)]
#[command(about = "Cloze study sheet generator")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "punchout reads <BASENAME>-original.txt for each base name and writes a sheet
of fill-in-the-blank exercises to <BASENAME>-blanks.txt.

EXAMPLES:
    punchout lesson1                      # Process lesson1-original.txt
    punchout lesson1 lesson2              # Process several documents in order
    punchout --lines poem                 # Every line is one sentence
    punchout --chapter-breaks 20 novel    # Chapter heading every 20 sentences
    punchout init-config                  # Write punchout.json with defaults
    punchout completions bash > punchout.bash

DIRECTIVES (lines in the source document):
    #reset               Forget answers used so far
    #lines               Treat each line as a sentence
    #sourcelinenumbers   Write '# line N' before each sentence
    #commas              Split on ', ', '. ', ' ! ', ' ? '
    #punctnocommas       Split on '. ', ' ! ', ' ? '
    #ignorerepeats       Do not report repeated answers
    #chapterbreaks N     Chapter heading every N sentences")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    blanks: BlanksArgs,
}

// @struct: Custom logger implementation, filtered by log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Start at info; the level is refined once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "punchout", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::InitConfig { config_path, force }) => init_config(&config_path, force),
        Some(Commands::Blanks(args)) => run_blanks(args),
        None => run_blanks(cli.blanks),
    }
}

fn init_config(config_path: &str, force: bool) -> Result<()> {
    if FileManager::file_exists(config_path) && !force {
        warn!("Config file already exists: {}. Use -f to overwrite.", config_path);
        return Ok(());
    }
    Config::default().save(config_path)?;
    info!("Wrote default config to {}", config_path);
    Ok(())
}

fn run_blanks(options: BlanksArgs) -> Result<()> {
    if let Some(level) = options.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    let mut config = Config::load(&options.config_path)?;

    // Command line flags override the config file
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }
    if options.lines {
        config.document.lines_as_sentences = true;
    }
    if options.source_line_numbers {
        config.document.source_line_numbers = true;
    }
    if options.ignore_repeats {
        config.document.ignore_repeats = true;
    }
    if let Some(length) = options.chapter_breaks {
        config.document.chapter_break_length = length;
    }

    log::set_max_level(config.log_level.to_level_filter());

    if options.basenames.is_empty() {
        debug!("No base names given, nothing to do");
        return Ok(());
    }

    let controller = Controller::with_config(config)?;
    let report = controller.run(&options.basenames);

    if !report.is_success() {
        return Err(anyhow!(
            "{} of {} base names could not be processed",
            report.failed.len(),
            report.total()
        ));
    }

    Ok(())
}
