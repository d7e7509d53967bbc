//! Justify command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::{read_sources, resolve_patterns},
    output::{create_formatter, OutputFormat},
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textjust_engine::{EngineConfig, ExecutionMode, Input, Justifier};

/// Arguments for the justify command
#[derive(Debug, Args)]
pub struct JustifyArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted or `-`
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Line width in bytes
    #[arg(short, long, value_name = "N")]
    pub width: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render lines on the calling thread only
    #[arg(long, conflicts_with = "parallel")]
    pub sequential: bool,

    /// Render lines in parallel even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Line width in bytes
    pub width: usize,
    /// Output format
    pub format: OutputFormat,
    /// Engine configuration
    pub engine: EngineConfig,
}

impl JustifyArgs {
    /// Execute the justify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting justification");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&config)?;

        let justifier = Justifier::with_config(settings.width, settings.engine.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let output = justifier
            .justify_input(self.read_input()?)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        log::info!(
            "Justified {} words into {} lines ({:?}, {:.2} ms)",
            output.metadata.word_count,
            output.metadata.line_count,
            output.metadata.mode_used,
            output.metadata.processing_time_ms
        );

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(settings.format, settings.width, writer);
        for line in &output.lines {
            formatter.format_line(line)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Merge command-line flags over `config`
    pub fn resolve(&self, config: &CliConfig) -> Result<ResolvedSettings> {
        let width = self.width.unwrap_or(config.justify.width);
        if width == 0 {
            return Err(CliError::ConfigError("Width must be greater than 0".to_string()).into());
        }

        let threads = self.threads.or(config.performance.worker_threads());
        if threads == Some(0) {
            return Err(
                CliError::ConfigError("Thread count must be greater than 0".to_string()).into(),
            );
        }

        let execution_mode = if self.sequential {
            ExecutionMode::Sequential
        } else if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        Ok(ResolvedSettings {
            width,
            format: self.format.unwrap_or(config.output.format),
            engine: EngineConfig {
                execution_mode,
                threads,
                parallel_threshold: config.performance.parallel_threshold,
            },
        })
    }

    /// Build the engine input from files or stdin
    fn read_input(&self) -> Result<Input> {
        if self.input.is_empty() || self.input.iter().all(|i| i == "-") {
            log::debug!("Reading from stdin");
            return Ok(Input::from_reader(io::stdin()));
        }

        let files = resolve_patterns(&self.input)?;
        Ok(Input::from_text(read_sources(&files)?))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
