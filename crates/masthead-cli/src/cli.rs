//! Command-line interface for the masthead utility
//!
//! Extracts Mermaid.js diagram blocks from a Markdown file and converts
//! each one to a PNG image via the Mermaid CLI.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use masthead::convert::{MermaidRenderer, Orchestrator, RunSummary};
use masthead::core::logging::init_logging;
use masthead::core::RenderOptions;

/// Masthead - Extract and convert Mermaid diagrams from Markdown files to PNG images
#[derive(Parser)]
#[command(name = "masthead")]
#[command(about = "Extract and convert Mermaid diagrams from Markdown files to PNG images")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the Markdown file to process
    pub input: PathBuf,

    /// Image width in pixels
    #[arg(short, long, default_value_t = 1920, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Scale factor
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_scale)]
    pub scale: f64,

    /// Background color (e.g. white, transparent, '#F0F0F0')
    #[arg(short, long, default_value = "white")]
    pub background: String,

    /// Path to the Mermaid CLI executable
    /// (defaults to node_modules/.bin/mmdc in the working directory)
    #[arg(long, value_name = "PATH")]
    pub mmdc: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err("scale must be a positive number".to_string())
    }
}

/// Main CLI application
pub struct MastheadApp;

impl MastheadApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("MASTHEAD_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("MASTHEAD_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Masthead v{}", env!("CARGO_PKG_VERSION"));
        }

        let options = RenderOptions::new(cli.width, cli.height, cli.scale, cli.background);
        let renderer = match cli.mmdc {
            Some(path) => MermaidRenderer::with_binary(path),
            None => MermaidRenderer::new(),
        };
        let orchestrator = Orchestrator::with_renderer(renderer, options);

        let summary = orchestrator.convert_file(&cli.input)?;

        Self::report_summary(&summary);
        Ok(())
    }

    /// Per-block render failures are reported but leave the exit code at 0
    fn report_summary(summary: &RunSummary) {
        if summary.failed() > 0 {
            eprintln!(
                "{} of {} diagram(s) failed to convert",
                summary.failed(),
                summary.total()
            );
        }
    }
}

impl Default for MastheadApp {
    fn default() -> Self {
        Self::new()
    }
}
