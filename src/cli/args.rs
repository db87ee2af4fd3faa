//! Command-line arguments and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "home-ci-reporter",
    version,
    about = "E2E test report generator",
    long_about = "Generates YAML test reports for e2e tests with atomic operations \
                  ensuring valid YAML at all times"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new test report
    Init {
        /// Report file to create (parent directories are created)
        report_file: PathBuf,
        /// Optional project name recorded in the run metadata
        project_name: Option<String>,
    },
    /// Add a test step result
    Step {
        /// Report file path
        #[arg(short, long, value_name = "REPORT_FILE")]
        file: PathBuf,
        /// Test phase name
        phase: String,
        /// Step status (`passed` and `failed` are counted in the summary)
        status: String,
        /// Free-form message
        #[arg(allow_hyphen_values = true)]
        message: String,
    },
    /// Finalize the test report with summary
    Finalize {
        /// Report file path
        #[arg(short, long, value_name = "REPORT_FILE")]
        file: PathBuf,
    },
    /// Parse and display test report with GitHub Actions formatting
    Parse {
        report_file: PathBuf,
        /// Output format; only markdown is written to the step summary
        #[arg(long, value_enum, default_value_t = ParseFormat::Markdown)]
        format: ParseFormat,
    },
    /// Extract and decode artifacts from GitHub Actions payload
    Extract {
        /// Client payload JSON file
        payload: PathBuf,
        /// Directory the decoded artifacts are written to
        output_dir: PathBuf,
    },
    /// Generate execution summary from GitHub Actions payload
    Summary {
        /// Client payload JSON file
        payload: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseFormat {
    /// Metrics block for the console or the step summary
    Markdown,
    /// Pretty JSON dump of the whole report
    Json,
    /// The report document as stored on disk
    Yaml,
}
