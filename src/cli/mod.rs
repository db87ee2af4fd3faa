//! Command dispatch.
//!
//! Every handler receives the paths it works on as parameters; nothing is
//! shared between commands besides the explicit [`Config`].

pub mod args;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

pub use args::{Cli, Command, ParseFormat};

use crate::config::Config;
use crate::payload::{extract_artifacts, Payload};
use crate::render::{render_execution_summary, render_report_to_string, OutputTarget};
use crate::report::{self, ReportStore, RunInfo};
use crate::util;

pub fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Init {
            report_file,
            project_name,
        } => init(&report_file, project_name),
        Command::Step {
            file,
            phase,
            status,
            message,
        } => step(&file, &phase, &status, &message),
        Command::Finalize { file } => finalize(&file),
        Command::Parse {
            report_file,
            format,
        } => parse(&report_file, format, config),
        Command::Extract {
            payload,
            output_dir,
        } => extract(&payload, &output_dir),
        Command::Summary { payload } => summary(&payload, config),
    }
}

fn init(path: &Path, project_name: Option<String>) -> Result<()> {
    let run = RunInfo::new(Utc::now(), util::hostname()).with_project_name(project_name);
    ReportStore::create(path, run, util::detect_environment())
        .with_context(|| format!("Failed to initialize report {}", path.display()))?;
    Ok(())
}

fn step(path: &Path, phase: &str, status: &str, message: &str) -> Result<()> {
    report::record_step(path, phase, status, message)
        .with_context(|| format!("Failed to record step '{phase}' in {}", path.display()))?;
    Ok(())
}

fn finalize(path: &Path) -> Result<()> {
    report::finalize(path)
        .with_context(|| format!("Failed to finalize report {}", path.display()))?;
    Ok(())
}

fn parse(path: &Path, format: ParseFormat, config: &Config) -> Result<()> {
    let report = ReportStore::load(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;

    match format {
        ParseFormat::Markdown => {
            let target = OutputTarget::from_config(config);
            target
                .emit(&render_report_to_string(&report))
                .with_context(|| format!("Failed to write report to {}", target.describe()))?;
        }
        ParseFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            write_stdout(&format!("{json}\n"))?;
        }
        ParseFormat::Yaml => {
            write_stdout(&ReportStore::render(&report)?)?;
        }
    }
    Ok(())
}

fn extract(payload_path: &Path, output_dir: &Path) -> Result<()> {
    let payload = Payload::from_path(payload_path)?;
    let stats = extract_artifacts(&payload, output_dir, &mut io::stdout().lock())?;
    tracing::info!(
        written = stats.written.len(),
        skipped = stats.skipped.len(),
        output_dir = %output_dir.display(),
        "Extracted artifacts"
    );
    Ok(())
}

fn summary(payload_path: &Path, config: &Config) -> Result<()> {
    let payload = Payload::from_path(payload_path)?;
    let target = OutputTarget::from_config(config);
    target
        .emit(&render_execution_summary(&payload))
        .with_context(|| format!("Failed to write summary to {}", target.describe()))?;
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write to stdout")
}
