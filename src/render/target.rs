use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;

/// Where rendered Markdown ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to the GitHub Actions step summary file
    StepSummary(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_config(config: &Config) -> Self {
        match &config.step_summary {
            Some(path) => Self::StepSummary(path.clone()),
            None => Self::Stdout,
        }
    }

    pub fn emit(&self, text: &str) -> io::Result<()> {
        match self {
            Self::StepSummary(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(text.as_bytes())?;
                file.flush()?;
                tracing::debug!(path = %path.display(), "Appended to step summary");
            }
            Self::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                lock.write_all(text.as_bytes())?;
                lock.flush()?;
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        match self {
            Self::StepSummary(path) => path.display().to_string(),
            Self::Stdout => "stdout".to_string(),
        }
    }
}
