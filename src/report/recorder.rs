use std::path::Path;

use chrono::{DateTime, Utc};

use crate::report::error::Result;
use crate::report::model::Step;
use crate::report::store::ReportStore;

/// Append one step to the report at `path`, timestamped now.
pub fn record_step(path: &Path, phase: &str, status: &str, message: &str) -> Result<Step> {
    record_step_at(path, phase, status, message, Utc::now())
}

pub fn record_step_at(
    path: &Path,
    phase: &str,
    status: &str,
    message: &str,
    now: DateTime<Utc>,
) -> Result<Step> {
    let mut report = ReportStore::load(path)?;

    let step = Step::new(phase, status, message, now);
    report.push_step(step.clone());
    ReportStore::save(path, &report)?;

    tracing::info!(
        path = %path.display(),
        phase = %step.phase,
        status = %step.status,
        index = report.steps.len() - 1,
        "Recorded step"
    );
    Ok(step)
}
