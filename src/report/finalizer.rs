use std::path::Path;

use chrono::{DateTime, Utc};

use crate::report::error::Result;
use crate::report::model::Summary;
use crate::report::store::ReportStore;

/// Compute the summary of the report at `path` and persist it.
///
/// Finalizing an already sealed report is allowed and recomputes the summary
/// from the current steps.
pub fn finalize(path: &Path) -> Result<Summary> {
    finalize_at(path, Utc::now())
}

pub fn finalize_at(path: &Path, now: DateTime<Utc>) -> Result<Summary> {
    let mut report = ReportStore::load(path)?;

    if report.is_sealed() {
        tracing::debug!(path = %path.display(), "Report already finalized, recomputing summary");
    }
    let summary = report.seal(now).clone();
    ReportStore::save(path, &report)?;

    tracing::info!(
        path = %path.display(),
        total = summary.total_steps,
        passed = summary.passed_steps,
        failed = summary.failed_steps,
        status = %summary.overall_status,
        "Finalized report"
    );
    Ok(summary)
}
