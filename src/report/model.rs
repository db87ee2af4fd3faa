//! In-memory report document and the rules that derive its summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_PASSED: &str = "passed";
pub const STATUS_FAILED: &str = "failed";

/// Metadata captured once when the report is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfo {
    pub start_time: DateTime<Utc>,
    /// Host that executed the run
    pub runner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl RunInfo {
    pub fn new(start_time: DateTime<Utc>, runner: impl Into<String>) -> Self {
        Self {
            start_time,
            runner: runner.into(),
            project_name: None,
        }
    }

    /// Attach a project name. Empty names are treated as absent.
    pub fn with_project_name(mut self, name: Option<String>) -> Self {
        self.project_name = name.filter(|n| !n.is_empty());
        self
    }
}

/// Execution platform the report was created on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub shell: String,
}

/// One recorded test phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub phase: String,
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// How a step's free-form status counts towards the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Failed,
    /// Stored verbatim, excluded from pass/fail tallies
    Other,
}

impl Step {
    pub fn new(
        phase: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            phase: phase.into(),
            status: status.into(),
            message: message.into(),
            timestamp,
        }
    }

    pub fn outcome(&self) -> StepOutcome {
        match self.status.as_str() {
            STATUS_PASSED => StepOutcome::Passed,
            STATUS_FAILED => StepOutcome::Failed,
            _ => StepOutcome::Other,
        }
    }
}

/// Aggregate block attached by finalize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub end_time: DateTime<Utc>,
    pub duration_seconds: u64,
    pub total_steps: usize,
    pub passed_steps: usize,
    pub failed_steps: usize,
    pub overall_status: String,
    pub success_rate: String,
}

impl Summary {
    /// Derive the summary of `report` as of `end_time`.
    ///
    /// The duration is truncated to whole seconds and clamped at zero when the
    /// clock reads earlier than the recorded start.
    pub fn compute(report: &Report, end_time: DateTime<Utc>) -> Self {
        let duration_seconds = end_time
            .signed_duration_since(report.run.start_time)
            .num_seconds()
            .max(0) as u64;

        let mut passed_steps = 0;
        let mut failed_steps = 0;
        for step in &report.steps {
            match step.outcome() {
                StepOutcome::Passed => passed_steps += 1,
                StepOutcome::Failed => failed_steps += 1,
                StepOutcome::Other => {}
            }
        }
        let total_steps = report.steps.len();

        let overall_status = if failed_steps == 0 {
            STATUS_PASSED
        } else {
            STATUS_FAILED
        };

        Self {
            end_time,
            duration_seconds,
            total_steps,
            passed_steps,
            failed_steps,
            overall_status: overall_status.to_string(),
            success_rate: success_rate(passed_steps, total_steps),
        }
    }

    pub fn is_passed(&self) -> bool {
        self.overall_status == STATUS_PASSED
    }
}

/// Percentage of passed steps, rounded to a whole number.
pub fn success_rate(passed: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let rate = passed as f64 / total as f64 * 100.0;
    format!("{rate:.0}%")
}

/// The full persisted test-run document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "test_run")]
    pub run: RunInfo,
    pub environment: Environment,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Report {
    pub fn new(run: RunInfo, environment: Environment) -> Self {
        Self {
            run,
            environment,
            steps: Vec::new(),
            summary: None,
        }
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Recompute the summary from the current steps and attach it.
    pub fn seal(&mut self, end_time: DateTime<Utc>) -> &Summary {
        let summary = Summary::compute(self, end_time);
        self.summary.insert(summary)
    }

    pub fn is_sealed(&self) -> bool {
        self.summary.is_some()
    }
}
