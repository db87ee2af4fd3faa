//! Human-readable views of reports and CI payloads.

pub mod execution;
pub mod report_view;
pub mod target;

pub use execution::render_execution_summary;
pub use report_view::{render_report, render_report_to_string};
pub use target::OutputTarget;
