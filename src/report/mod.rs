//! Test report lifecycle: `init → step* → finalize`.
//!
//! Each command runs in its own process, so the only shared state is the
//! report file. Every transition reads the whole document, mutates it in
//! memory and atomically rewrites it through [`ReportStore`].
//!
//! There is no locking: two `step` invocations racing on one file can lose
//! one append. Callers record steps sequentially per report.

pub mod error;
pub mod finalizer;
pub mod model;
pub mod recorder;
pub mod store;

pub use error::ReportError;
pub use finalizer::{finalize, finalize_at};
pub use model::{Environment, Report, RunInfo, Step, StepOutcome, Summary};
pub use recorder::{record_step, record_step_at};
pub use store::{ReportStore, REPORT_HEADER};
