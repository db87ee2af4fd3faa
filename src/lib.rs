pub mod cli;
pub mod config;
pub mod payload;
pub mod render;
pub mod report;
pub mod util;

pub use config::Config;
pub use payload::{extract_artifacts, ArtifactContent, ExtractStats, Payload, PayloadError};
pub use report::{
    finalize, record_step, Environment, Report, ReportError, ReportStore, RunInfo, Step,
    StepOutcome, Summary,
};
