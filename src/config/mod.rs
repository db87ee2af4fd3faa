mod settings;

pub use settings::{Config, STEP_SUMMARY_ENV};
