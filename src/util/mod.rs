//! Utility modules

pub mod host;

pub use host::{detect_environment, hostname, invoking_program};
