//! Shared test utilities
//!
//! - Scratch workspaces with a deterministic environment for the binary
//! - Report/payload file helpers

pub mod workspace;
