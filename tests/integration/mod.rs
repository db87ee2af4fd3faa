//! Integration tests for the `home-ci-reporter` binary
//!
//! Each test drives the real binary, one process per command, the way a CI
//! pipeline does.

#[path = "../common/mod.rs"]
pub mod common;

pub mod payload_commands;
