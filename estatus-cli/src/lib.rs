//! # estatus-cli
//!
//! Argument parsing and pipeline wiring for the `entities-status` binary.

pub mod args;
pub mod pipeline;

pub use args::{parse_args, Command, RunArgs, USAGE};
pub use pipeline::{exit_code, run, run_pipeline};
