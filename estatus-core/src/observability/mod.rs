//! Observability for entities-status.
//! `tracing` crate with `EnvFilter`; logs go to stderr.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
