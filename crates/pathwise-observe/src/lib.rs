//! Logging setup for the Pathwise binaries.

pub mod tracing_setup;
