//! Command-line support for the `enumgen` binary.

pub mod args;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
