//! Lookup table generation for C-style enumerations.
//!
//! This crate turns a comma-separated enumerator list such as
//! `VK_COMPARE_OP_NEVER, VK_COMPARE_OP_LESS_OR_EQUAL = 3,` into an
//! initializer list mapping camelCase names back to the enumerators:
//! - Identifier casing (`snake_to_camel`)
//! - Ordered display-name mapping (`EnumMapping`, `build_mapping`)
//! - Initializer-list formatting (`format_output`, `render`)
//! - Generator configuration and the JSON config file
//! - The read/build/format/write driver (`generate`, `check`)

// Identifier casing
pub mod case;
pub use case::snake_to_camel;

// Display name -> enumerator mapping
pub mod mapping;
pub use mapping::{EnumMapping, MappingStats, build_mapping, split_entries};

// Initializer-list output
pub mod format;
pub use format::{format_output, render};

// Paths and prefix for a run
pub mod config;
pub use config::{ConfigFile, GeneratorConfig};

pub mod error;
pub use error::GenError;

// Driver
pub mod generate;
pub use generate::{CheckOutcome, Generated, check, generate, prepare};

#[cfg(test)]
#[path = "tests/case_tests.rs"]
mod case_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod format_tests;
#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod generate_tests;
#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod mapping_tests;
