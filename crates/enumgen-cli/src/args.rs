use clap::Parser;
use std::path::PathBuf;

use enumgen_core::GeneratorConfig;
use enumgen_core::config::load_config_file;
use enumgen_core::error::GenError;

/// CLI arguments for the enumgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "enumgen",
    version,
    about = "Generate a string-to-enum initializer list from a C enumerator list"
)]
pub struct CliArgs {
    /// JSON file providing `input`, `output` and `prefix`.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Comma-separated enumerator list to read [default: enumList.txt].
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// File the initializer list is written to [default: outputEnums.txt].
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Enumerator prefix stripped before camel-casing [default: VK_COMPARE_OP_].
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Exit with status 1 if the output file is missing or out of date.
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the table to stdout without writing the output file.
    #[arg(long)]
    pub stdout: bool,

    /// Do not echo the generated table to stdout.
    #[arg(short = 'q', long, conflicts_with = "stdout")]
    pub quiet: bool,
}

impl CliArgs {
    /// Resolve the run configuration: defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<GeneratorConfig, GenError> {
        let mut config = GeneratorConfig::default();

        if let Some(path) = self.config.as_deref() {
            config.merge_file(load_config_file(path)?);
        }
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }

        Ok(config)
    }
}
