#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;

use enumgen_cli::args::CliArgs;
use enumgen_core::{CheckOutcome, GeneratorConfig, check, generate, prepare};

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUT_OF_DATE: i32 = 1;

fn main() -> Result<()> {
    // No-op unless ENUMGEN_LOG or RUST_LOG is set.
    enumgen_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let config = args
        .resolve_config()
        .context("failed to resolve generator configuration")?;
    tracing::debug!(?config, "resolved configuration");

    if args.check {
        return handle_check(&config);
    }

    let result = if args.stdout {
        prepare(&config)
    } else {
        generate(&config)
    };
    let generated = result
        .with_context(|| format!("failed to generate table from {}", config.input.display()))?;

    if !args.quiet {
        for line in &generated.lines {
            println!("{line}");
        }
    }

    if generated.stats.overwritten > 0 {
        eprintln!(
            "warning: {} enumerator(s) collapsed onto an existing display name",
            generated.stats.overwritten
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn handle_check(config: &GeneratorConfig) -> Result<()> {
    let outcome = check(config)
        .with_context(|| format!("failed to check {}", config.output.display()))?;

    match outcome {
        CheckOutcome::UpToDate => std::process::exit(EXIT_SUCCESS),
        CheckOutcome::Stale => {
            eprintln!("{} is out of date", config.output.display());
            std::process::exit(EXIT_OUT_OF_DATE);
        }
        CheckOutcome::Missing => {
            eprintln!("{} does not exist", config.output.display());
            std::process::exit(EXIT_OUT_OF_DATE);
        }
    }
}
