//! Logging for the `enumgen` binary.
//!
//! Nothing is installed unless `ENUMGEN_LOG` or `RUST_LOG` holds a filter.
//! `ENUMGEN_LOG_FORMAT` selects how events are laid out on stderr:
//!
//! - `text` (default): one line per event
//! - `tree`: events nested under the `prepare`/`generate`/`check` spans
//! - `json`: one JSON object per event
//!
//! ```bash
//! ENUMGEN_LOG=debug enumgen -i formats.txt -p VK_FORMAT_
//! ENUMGEN_LOG=enumgen_core=trace ENUMGEN_LOG_FORMAT=tree enumgen --check
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "ENUMGEN_LOG";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "ENUMGEN_LOG_FORMAT";

/// Layout of log events on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// What to install, resolved from the environment before touching the
/// global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when logging is off. `enumgen_log` takes precedence over
    /// `rust_log`.
    pub fn resolve(
        enumgen_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = enumgen_log.or(rust_log)?;
        let format = format.as_deref().map_or(LogFormat::Text, LogFormat::parse);
        Some(Self { directives, format })
    }

    pub fn from_env() -> Option<Self> {
        Self::resolve(
            std::env::var(LOG_VAR).ok(),
            std::env::var(FALLBACK_LOG_VAR).ok(),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber when logging was requested. The table
/// echo owns stdout, so every layer writes to stderr.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = settings.filter();

    match settings.format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
