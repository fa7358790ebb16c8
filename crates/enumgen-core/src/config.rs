use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::GenError;

pub const DEFAULT_INPUT: &str = "enumList.txt";
pub const DEFAULT_OUTPUT: &str = "outputEnums.txt";
pub const DEFAULT_PREFIX: &str = "VK_COMPARE_OP_";

/// Everything a single generator run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Comma-separated enumerator list to read.
    pub input: PathBuf,
    /// Where the initializer list is written.
    pub output: PathBuf,
    /// Common enumerator prefix stripped before camel-casing.
    pub prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Override fields with whatever the config file sets.
    pub fn merge_file(&mut self, file: ConfigFile) {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(prefix) = file.prefix {
            self.prefix = prefix;
        }
    }
}

/// On-disk JSON configuration, e.g.
/// `{ "input": "compareOps.txt", "output": "compareOps.inc", "prefix": "VK_COMPARE_OP_" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub prefix: Option<String>,
}

pub fn parse_config_file(source: &str) -> Result<ConfigFile, serde_json::Error> {
    serde_json::from_str(source)
}

/// Load a config file. Relative `input`/`output` paths are resolved against
/// the directory containing the file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, GenError> {
    let source = std::fs::read_to_string(path).map_err(|err| GenError::read(path, err))?;
    let mut config = parse_config_file(&source).map_err(|err| GenError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    config.input = config.input.map(|input| base_dir.join(input));
    config.output = config.output.map(|output| base_dir.join(output));

    Ok(config)
}
