use crate::error::CliError;
use digipad_core::PadConfig;
use std::fs;
use std::path::Path;

/// Values given on the command line; each one replaces the config file value.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Overrides {
    pub(crate) length: Option<usize>,
    pub(crate) group_size: Option<usize>,
    pub(crate) groups_per_line: Option<usize>,
}

/// Builds the generation config once: defaults, then the optional JSON file,
/// then command-line flags.
pub(crate) fn resolve(
    config_file: Option<&Path>,
    overrides: Overrides,
) -> Result<PadConfig, CliError> {
    let mut config = match config_file {
        Some(path) => load_config(path)?,
        None => PadConfig::default(),
    };
    if let Some(length) = overrides.length {
        config.length = length;
    }
    if let Some(group_size) = overrides.group_size {
        config.group_size = group_size;
    }
    if let Some(groups_per_line) = overrides.groups_per_line {
        config.groups_per_line = groups_per_line;
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<PadConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(CliError::io(path))?;
    serde_json::from_str(&raw).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}
