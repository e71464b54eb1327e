use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a starter config into the current directory.
///
/// An existing config is never overwritten; the result then carries one
/// error so the command exits with a failure status.
pub fn init() -> Result<CommandResult> {
    let created = write_default_config(Path::new(CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created }),
        error_count: usize::from(!created),
        exit_on_errors: true,
    })
}

fn write_default_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    Ok(true)
}
