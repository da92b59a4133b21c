//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod manifest;
pub mod menu;
pub mod script;
pub mod simulate;

pub use args::{Cli, Commands, SimulateArgs};

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write command output to `path`, creating parent directories.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
