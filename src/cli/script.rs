//! `stickynav script`: render the browser scroll-spy.

use crate::{
    config::SiteConfig,
    embed::{SCROLLSPY_JS, ScrollSpyVars, script_path},
    log,
};
use anyhow::Result;
use std::path::Path;

pub fn run_script(config: &SiteConfig, output: Option<&Path>, write: bool) -> Result<()> {
    let js = SCROLLSPY_JS.render(&ScrollSpyVars::from_config(config));

    let target = match (output, write) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(script_path(config)),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            super::write_output(&path, &js)?;
            log!("script"; "wrote {}", path.display());
        }
        None => println!("{js}"),
    }
    Ok(())
}
