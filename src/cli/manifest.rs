//! `stickynav manifest`: emit the plugin manifest as JSON.

use crate::{config::SiteConfig, debug, log, plugin::Manifest};
use anyhow::Result;
use std::path::Path;

pub fn run_manifest(config: &SiteConfig, pretty: bool, output: Option<&Path>) -> Result<()> {
    let manifest = Manifest::from_config(config);
    let names: Vec<_> = manifest.plugins.iter().map(|p| p.kind().name()).collect();
    debug!("manifest"; "registered {} plugin(s): {}", manifest.plugins.len(), names.join(", "));

    let json = manifest.to_json(pretty)?;
    match output {
        Some(path) => {
            super::write_output(path, &json)?;
            log!("manifest"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/manifest.json");
        let config = test_parse_config("");

        run_manifest(&config, true, Some(&path)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["helpers"][0], "menu_item");
    }
}
