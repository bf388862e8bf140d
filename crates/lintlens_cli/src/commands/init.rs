//! Init command implementation

use std::fs;
use std::path::{Path, PathBuf};

use lintlens_core::{CONFIG_FILES, DEFAULT_CONFIG, ReportConfig};
use miette::{IntoDiagnostic, Result};
use tracing::{info, warn};

pub fn run_init(force: bool) -> Result<()> {
    // Never write a template that `report` would reject.
    ReportConfig::from_jsonc(DEFAULT_CONFIG)
        .map_err(|e| miette::miette!("Built-in config template is invalid: {}", e))?;

    let config_path = PathBuf::from(CONFIG_FILES[0]);

    if is_symlink(&config_path) {
        return Err(miette::miette!(
            "Refusing to write configuration file because it is a symbolic link: {}",
            config_path.display()
        ));
    }

    let existing: Vec<&str> = CONFIG_FILES
        .iter()
        .copied()
        .filter(|name| fs::symlink_metadata(name).is_ok())
        .collect();

    if !force && let Some(name) = existing.first() {
        return Err(miette::miette!(
            "Config file {} already exists. Use --force to overwrite.",
            name
        ));
    }

    fs::write(&config_path, DEFAULT_CONFIG).into_diagnostic()?;
    info!("Created {}", config_path.display());

    for name in existing.iter().filter(|name| **name != CONFIG_FILES[0]) {
        warn!("{} is ignored while {} exists", name, config_path.display());
    }

    Ok(())
}

fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_symlink() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("plain.jsonc");
        fs::write(&file, "{}").unwrap();

        assert!(!is_symlink(&file));
        assert!(!is_symlink(&dir.path().join("missing.jsonc")));

        #[cfg(unix)]
        {
            let link = dir.path().join("link.jsonc");
            std::os::unix::fs::symlink(&file, &link).unwrap();
            assert!(is_symlink(&link));
        }
    }
}
