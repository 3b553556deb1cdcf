use std::{env, fs, path::Path, path::PathBuf};

use dirs::home_dir;
use tracing_subscriber::EnvFilter;

use crate::errors::{InventoryError, Result};

const DEFAULT_DIR_NAME: &str = ".ukay_core";
const INVENTORY_DIR: &str = "inventories";
const BACKUP_DIR: &str = "backups";
const CONFIG_DIR: &str = "config";
const CONFIG_BACKUP_DIR: &str = "config_backups";
const STATE_FILE: &str = "state.json";
const CONFIG_FILE: &str = "config.json";

/// Installs the global tracing subscriber (fmt output, `RUST_LOG` filtering).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Creates a directory (and parents) when missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|err| {
            InventoryError::StorageError(format!(
                "cannot create directory `{}`: {}",
                path.display(),
                err
            ))
        })?;
    }
    Ok(())
}

/// Resolves the on-disk layout of the application data directory.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.ukay_core`.
    /// `UKAY_CORE_HOME` overrides the default, which also keeps tests hermetic.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os("UKAY_CORE_HOME") {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn inventory_dir_in(base: &Path) -> PathBuf {
        base.join(INVENTORY_DIR)
    }

    pub fn backup_dir_in(base: &Path) -> PathBuf {
        base.join(BACKUP_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_backup_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_BACKUP_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }

    pub fn state_file_in(base: &Path) -> PathBuf {
        base.join(STATE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_honors_env_override() {
        let previous = env::var_os("UKAY_CORE_HOME");
        env::set_var("UKAY_CORE_HOME", "/tmp/ukay-test-home");
        assert_eq!(PathResolver::base_dir(), PathBuf::from("/tmp/ukay-test-home"));
        match previous {
            Some(value) => env::set_var("UKAY_CORE_HOME", value),
            None => env::remove_var("UKAY_CORE_HOME"),
        }
    }

    #[test]
    fn layout_nests_under_base() {
        let base = PathBuf::from("/data/app");
        assert_eq!(
            PathResolver::inventory_dir_in(&base),
            PathBuf::from("/data/app/inventories")
        );
        assert_eq!(
            PathResolver::state_file_in(&base),
            PathBuf::from("/data/app/state.json")
        );
    }
}
