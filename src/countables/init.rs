//! # Locating the Data
//!
//! All state lives in one data directory:
//!
//! ```text
//! <data dir>/
//! ├── countables.json   # the collection (name configurable via `data-file`)
//! └── config.json
//! ```
//!
//! The directory is resolved in priority order:
//! 1. An explicit override (the CLI's `--data-dir`).
//! 2. The `COUNTABLES_DATA` environment variable.
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! [`initialize`] then reads `config.json`, builds the gateway stack and loads
//! the store, so the returned API is ready to mutate and persist.

use crate::api::{CountablesApi, CountablesPaths};
use crate::config::CountablesConfig;
use crate::error::{CountablesError, Result};
use crate::store::fs::FileGateway;
use crate::store::queue::QueuedGateway;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_DIR_ENV: &str = "COUNTABLES_DATA";

pub struct CountablesContext {
    pub api: CountablesApi<QueuedGateway<FileGateway>>,
    pub config: CountablesConfig,
}

pub fn resolve_data_dir(data_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "countables", "countables")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CountablesError::Paths(format!(
                "Could not determine a data directory; set {}",
                DATA_DIR_ENV
            ))
        })
}

pub fn initialize(data_override: Option<&Path>) -> Result<CountablesContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = CountablesConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        CountablesConfig::default()
    });
    let paths = CountablesPaths::new(data_dir, &config);
    debug!(data_file = %paths.data_file.display(), "resolved paths");

    let gateway = QueuedGateway::new(FileGateway::new(&paths.data_file).with_pretty(config.pretty))?;
    let api = CountablesApi::open(gateway, paths)?;

    Ok(CountablesContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Countable;
    use crate::store::PersistenceGateway;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_data_dir(Some(dir.path())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn initialize_loads_existing_data() {
        let dir = TempDir::new().unwrap();
        FileGateway::new(dir.path().join("countables.json"))
            .save(&[Countable::with_count("Crow", 2)])
            .unwrap();

        let ctx = initialize(Some(dir.path())).unwrap();
        assert!(ctx.api.store().is_ready());
        assert_eq!(ctx.api.store().entries(), &[Countable::with_count("Crow", 2)]);
    }

    #[test]
    fn initialize_respects_data_file_setting() {
        let dir = TempDir::new().unwrap();
        let mut config = CountablesConfig::default();
        config.set("data-file", "birds.json").unwrap();
        config.save(dir.path()).unwrap();

        let mut ctx = initialize(Some(dir.path())).unwrap();
        ctx.api.add("Crow").unwrap();
        ctx.api.gateway().flush();

        assert!(dir.path().join("birds.json").exists());
        assert!(!dir.path().join("countables.json").exists());
    }
}
