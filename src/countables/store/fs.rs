use super::{decode, encode, PersistenceGateway};
use crate::error::{CountablesError, Result};
use crate::model::Countable;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Stores the collection as a single JSON file.
pub struct FileGateway {
    data_file: PathBuf,
    pretty: bool,
}

impl FileGateway {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            pretty: true,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CountablesError::Io)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<Option<Vec<Countable>>> {
        let raw = match fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CountablesError::Io(e)),
        };
        decode(&raw).map(Some)
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self) -> Vec<Countable> {
        match self.read() {
            Ok(Some(collection)) => {
                debug!(path = %self.data_file.display(), entries = collection.len(), "loaded");
                collection
            }
            Ok(None) => {
                debug!(path = %self.data_file.display(), "no data file, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.data_file.display(), error = %e, "unreadable data file, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, collection: &[Countable]) -> Result<()> {
        let dir = self
            .data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.ensure_dir(dir)?;

        let content = encode(collection, self.pretty)?;

        // Atomic write
        let tmp_file = dir.join(format!(".countables-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CountablesError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CountablesError::Io(e));
        }

        debug!(path = %self.data_file.display(), entries = collection.len(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileGateway) {
        let dir = TempDir::new().unwrap();
        let gateway = FileGateway::new(dir.path().join("countables.json"));
        (dir, gateway)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, gateway) = setup();
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, gateway) = setup();
        let collection = vec![
            Countable::with_count("Zebra", 1),
            Countable::with_count("Ant", 12),
            Countable::new("Émeu"),
        ];
        gateway.save(&collection).unwrap();
        assert_eq!(gateway.load(), collection);
    }

    #[test]
    fn save_overwrites_in_full() {
        let (_dir, gateway) = setup();
        gateway
            .save(&[Countable::new("A"), Countable::new("B")])
            .unwrap();
        gateway.save(&[Countable::with_count("C", 3)]).unwrap();
        assert_eq!(gateway.load(), vec![Countable::with_count("C", 3)]);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let (_dir, gateway) = setup();
        fs::write(gateway.data_file(), "{ not json").unwrap();
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let (_dir, gateway) = setup();
        fs::write(gateway.data_file(), r#"{"name":"Crow","count":1}"#).unwrap();
        assert!(gateway.load().is_empty());
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        let gateway = FileGateway::new(&path);
        gateway.save(&[Countable::new("Crow")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn leaves_no_tmp_files() {
        let (dir, gateway) = setup();
        gateway.save(&[Countable::new("Crow")]).unwrap();
        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn compact_output_when_not_pretty() {
        let (_dir, gateway) = setup();
        let gateway = gateway.with_pretty(false);
        gateway.save(&[Countable::with_count("Crow", 1)]).unwrap();
        let on_disk = fs::read_to_string(gateway.data_file()).unwrap();
        assert_eq!(on_disk, r#"[{"name":"Crow","count":1}]"#);
    }
}
