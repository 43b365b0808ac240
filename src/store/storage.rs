//! Named key-value records that outlive the process
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Persisted state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

pub trait Storage: Send + Sync {
    fn get_item(&self, name: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, name: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, name: &str) -> Result<(), StoreError>;
}

/// One JSON file per record inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl Storage for FileStorage {
    fn get_item(&self, name: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(&path)(e)),
        }
    }

    // Written to a temp file first and renamed so a crash mid-write
    // never leaves a truncated record behind
    fn set_item(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let mut temp_file = NamedTempFile::new_in(&self.dir).map_err(io_err(&self.dir))?;
        temp_file
            .write_all(value.as_bytes())
            .map_err(io_err(&path))?;
        temp_file
            .as_file_mut()
            .sync_all()
            .map_err(io_err(&path))?;
        temp_file
            .persist(&path)
            .map_err(|e| io_err(&path)(e.error))?;
        Ok(())
    }

    fn remove_item(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(&path)(e)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage(RwLock<HashMap<String, String>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .0
            .read()
            .expect("Unable to read storage")
            .get(name)
            .cloned())
    }

    fn set_item(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.0
            .write()
            .expect("Unable to write storage")
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, name: &str) -> Result<(), StoreError> {
        self.0.write().expect("Unable to write storage").remove(name);
        Ok(())
    }
}
