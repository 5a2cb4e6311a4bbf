use super::{check_key, check_quota, BlobStore};
use crate::error::PersistenceError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;

const BLOB_EXT: &str = ".json";

pub struct FileStore {
    root: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root, quota: None }
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, BLOB_EXT))
    }

    fn ensure_dir(&self) -> Result<(), PersistenceError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        check_key(key)?;
        match fs::read_to_string(self.blob_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        check_key(key)?;
        check_quota(value, self.quota)?;
        self.ensure_dir()?;

        let target_path = self.blob_path(key);

        // Atomic Write
        let tmp_path = self
            .root
            .join(format!(".{}.{}.tmp", key, process::id()));
        if let Err(e) = fs::write(&tmp_path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::Io(e));
        }

        tracing::debug!(path = %target_path.display(), bytes = value.len(), "blob written");
        Ok(())
    }
}
