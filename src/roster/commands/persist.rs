use crate::error::{PersistenceError, Result};
use crate::model::Student;
use crate::store::BlobStore;

/// Serializes `students` and writes them under `key`.
pub fn run<S: BlobStore>(store: &mut S, key: &str, students: &[Student]) -> Result<()> {
    let blob = serde_json::to_string(students).map_err(PersistenceError::Serialization)?;
    store.set(key, &blob)?;
    tracing::debug!(key, count = students.len(), "roster persisted");
    Ok(())
}
