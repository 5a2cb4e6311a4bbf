use crate::model::Student;
use crate::store::BlobStore;
use serde_json::Value;

/// Reads the roster stored under `key`.
///
/// Never fails: a missing blob, unreadable storage, invalid JSON or a
/// non-array value all yield an empty roster. Array entries that are not
/// student objects are skipped.
pub fn run<S: BlobStore>(store: &S, key: &str) -> Vec<Student> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read roster, starting empty");
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!(key, "stored roster is not an array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored roster is not valid JSON, starting empty");
            return Vec::new();
        }
    };

    let total = entries.len();
    let students: Vec<Student> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if students.len() < total {
        tracing::warn!(
            key,
            skipped = total - students.len(),
            "skipped malformed roster entries"
        );
    }
    tracing::debug!(key, count = students.len(), "roster loaded");
    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, MemoryStore};
    use crate::store::DEFAULT_KEY;

    #[test]
    fn missing_blob_is_empty() {
        assert!(run(&MemoryStore::new(), DEFAULT_KEY).is_empty());
    }

    #[test]
    fn invalid_json_is_empty() {
        let store = MemoryStore::new().with_blob(DEFAULT_KEY, "not-json");
        assert!(run(&store, DEFAULT_KEY).is_empty());
    }

    #[test]
    fn non_array_is_empty() {
        let store = MemoryStore::new().with_blob(DEFAULT_KEY, "{}");
        assert!(run(&store, DEFAULT_KEY).is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let store = fixtures::store_with_students(3);
        let ids: Vec<String> = run(&store, DEFAULT_KEY)
            .into_iter()
            .map(|s| s.student_id)
            .collect();
        assert_eq!(ids, vec!["1001", "1002", "1003"]);
    }

    #[test]
    fn skips_malformed_entries() {
        let blob = r#"[
            {"name":"Ann","studentId":"1","email":"a@b.co","contact":"1234567890"},
            42,
            {"name":"Bob"},
            {"name":"Cy","studentId":"3","email":"c@d.co","contact":"0987654321"}
        ]"#;
        let store = MemoryStore::new().with_blob(DEFAULT_KEY, blob);
        let students = run(&store, DEFAULT_KEY);
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Ann");
        assert_eq!(students[1].name, "Cy");
    }

    #[test]
    fn invalid_key_is_empty() {
        assert!(run(&MemoryStore::new(), "../x").is_empty());
    }
}
