use super::{check_key, check_quota, BlobStore};
use crate::error::PersistenceError;
use std::collections::HashMap;

/// In-memory blob storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
    quota: Option<usize>,
    simulate_write_error: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed a raw blob, bypassing key and quota checks.
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        check_key(key)?;
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        check_key(key)?;
        if self.simulate_write_error {
            return Err(PersistenceError::Backend("Simulated write error".to_string()));
        }
        check_quota(value, self.quota)?;
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Student, StudentForm};
    use crate::store::DEFAULT_KEY;

    pub fn student(n: usize) -> Student {
        Student {
            name: format!("Student {}", letters(n)),
            student_id: format!("{}", 1000 + n),
            email: format!("student{}@school.edu", n),
            contact: format!("98765{:05}", n),
        }
    }

    pub fn form(n: usize) -> StudentForm {
        StudentForm::from(&student(n))
    }

    /// A store pre-seeded with `count` valid students under the default key.
    pub fn store_with_students(count: usize) -> MemoryStore {
        let students: Vec<Student> = (1..=count).map(student).collect();
        let blob = serde_json::to_string(&students).unwrap();
        MemoryStore::new().with_blob(DEFAULT_KEY, &blob)
    }

    // Names must be letters only, so spell the number out as letters.
    fn letters(mut n: usize) -> String {
        let mut out = String::new();
        loop {
            out.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
            if n == 0 {
                break;
            }
        }
        out
    }
}
