use crate::model::Field;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("No student at index {0}")]
    NoSuchStudent(usize),

    #[error("No student is being edited")]
    NotEditing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RosterError {
    /// Field errors carried by a validation or uniqueness failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RosterError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for RosterError {
    fn from(errors: FieldErrors) -> Self {
        RosterError::Invalid(errors)
    }
}

/// Failures of the blob store. Kept apart from field errors so callers can
/// tell a rejected form from a roster that could not be saved.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not serialize roster: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("blob of {size} bytes exceeds the storage quota of {limit} bytes")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Per-field error messages, reported in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Records a message for `field`. The first message recorded for a field wins.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field.key(), msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
