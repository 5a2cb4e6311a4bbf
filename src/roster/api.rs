//! # API Facade
//!
//! [`RosterApi`] is the roster manager: it owns the ordered student list, the
//! edit cursor and the blob store, and is the single entry point for every UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns state** that would otherwise be ambient (roster, cursor, store)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business rules live in `commands/*.rs`; this layer never prints.
//!
//! ## Generic Over BlobStore
//!
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<MemoryStore>`
//!
//! ## Edit Cursor
//!
//! ```text
//!            begin_edit(i)
//!   None ───────────────────▶ Editing(i)
//!    ▲                            │
//!    └──── update ok / cancel ────┘
//!          delete(i)
//! ```

use crate::commands;
use crate::error::Result;
use crate::model::{EditCursor, Roster, Student, StudentForm};
use crate::store::BlobStore;
use crate::validation;

pub struct RosterApi<S: BlobStore> {
    store: S,
    key: String,
    roster: Roster,
}

impl<S: BlobStore> RosterApi<S> {
    /// Opens the roster stored under `key`. Unreadable data yields an empty roster.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let students = commands::load::run(&store, &key);
        Self {
            store,
            key,
            roster: Roster::new(students),
        }
    }

    /// Re-reads the stored roster, independent of the in-memory state.
    pub fn load(&self) -> Vec<Student> {
        commands::load::run(&self.store, &self.key)
    }

    pub fn validate(&self, form: &StudentForm) -> Result<Student> {
        Ok(validation::validate(form)?)
    }

    pub fn check(&self, form: &StudentForm) -> Result<commands::CmdResult> {
        commands::check::run(form)
    }

    pub fn add(&mut self, form: &StudentForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.key, &mut self.roster, form)
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<StudentForm> {
        commands::edit::begin(&mut self.roster, index)
    }

    pub fn update(&mut self, form: &StudentForm) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &self.key, &mut self.roster, form)
    }

    pub fn cancel_edit(&mut self) {
        commands::edit::cancel(&mut self.roster)
    }

    pub fn delete(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.key, &mut self.roster, index)
    }

    pub fn persist(&mut self) -> Result<()> {
        commands::persist::run(&mut self.store, &self.key, &self.roster.students)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.roster)
    }

    pub fn students(&self) -> &[Student] {
        &self.roster.students
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.roster.students.get(index)
    }

    pub fn len(&self) -> usize {
        self.roster.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.students.is_empty()
    }

    pub fn cursor(&self) -> EditCursor {
        self.roster.cursor
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayStudent, MessageLevel};
