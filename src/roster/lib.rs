//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student roster library** with a small CLI on top.
//! The library knows nothing about terminals; the same core could sit behind a
//! web form or a desktop window.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders the table             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RosterApi: owns the roster, edit cursor and store        │
//! │  - Thin dispatch into commands                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, validation.rs)               │
//! │  - Validation, uniqueness, cursor rules                     │
//! │  - Store first, then commit to memory                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlobStore trait: get/set of one string per key           │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Rejected input comes back as [`error::RosterError::Invalid`] with one
//! message per failing field. Storage failures come back as
//! [`error::RosterError::Persistence`] and never leave memory and storage out
//! of step. A corrupt stored roster is not an error: it loads as empty.
//!
//! ## Module Overview
//!
//! - [`api`]: The roster manager facade
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Field rules
//! - [`store`]: Blob storage abstraction and implementations
//! - [`model`]: `Student`, `StudentForm`, `Field`, `EditCursor`
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
