//! # Anilist Architecture
//!
//! Anilist is a **UI-agnostic anime list library** with a command-line client
//! on top. Everything below the CLI takes Rust values and returns Rust values.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the shell, renders results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the model and the store                             │
//! │  - Normalizes raw text into indexes, values, descriptors    │
//! │  - Saves after every mutating command                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates, resolves indexes, commits replacements        │
//! │  - Operates on `&mut Model`, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs) + Storage Layer (store/)                  │
//! │  - Backing list and filtered displayed list                 │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutable Records
//!
//! An [`anime::Anime`] never changes after construction. Edits are described
//! by an [`descriptor::AnimeDescriptor`], applied to produce a new record, and
//! committed with [`model::Model::set_anime`]. Getters hand out shared
//! borrows, so nothing outside the model can alter a stored record.
//!
//! ## Displayed Indexes
//!
//! Users address anime by their number in the displayed (filtered) list.
//! See [`index`] for details.
//!
//! ## Testing Strategy
//!
//! 1. **Values and model** (`anime/`, `descriptor.rs`, `model.rs`): unit and
//!    property tests of validation and list behavior.
//! 2. **Commands** (`commands/*.rs`): the bulk of the behavior tests.
//! 3. **API** (`api.rs`): input parsing and save-after-mutation.
//! 4. **CLI** (`tests/`): end-to-end runs of the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Backing list, filter and index resolution
//! - [`anime`]: The record and its value types
//! - [`descriptor`]: Sparse edit descriptions
//! - [`filter`]: Predicates for the displayed list
//! - [`index`]: Display indexes
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod anime;
pub mod api;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
