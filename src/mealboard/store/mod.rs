//! # Storage Layer
//!
//! The board is persisted as one opaque blob: the JSON [`Snapshot`](crate::snapshot::Snapshot)
//! of every day bucket. The [`Storage`] trait is the whole contract with the
//! persistence collaborator: read the last blob, overwrite it with a new one.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production storage, a single `meals.json` file
//!   written atomically (temporary file, then rename).
//! - [`memory::MemStorage`]: In-memory storage for tests, with write-failure
//!   simulation.
//!
//! ## Meal Store
//!
//! [`meal_store::MealStore`] pairs a [`Board`](crate::board::Board) with a
//! `Storage` and writes a fresh snapshot after every mutation. Writes are
//! best effort: a failed write is logged and remembered, but it never rolls
//! back the in-memory change.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── meals.json      # Board snapshot
//! └── config.json     # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod meal_store;
pub mod memory;

/// Raw persistence for the board snapshot.
pub trait Storage {
    /// Returns the last written snapshot, or `None` if nothing was ever written.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Overwrites the stored snapshot.
    fn write(&self, bytes: &[u8]) -> Result<()>;
}
