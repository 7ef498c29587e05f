//! # Mealboard Architecture
//!
//! Mealboard is a **UI-agnostic weekly meal-planning library**. The terminal client
//! is one consumer of it; a browser or desktop front end could drive the same core.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the board, handles terminal I/O│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selectors like `tue.2` → meal ids)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns `CmdResult`            │
//! │  - User-facing messages, warnings for tolerated no-ops      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (board.rs, store/)                             │
//! │  - `Board`: seven ordered day buckets, pure                 │
//! │  - `MealStore`: board + `Storage`, persists every mutation  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Source of Truth
//!
//! The [`board::Board`] owned by the session's [`store::meal_store::MealStore`] is
//! the only copy of the meal data. Views (day columns, totals, statistics) are
//! computed from it on demand and never written back. Aggregates are therefore
//! always consistent with the meals they summarize.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust arguments and returns `Result<CmdResult>`
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`board`]: The in-memory meal collection and its invariants
//! - [`store`]: Persistence trait, file and memory backends, `MealStore`
//! - [`snapshot`]: JSON snapshot format, lenient with older boards
//! - [`model`]: Core types (`Meal`, `Weekday`, `MealType`, `Nutrition`)
//! - [`draft`]: Unvalidated user input and its coercion rules
//! - [`selector`]: Referencing meals by id or `day.position`
//! - [`phrase`]: Voice phrase parsing
//! - [`suggest`]: Canned meal suggestions
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod phrase;
pub mod selector;
pub mod snapshot;
pub mod store;
pub mod suggest;
