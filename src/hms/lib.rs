//! # Hms Architecture
//!
//! Hms keeps a hospital's dispensary, medical records and staff roster in
//! plain CSV files. It is a library with a thin CLI client: everything from
//! `api.rs` inward takes Rust values and returns Rust values, and never
//! touches stdout, stderr or the process exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints results, resolves the data dir  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, parses text input into typed values         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Dispensary, records, staff and generic table operations  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/) over Table<E: Entry> (table.rs, entry.rs)   │
//! │  - One CSV file per table, encoded by codec.rs              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! The part every service shares is a small typed table engine:
//!
//! - [`codec`]: the CSV quoting dialect, written by hand
//! - [`entry`]: the [`Entry`](entry::Entry) trait each record kind implements
//! - [`table`]: [`Table`](table::Table), an ordered collection with unique ids,
//!   queries and whole-file load/save
//!
//! The record kinds themselves live in [`model`]; they only declare columns and
//! convert themselves to and from rows.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`codec`, `table`): unit tests of the dialect and table contracts.
//! 2. **Commands**: business logic against [`Store::in_memory`](store::Store::in_memory).
//! 3. **Files and CLI** (`tests/`): real files in temp dirs, and the binary.

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
