//! # Appointments Architecture
//!
//! `appointments` is the record backend behind a separate presentation layer.
//! The front end never touches the data file: it launches the backend once per
//! action and renders whatever text comes back on stdout.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (main.rs + args.rs)                             │
//! │  - Parses arguments, prints results, picks the exit code    │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, context.rs)                             │
//! │  - One lock/load/mutate/save transaction per call           │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, search.rs)                   │
//! │  - add, list, delete                                        │
//! │  - Outcomes like "not found" are messages, not errors       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, format.rs)                          │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Text Protocol
//!
//! Listings and the data file share one block format (see [`format`]). The
//! front end parses it positionally, so it is treated as a fixed external
//! contract rather than an implementation detail.
//!
//! ## Testing Strategy
//!
//! Commands and the API are tested against `InMemoryStore`; `FileStore` is
//! tested on temp directories; the binary is exercised end to end in
//! `tests/cli.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`context`]: Home directory, config and store wiring for the binary
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types
//! - [`format`]: Block serializer and parser
//! - [`model`]: `Appointment` and its deletion key
//! - [`search`]: Fragment matching for `list`
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod model;
pub mod search;
pub mod store;
