//! # Countables Architecture
//!
//! Countables keeps a small collection of named counters ("Crow: 3",
//! "Raven: 1") and persists it across runs. It is a **UI-agnostic library**
//! that happens to ship a CLI client; the same core could back a mobile app,
//! a TUI or a web page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Load → initialize → persist after every mutation         │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, turns outcomes into messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Store (collection.rs)       │  │  Storage Layer (store/)   │
//! │  canonical order, validation │  │  PersistenceGateway trait │
//! │  View (view.rs): sort order  │  │  file, memory, queued     │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Two orders
//!
//! The *canonical order* is insertion order. It is what gets saved and what
//! indexed operations address. The *display order* (count descending, then
//! name) is computed on demand by [`view`] and never written back.
//!
//! ## No I/O assumptions in the core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides where
//! they end up ([`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI talks to
//! - [`collection`]: the canonical collection and its invariants
//! - [`view`]: display ordering
//! - [`store`]: persistence gateways
//! - [`commands`]: per-operation logic and result types
//! - [`model`]: the `Countable` type
//! - [`config`]: `config.json` settings
//! - [`init`]: data directory resolution and context setup
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;
