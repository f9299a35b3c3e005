//! # Morent Architecture
//!
//! Morent is a **UI-agnostic car-rental catalog library**. The CLI binary
//! is just one client: the same core could sit behind a web front end or
//! any other presentation layer, which is why nothing from `api.rs` inward
//! knows about terminals.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders listings, handles terminal I/O │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning source, engine and wishlist           │
//! │  - Maps facet-change and toggle intents onto commands       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source & Storage (source.rs, store/)                       │
//! │  - CatalogSource trait: FileSource (production),            │
//! │    StaticSource (testing)                                   │
//! │  - StorageBackend trait: FileBackend (production),          │
//! │    InMemoryBackend (testing)                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Catalog source → boundary decode (malformed records excluded
//! fail-safe) → filter engine (raw set + facet selection → filtered view)
//! → presentation. The wishlist sits beside the engine, independent of
//! filtering, persisting full record snapshots locally so favorites
//! survive a reload without a source roundtrip.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, engine, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Error Policy
//!
//! The system degrades instead of crashing: a fetch failure surfaces as a
//! persistent empty state, a rejected facet value leaves the prior
//! selection in place, a malformed record is silently excluded, and a
//! storage failure reads as empty and writes as a no-op.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`filter`]: Facet selection and the filtering engine
//! - [`wishlist`]: Favorited-record set with fail-soft persistence
//! - [`source`]: Catalog source abstraction and boundary decode
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Car`, `CarType`, `Tag`, ...)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod source;
pub mod store;
pub mod wishlist;
