//! # Addrbook Architecture
//!
//! Addrbook is a contact-book **library** with a small CLI client on top. The library owns
//! every rule about what a valid contact is; the binary only parses arguments and prints.
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
//! │  - Loads the book from a store, dispatches to commands      │
//! │  - Persists after every successful mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on a ContactBook, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields.rs, model.rs, book.rs) + Storage (store/)     │
//! │  - Validated fields, Contact, ContactBook                   │
//! │  - BookStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation
//!
//! Every value a contact holds goes through a [`fields::Field`] constructor. There is no
//! other way to build one, so an invalid phone or birthday cannot exist in memory, and
//! the same constructors run again when a snapshot is read back from disk.
//!
//! ## Module Overview
//!
//! - [`fields`]: `Name`, `Phone`, `Birthday` validated values
//! - [`model`]: `Contact`
//! - [`book`]: `ContactBook`, pagination, search, save/load
//! - [`store`]: snapshot encoding and storage backends
//! - [`commands`]: business operations returning `CmdResult`
//! - [`api`]: the facade used by UI clients
//! - [`config`]: `config.json` handling
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
