//! Keyward - terminal-oriented encrypted secret store
//!
//! This library provides the core functionality for the Keyward secret
//! store. Credential entries are organized under editable column schemes,
//! persisted as a single authenticated envelope, and exposed to an
//! interactive surface through an immutable view snapshot with a stable
//! cursor/entry mapping.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `crypto`: Key derivation and authenticated encryption
//! - `models`: Core data models (schemes, entries, settings, vault)
//! - `storage`: Envelope persistence, backup/restore, password verification
//! - `services`: Validated mutations, search, password tools
//! - `display`: View snapshot and pointer indexing
//! - `audit`: Append-only session log
//! - `session`: The facade consumed by the interactive surface
//!
//! # Example
//!
//! ```rust,ignore
//! use keyward::config::KeywardPaths;
//! use keyward::session::Session;
//!
//! let paths = KeywardPaths::new()?;
//! let mut session = Session::open(paths, &password)?;
//! let snapshot = session.render_snapshot();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{KeywardError, KeywardResult};
pub use session::Session;
