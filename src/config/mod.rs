//! Configuration for Keyward
//!
//! Path management for the vault, salt, backup and session log files.

pub mod paths;

pub use paths::KeywardPaths;
