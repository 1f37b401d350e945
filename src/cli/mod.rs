//! CLI command handlers for Keyward
//!
//! Thin wrappers around the session facade: password prompts, confirmation
//! questions, and printing. All vault logic lives in the library.

mod vault;

pub use vault::{
    handle_backup, handle_config, handle_history, handle_init, handle_restore, handle_search,
    handle_show, handle_verify,
};
