//! Vault lifecycle commands
//!
//! Implements the login-layer interface: vault creation, unlock checks,
//! backup/restore, plus read-only views of the store.

use std::io::Write;

use crate::config::KeywardPaths;
use crate::crypto::SecureString;
use crate::error::{KeywardError, KeywardResult};
use crate::session::Session;

/// Create a new vault, prompting for the master password twice
pub fn handle_init(paths: KeywardPaths) -> KeywardResult<()> {
    if paths.vault_exists() {
        return Err(KeywardError::Storage(format!(
            "A vault already exists at {}",
            paths.vault_file().display()
        )));
    }

    let password = prompt_password("Choose a master password: ")?;
    let repeated = prompt_password("Repeat the master password: ")?;

    if password.as_str() != repeated.as_str() {
        return Err(KeywardError::Validation(
            "The passwords are not identical".into(),
        ));
    }
    if password.is_empty() {
        return Err(KeywardError::Validation(
            "The master password cannot be empty".into(),
        ));
    }

    let vault_path = paths.vault_file();
    let session = Session::create(paths, password.as_str())?;
    println!(
        "Vault created at {} with {} starter schemes.",
        vault_path.display(),
        session.vault().schemes.len()
    );
    Ok(())
}

/// Render the current vault state to stdout
pub fn handle_show(paths: KeywardPaths) -> KeywardResult<()> {
    let session = unlock(paths)?;
    let snapshot = session.render_snapshot();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in snapshot.lines() {
        writeln!(out, "{}", line).map_err(|e| KeywardError::Io(e.to_string()))?;
    }
    Ok(())
}

/// Fuzzy-search entry values and print the top matches
pub fn handle_search(paths: KeywardPaths, query: &str, top_n: usize) -> KeywardResult<()> {
    let session = unlock(paths)?;

    let matches = session.search(query, top_n);
    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for m in matches {
        println!("{:>5.2}  {}  ({})", m.score, m.value, m.entry_id);
    }
    Ok(())
}

/// Write a backup snapshot of the current store
pub fn handle_backup(paths: KeywardPaths) -> KeywardResult<()> {
    let backup_path = paths.backup_file();
    let session = unlock(paths)?;
    session.backup()?;
    println!("Backup written to {}", backup_path.display());
    Ok(())
}

/// Destructively restore the main store from the backup snapshot
pub fn handle_restore(paths: KeywardPaths) -> KeywardResult<()> {
    let mut session = unlock(paths)?;

    // Restoring overwrites the main store; gate it on a second password check
    let confirm = prompt_password("Restore overwrites the current vault. Master password: ")?;
    if !session.verify_password(confirm.as_str()) {
        return Err(KeywardError::WrongPassword);
    }

    session.restore()?;
    println!("Vault restored from backup.");
    Ok(())
}

/// Check a candidate master password without opening a session
pub fn handle_verify(paths: KeywardPaths) -> KeywardResult<()> {
    let session = unlock(paths)?;
    let candidate = prompt_password("Password to verify: ")?;

    if session.verify_password(candidate.as_str()) {
        println!("Password accepted.");
    } else {
        println!("Password rejected.");
    }
    Ok(())
}

/// Print the session log
pub fn handle_history(paths: KeywardPaths) -> KeywardResult<()> {
    let session = unlock(paths)?;

    for entry in session.history()? {
        match &entry.entity_id {
            Some(id) => println!(
                "{}  {}  {}  {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.operation,
                entry.entity,
                id
            ),
            None => println!(
                "{}  {}  {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.operation,
                entry.entity
            ),
        }
    }
    Ok(())
}

/// Print the resolved paths
pub fn handle_config(paths: KeywardPaths) -> KeywardResult<()> {
    println!("Base directory: {}", paths.base_dir().display());
    println!("Vault file:     {}", paths.vault_file().display());
    println!("Salt file:      {}", paths.salt_file().display());
    println!("Backup file:    {}", paths.backup_file().display());
    println!("Session log:    {}", paths.session_log().display());
    println!(
        "Vault present:  {}",
        if paths.vault_exists() { "yes" } else { "no" }
    );
    Ok(())
}

/// Prompt for the master password and open the vault
fn unlock(paths: KeywardPaths) -> KeywardResult<Session> {
    let password = prompt_password("Master password: ")?;
    Session::open(paths, password.as_str())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> KeywardResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| KeywardError::Io(format!("Failed to read password: {}", e)))
}
