pub mod entry;
pub mod extract;
pub mod principle;
pub mod quiz;
pub mod recall;
pub mod stats;
pub mod user;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use lumen::config::LumenConfig;
use lumen::store::SqliteStore;

/// Read all of `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Open the configured journal database.
pub fn open_store(config: &LumenConfig) -> Result<SqliteStore> {
    SqliteStore::open(config.resolved_db_path())
}
