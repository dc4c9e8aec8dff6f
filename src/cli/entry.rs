//! CLI `entry` subcommands.

use anyhow::{bail, Result};
use std::path::Path;

use lumen::config::LumenConfig;
use lumen::journal::NewEntry;
use lumen::store::{EntryQuery, EntrySource};
use lumen::text::format_word_count;

use super::{open_store, print_json, read_input};

/// Save edited content into an existing entry.
pub fn save(config: &LumenConfig, id: &str, title: &str, input: Option<&Path>) -> Result<()> {
    let content = read_input(input)?;
    let mut store = open_store(config)?;

    let result = lumen::journal::save_entry(&mut store, id, title, &content);
    print_json(&result)?;
    if let Some(error) = result.error {
        bail!("entry {id} was not saved: {error}");
    }
    Ok(())
}

/// Create a new entry for a user.
pub fn add(
    config: &LumenConfig,
    user_id: &str,
    title: Option<&str>,
    source: EntrySource,
    input: Option<&Path>,
) -> Result<()> {
    let new = NewEntry {
        title: title.map(str::to_string),
        content: read_input(input)?,
        source,
    };
    let mut store = open_store(config)?;

    let entry = lumen::journal::create_entry(&mut store, user_id, &new, chrono::Utc::now())?;
    println!(
        "Created entry {} \"{}\" ({})",
        entry.id,
        entry.title,
        format_word_count(entry.word_count)
    );
    Ok(())
}

/// List a user's entries, newest first.
pub fn list(config: &LumenConfig, user_id: &str, query: &EntryQuery, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let entries = lumen::journal::list_entries(&store, user_id, query)?;

    if json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {}  [{}] {} ({})",
            entry.created_at,
            entry.id,
            entry.source,
            entry.title,
            format_word_count(entry.word_count)
        );
    }
    Ok(())
}
