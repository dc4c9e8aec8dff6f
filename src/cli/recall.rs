//! CLI `remember` and `recall` commands.

use anyhow::Result;
use std::path::Path;

use lumen::config::LumenConfig;
use lumen::store::JournalStore;

use super::{open_store, read_input};

/// Extract entities from `input` and persist them for `user_id`.
pub fn remember(config: &LumenConfig, user_id: &str, input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let mut store = open_store(config)?;
    let (entities, summary) =
        lumen::memory::remember(&mut store, user_id, &text, chrono::Utc::now())?;

    if entities.is_empty() {
        println!("Nothing to remember.");
        return Ok(());
    }

    println!(
        "Remembered {} item(s): {} new, {} repeat mention(s)",
        entities.len(),
        summary.inserted,
        summary.updated
    );
    for entity in &entities {
        println!(
            "  [{}] {} ({})",
            entity.entity_type, entity.name, entity.sentiment
        );
    }
    Ok(())
}

/// List the most recently mentioned memory items for `user_id`.
pub fn recall(config: &LumenConfig, user_id: &str, limit: Option<usize>) -> Result<()> {
    let store = open_store(config)?;
    let limit = limit.unwrap_or(config.memory.recall_limit);
    let items = store.recent_memory_items(user_id, limit)?;

    if items.is_empty() {
        println!("No memories yet.");
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        println!(
            "  {}. [{}] {} (mentions: {}, sentiment: {}, last: {})",
            i + 1,
            item.item_type,
            item.name,
            item.mention_count,
            item.sentiment,
            item.last_mentioned,
        );
        println!("     {}", item.context);
        println!();
    }
    Ok(())
}
