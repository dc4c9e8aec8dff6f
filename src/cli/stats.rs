use anyhow::Result;

use lumen::config::LumenConfig;
use lumen::entities::EntityType;
use lumen::store::JournalStore;

use super::open_store;

/// Display memory statistics for one user in the terminal.
pub fn stats(config: &LumenConfig, user_id: &str) -> Result<()> {
    let store = open_store(config)?;
    let response = store.memory_stats(user_id)?;

    println!("Memory Statistics ({user_id})");
    println!("{}", "=".repeat(40));
    println!("  Total items:         {}", response.total_items);
    println!("  Total mentions:      {}", response.total_mentions);
    println!();

    println!("By Type:");
    for t in EntityType::ALL {
        let count = response.by_type.get(t.as_str()).copied().unwrap_or(0);
        println!("  {:<12} {}", t, count);
    }
    println!();

    if let Some(ref oldest) = response.oldest_item {
        println!("Oldest item:           {oldest}");
    }
    if let Some(ref last) = response.last_mentioned {
        println!("Last mentioned:        {last}");
    }

    Ok(())
}
