//! CLI `principle` subcommands.

use anyhow::Result;

use lumen::config::LumenConfig;
use lumen::principles::PrincipleDraft;

use super::{open_store, print_json};

pub fn add(config: &LumenConfig, user_id: &str, draft: &PrincipleDraft) -> Result<()> {
    let mut store = open_store(config)?;
    let principle = lumen::principles::add_principle(&mut store, user_id, draft, chrono::Utc::now())?;
    println!(
        "Added principle {} \"{}\" ({})",
        principle.id,
        principle.title,
        principle.category.label()
    );
    Ok(())
}

/// Print a user's principles, highest priority first.
pub fn list(config: &LumenConfig, user_id: &str, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let principles = lumen::principles::list_principles(&store, user_id)?;

    if json {
        return print_json(&principles);
    }
    if principles.is_empty() {
        println!("No principles yet.");
        return Ok(());
    }
    for principle in &principles {
        println!(
            "[{}] {} (priority {}, {})",
            principle.category.label(),
            principle.title,
            principle.priority,
            principle.id
        );
        if !principle.description.is_empty() {
            println!("    {}", principle.description);
        }
        for example in &principle.examples {
            println!("    - {example}");
        }
    }
    Ok(())
}

pub fn remove(config: &LumenConfig, user_id: &str, id: &str) -> Result<()> {
    let mut store = open_store(config)?;
    lumen::principles::remove_principle(&mut store, user_id, id)?;
    println!("Removed principle {id}");
    Ok(())
}
