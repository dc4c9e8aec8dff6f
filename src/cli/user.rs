//! CLI `user add` and `greet` commands.

use anyhow::{Context, Result};
use chrono::Timelike;

use lumen::config::LumenConfig;
use lumen::store::{JournalStore, User};
use lumen::text::{display_name, greeting};

use super::open_store;

/// Create or replace a user row, keeping any stored profile.
pub fn add(config: &LumenConfig, id: &str, email: &str, name: Option<&str>) -> Result<()> {
    let store = open_store(config)?;
    let existing = store.get_user(id)?;

    let user = User {
        id: id.to_string(),
        email: email.to_string(),
        full_name: name.map(str::to_string),
        personality_profile: existing.as_ref().and_then(|u| u.personality_profile.clone()),
        onboarded: existing.as_ref().is_some_and(|u| u.onboarded),
    };
    store
        .upsert_user(&user)
        .with_context(|| format!("failed to save user {id}"))?;

    println!("Saved user {id} ({})", display_name(Some(&user)));
    Ok(())
}

/// Greet a user by name for the current local time.
pub fn greet(config: &LumenConfig, user_id: &str) -> Result<()> {
    let store = open_store(config)?;
    let user = store.get_user(user_id)?;
    let hour = chrono::Local::now().hour();
    println!("{}, {}", greeting(hour), display_name(user.as_ref()));
    Ok(())
}
