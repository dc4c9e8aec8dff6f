//! Personal principles: the values and rules a user chooses to live by.

use anyhow::{ensure, Context, Result};
use chrono::{DateTime, Utc};

use crate::store::{timestamp, JournalStore, NewPrinciple, Principle, PrincipleCategory};

/// Fields supplied when adding a principle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipleDraft {
    pub title: String,
    pub description: String,
    pub category: PrincipleCategory,
    /// Blank examples are dropped.
    pub examples: Vec<String>,
    /// Higher sorts first. New principles default to 0.
    pub priority: i32,
}

/// Store a new principle for `user_id`. The title must not be blank.
pub fn add_principle<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    draft: &PrincipleDraft,
    now: DateTime<Utc>,
) -> Result<Principle> {
    let title = draft.title.trim();
    ensure!(!title.is_empty(), "principle title is required");

    let new = NewPrinciple {
        user_id: user_id.to_string(),
        title: title.to_string(),
        description: draft.description.trim().to_string(),
        category: draft.category,
        examples: draft
            .examples
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect(),
        priority: draft.priority,
        created_at: timestamp(now),
    };
    let principle = store
        .insert_principle(&new)
        .with_context(|| format!("failed to add principle for user {user_id}"))?;

    tracing::info!(principle_id = %principle.id, user_id, category = %principle.category, "principle added");
    Ok(principle)
}

/// A user's principles, highest priority first.
pub fn list_principles<S: JournalStore + ?Sized>(store: &S, user_id: &str) -> Result<Vec<Principle>> {
    store
        .list_principles(user_id)
        .with_context(|| format!("failed to list principles for user {user_id}"))
}

pub fn remove_principle<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    principle_id: &str,
) -> Result<()> {
    store
        .delete_principle(user_id, principle_id)
        .with_context(|| format!("failed to remove principle {principle_id}"))?;
    tracing::info!(principle_id, user_id, "principle removed");
    Ok(())
}
