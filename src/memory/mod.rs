//! Entity memory: persisting extracted entities with mention counting.
//!
//! [`save_entities`] is the write path. Each entity is keyed by
//! `(user_id, name, type)`; a known key refreshes context and sentiment and
//! bumps `mention_count`, an unknown one is inserted with `mention_count = 1`.
//! A batch is applied as a whole: if one write fails, nothing is kept.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::entities::{extract_entities, Entity};
use crate::store::{timestamp, JournalStore, NewMemoryItem};

pub use crate::store::SaveSummary;

/// Persist `entities` for `user_id`, stamping every touched item with `now`.
pub fn save_entities<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    entities: &[Entity],
    now: DateTime<Utc>,
) -> Result<SaveSummary> {
    if entities.is_empty() {
        return Ok(SaveSummary::default());
    }

    let now = timestamp(now);
    let mentions: Vec<NewMemoryItem> = entities
        .iter()
        .map(|entity| NewMemoryItem {
            user_id: user_id.to_string(),
            name: entity.name.clone(),
            item_type: entity.entity_type,
            context: entity.context.clone(),
            sentiment: entity.sentiment,
            last_mentioned: now.clone(),
        })
        .collect();

    let summary = store
        .record_mentions(&mentions)
        .with_context(|| format!("failed to save {} entities for user {user_id}", mentions.len()))?;

    tracing::info!(
        user_id,
        inserted = summary.inserted,
        updated = summary.updated,
        "entities saved to memory"
    );
    Ok(summary)
}

/// Extract entities from one conversational turn and persist them.
pub fn remember<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    text: &str,
    now: DateTime<Utc>,
) -> Result<(Vec<Entity>, SaveSummary)> {
    let entities = extract_entities(text);
    let summary = save_entities(store, user_id, &entities, now)?;
    Ok((entities, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityType, Sentiment};
    use crate::store::InMemoryStore;

    fn entity(name: &str, entity_type: EntityType, sentiment: Sentiment) -> Entity {
        Entity {
            name: name.into(),
            entity_type,
            context: format!("... {name} ..."),
            sentiment,
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut store = InMemoryStore::new();
        store.fail_with("should not be called");
        let summary = save_entities(&mut store, "u1", &[], Utc::now()).unwrap();
        assert_eq!(summary, SaveSummary::default());
    }

    #[test]
    fn repeat_mention_bumps_count_and_refreshes() {
        let mut store = InMemoryStore::new();
        let first = entity("Sarah", EntityType::Person, Sentiment::Neutral);
        save_entities(&mut store, "u1", &[first], at("2026-01-01T09:00:00Z")).unwrap();

        let mut second = entity("Sarah", EntityType::Person, Sentiment::Positive);
        second.context = "Sarah was wonderful".into();
        let summary =
            save_entities(&mut store, "u1", &[second], at("2026-01-02T09:00:00Z")).unwrap();
        assert_eq!(summary, SaveSummary { inserted: 0, updated: 1 });

        let items = store.memory_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].mention_count, 2);
        assert_eq!(items[0].sentiment, Sentiment::Positive);
        assert_eq!(items[0].context, "Sarah was wonderful");
        assert_eq!(items[0].last_mentioned, "2026-01-02T09:00:00.000000Z");
        assert_eq!(items[0].created_at, "2026-01-01T09:00:00.000000Z");
    }

    #[test]
    fn same_name_different_type_is_a_separate_item() {
        let mut store = InMemoryStore::new();
        let summary = save_entities(
            &mut store,
            "u1",
            &[
                entity("worried", EntityType::Emotion, Sentiment::Negative),
                entity("worried", EntityType::Concern, Sentiment::Negative),
            ],
            Utc::now(),
        )
        .unwrap();
        assert_eq!(summary.inserted, 2);
    }

    #[test]
    fn items_are_scoped_per_user() {
        let mut store = InMemoryStore::new();
        let mom = entity("mom", EntityType::Person, Sentiment::Neutral);
        save_entities(&mut store, "u1", std::slice::from_ref(&mom), Utc::now()).unwrap();
        let summary = save_entities(&mut store, "u2", &[mom], Utc::now()).unwrap();
        assert_eq!(summary.inserted, 1);
    }

    #[test]
    fn store_failure_is_propagated() {
        let mut store = InMemoryStore::new();
        store.fail_with("Database connection failed");
        let err = save_entities(
            &mut store,
            "u1",
            &[entity("mom", EntityType::Person, Sentiment::Neutral)],
            Utc::now(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Database connection failed"));
    }

    #[test]
    fn remember_extracts_then_saves() {
        let mut store = InMemoryStore::new();
        let (entities, summary) = remember(
            &mut store,
            "u1",
            "I talked to my mom today. I feel grateful.",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(summary.inserted, entities.len());
        assert!(store
            .memory_items()
            .iter()
            .any(|i| i.name == "mom" && i.item_type == EntityType::Person));
        assert!(store.memory_items().iter().any(|i| i.name == "grateful"));
    }

    #[test]
    fn failed_batch_leaves_memory_untouched() {
        let mut store = InMemoryStore::new();
        let mom = entity("mom", EntityType::Person, Sentiment::Neutral);
        save_entities(&mut store, "u1", std::slice::from_ref(&mom), Utc::now()).unwrap();

        store.reject_memory_item("boom");
        let result = save_entities(
            &mut store,
            "u1",
            &[
                mom,
                entity("Sarah", EntityType::Person, Sentiment::Neutral),
                entity("boom", EntityType::Goal, Sentiment::Positive),
            ],
            Utc::now(),
        );
        assert!(result.is_err());

        let names: Vec<_> = store.memory_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["mom"]);
        assert_eq!(store.memory_items()[0].mention_count, 1);
    }
}
