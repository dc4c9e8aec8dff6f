//! Records exchanged with a [`JournalStore`](super::JournalStore).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{EntityType, Sentiment};
use crate::personality::PersonalityProfile;

/// A user profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    /// Set once onboarding completes.
    pub personality_profile: Option<PersonalityProfile>,
    pub onboarded: bool,
}

/// How an entry was captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    #[default]
    Text,
    Voice,
    Email,
    Image,
}

impl EntrySource {
    pub const ALL: [EntrySource; 4] = [Self::Text, Self::Voice, Self::Email, Self::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Email => "email",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for EntrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntrySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            "email" => Ok(Self::Email),
            "image" => Ok(Self::Image),
            _ => Err(format!("unknown entry source: {s}")),
        }
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub source: EntrySource,
    pub word_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields written when an entry is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    pub title: String,
    pub content: String,
    pub word_count: usize,
}

/// Filter and paging for listing a user's entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    pub limit: usize,
    pub offset: usize,
    /// `None` lists every source.
    pub source: Option<EntrySource>,
    /// Substring matched against title or content, ignoring ASCII case.
    pub search: Option<String>,
}

impl Default for EntryQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            source: None,
            search: None,
        }
    }
}

impl EntryQuery {
    /// Whether `entry` passes the source and search filters. Paging is not applied.
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.source.is_some_and(|s| s != entry.source) {
            return false;
        }
        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(needle) => {
                let needle = needle.to_ascii_lowercase();
                entry.title.to_ascii_lowercase().contains(&needle)
                    || entry.content.to_ascii_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// A persisted entity, unique per `(user_id, name, item_type)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub item_type: EntityType,
    /// Context snippet from the latest mention.
    pub context: String,
    /// Sentiment from the latest mention.
    pub sentiment: Sentiment,
    /// Times this item has been seen, starting at 1.
    pub mention_count: u32,
    pub last_mentioned: String,
    pub created_at: String,
}

/// A memory item seen for the first time. Stored with `mention_count = 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemoryItem {
    pub user_id: String,
    pub name: String,
    pub item_type: EntityType,
    pub context: String,
    pub sentiment: Sentiment,
    pub last_mentioned: String,
}

/// Counts from recording a batch of mentions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SaveSummary {
    /// Items seen for the first time.
    pub inserted: usize,
    /// Items already in memory whose mention count was bumped.
    pub updated: usize,
}

/// Fields refreshed when a known memory item is mentioned again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryItemUpdate {
    pub context: String,
    pub sentiment: Sentiment,
    pub mention_count: u32,
    pub last_mentioned: String,
}

/// Per-user memory counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub total_items: u64,
    pub total_mentions: u64,
    pub by_type: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_mentioned: Option<String>,
}

/// Kind of personal principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipleCategory {
    CoreValue,
    LifePrinciple,
    DecisionRule,
    Aspiration,
}

impl PrincipleCategory {
    pub const ALL: [PrincipleCategory; 4] = [
        Self::CoreValue,
        Self::LifePrinciple,
        Self::DecisionRule,
        Self::Aspiration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoreValue => "core_value",
            Self::LifePrinciple => "life_principle",
            Self::DecisionRule => "decision_rule",
            Self::Aspiration => "aspiration",
        }
    }

    /// Heading shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CoreValue => "Sacred Value",
            Self::LifePrinciple => "Life Principle",
            Self::DecisionRule => "Decision Wisdom",
            Self::Aspiration => "Aspiration",
        }
    }
}

impl std::fmt::Display for PrincipleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PrincipleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core_value" => Ok(Self::CoreValue),
            "life_principle" => Ok(Self::LifePrinciple),
            "decision_rule" => Ok(Self::DecisionRule),
            "aspiration" => Ok(Self::Aspiration),
            _ => Err(format!("unknown principle category: {s}")),
        }
    }
}

/// A personal principle. Listed highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: PrincipleCategory,
    pub examples: Vec<String>,
    pub priority: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrinciple {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: PrincipleCategory,
    pub examples: Vec<String>,
    pub priority: i32,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, content: &str, source: EntrySource) -> Entry {
        Entry {
            id: "e1".into(),
            user_id: "u1".into(),
            title: title.into(),
            content: content.into(),
            source,
            word_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn query_search_ignores_case_in_title_or_content() {
        let e = entry("Morning Walk", "Saw a heron by the river", EntrySource::Text);
        let search = |s: &str| EntryQuery {
            search: Some(s.into()),
            ..EntryQuery::default()
        };
        assert!(search("walk").matches(&e));
        assert!(search("HERON").matches(&e));
        assert!(!search("evening").matches(&e));
        assert!(search("").matches(&e));
    }

    #[test]
    fn query_source_filter() {
        let e = entry("t", "c", EntrySource::Voice);
        let by = |source| EntryQuery {
            source,
            ..EntryQuery::default()
        };
        assert!(by(None).matches(&e));
        assert!(by(Some(EntrySource::Voice)).matches(&e));
        assert!(!by(Some(EntrySource::Text)).matches(&e));
    }

    #[test]
    fn enum_names_round_trip_through_from_str() {
        for source in EntrySource::ALL {
            assert_eq!(source.as_str().parse::<EntrySource>(), Ok(source));
        }
        for category in PrincipleCategory::ALL {
            assert_eq!(category.as_str().parse::<PrincipleCategory>(), Ok(category));
        }
        assert!("all".parse::<EntrySource>().is_err());
    }

    #[test]
    fn category_labels() {
        assert_eq!(PrincipleCategory::CoreValue.label(), "Sacred Value");
        assert_eq!(PrincipleCategory::DecisionRule.label(), "Decision Wisdom");
    }
}
