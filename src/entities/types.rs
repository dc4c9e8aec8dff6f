//! Entity type definitions.

use serde::{Deserialize, Serialize};

/// What kind of thing an entity names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// People and relations (names, "mom", "boss").
    Person,
    /// Something the writer wants to achieve.
    Goal,
    /// Something the writer is worried about.
    Concern,
    /// A feeling keyword.
    Emotion,
    /// Something the writer is doing or learning.
    Activity,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        Self::Person,
        Self::Goal,
        Self::Concern,
        Self::Emotion,
        Self::Activity,
    ];

    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Goal => "goal",
            Self::Concern => "concern",
            Self::Emotion => "emotion",
            Self::Activity => "activity",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "person" => Ok(Self::Person),
            "goal" => Ok(Self::Goal),
            "concern" => Ok(Self::Concern),
            "emotion" => Ok(Self::Emotion),
            "activity" => Ok(Self::Activity),
            _ => Err(format!("unknown entity type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!("unknown sentiment: {s}")),
        }
    }
}

/// A mention mined from journal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Person name, relation word, emotion keyword, or a phrase of at most 50 chars.
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Text surrounding the match.
    pub context: String,
    pub sentiment: Sentiment,
}

impl Entity {
    /// Identity used for deduplication: type plus lowercased name.
    pub fn dedup_key(&self) -> (EntityType, String) {
        (self.entity_type, self.name.to_lowercase())
    }
}
