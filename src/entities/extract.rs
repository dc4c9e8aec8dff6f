//! Pattern scan over journal text.
//!
//! Each category is scanned independently and appended in a fixed order
//! (person, goal, concern, emotion, activity), then the list is deduplicated
//! on `(type, lowercased name)` keeping the first occurrence. All patterns run
//! on the `regex` crate's automata, so matching stays linear in the input.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::sentiment::{analyze_sentiment, EMOTION_KEYWORDS};
use super::types::{Entity, EntityType, Sentiment};

/// Characters of context kept before a match.
pub const CONTEXT_BEFORE: usize = 30;
/// Characters of context kept from the match start onward.
pub const CONTEXT_AFTER: usize = 70;
/// Maximum length of goal, concern, and activity names.
pub const MAX_PHRASE_LEN: usize = 50;

/// Capitalized tokens that are never person names. Compared case-sensitively.
const COMMON_WORDS: [&str; 19] = [
    "I", "The", "This", "That", "When", "What", "How", "Why", "Where", "It", "They", "We", "He",
    "She", "My", "Your", "Today", "Tomorrow", "Yesterday",
];

static PERSON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        // relation verb, then one or two capitalized words
        r"(?:my|with|told|asked|met|saw|called|texted|emailed)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        // name before a verb
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:said|told|asked|thinks|believes|wants|called|texted|is|and)",
        r"(?:about|and|from|to)\s+([A-Z][a-z]+)(?:\s|$|\.)",
        r"Then\s+([A-Z][a-z]+)\s",
        // relation words are the name themselves
        r"(?i)(?:mom|dad|mother|father|brother|sister|wife|husband|partner|boss|colleague|friend)",
    ])
});

static GOAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:want to|need to|plan to|going to|trying to|hope to|aim to)\s+([^.!?]+)",
        r"(?i)(?:my goal|my objective|my target)\s+(?:is|:)\s*([^.!?]+)",
    ])
});

static CONCERN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:worried about|anxious about|stressed about|concerned about|afraid of)\s+([^.!?]+)",
        r"(?i)(?:can't stop thinking about|keeps bothering me)\s+([^.!?]+)",
    ])
});

static ACTIVITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(?i)(?:started|began|doing|working on|practicing|learning)\s+([^.!?]+)"])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hardcoded regex must compile"))
        .collect()
}

/// Extract people, goals, concerns, emotions, and activities from `text`.
///
/// Never fails; text without matches yields an empty list.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    scan_people(text, &mut entities);
    scan_phrases(text, &GOAL_PATTERNS, EntityType::Goal, Sentiment::Positive, &mut entities);
    scan_phrases(text, &CONCERN_PATTERNS, EntityType::Concern, Sentiment::Negative, &mut entities);
    scan_emotions(text, &mut entities);
    scan_phrases(text, &ACTIVITY_PATTERNS, EntityType::Activity, Sentiment::Positive, &mut entities);

    let matched = entities.len();
    let entities = dedup(entities);
    tracing::debug!(
        text_len = text.len(),
        matched,
        kept = entities.len(),
        "entities extracted"
    );
    entities
}

fn scan_people(text: &str, out: &mut Vec<Entity>) {
    for pattern in PERSON_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let name = caps.get(1).map_or(whole.as_str(), |m| m.as_str());
            if name.chars().count() < 2 || is_common_word(name) {
                continue;
            }

            let context = extract_context(text, char_offset(text, whole.start()));
            out.push(Entity {
                name: name.trim().to_string(),
                entity_type: EntityType::Person,
                sentiment: analyze_sentiment(&context),
                context,
            });
        }
    }
}

/// Goal, concern, and activity patterns: the captured phrase runs to the next
/// sentence terminator and the sentiment is fixed per category.
fn scan_phrases(
    text: &str,
    patterns: &[Regex],
    entity_type: EntityType,
    sentiment: Sentiment,
    out: &mut Vec<Entity>,
) {
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(phrase)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push(Entity {
                name: truncate_chars(phrase.as_str().trim(), MAX_PHRASE_LEN),
                entity_type,
                context: extract_context(text, char_offset(text, whole.start())),
                sentiment,
            });
        }
    }
}

/// Keyword containment against the lowercased text; context is taken at the
/// keyword's first occurrence.
fn scan_emotions(text: &str, out: &mut Vec<Entity>) {
    let lower = text.to_lowercase();
    for (sentiment, keywords) in EMOTION_KEYWORDS {
        for keyword in keywords {
            if let Some(idx) = lower.find(*keyword) {
                out.push(Entity {
                    name: keyword.to_string(),
                    entity_type: EntityType::Emotion,
                    context: extract_context(text, char_offset(&lower, idx)),
                    sentiment,
                });
            }
        }
    }
}

fn dedup(entities: Vec<Entity>) -> Vec<Entity> {
    let mut seen = HashSet::new();
    entities
        .into_iter()
        .filter(|e| seen.insert(e.dedup_key()))
        .collect()
}

/// Snippet of `text` from `position - 30` to `position + 70` characters,
/// clamped to the text and trimmed.
pub fn extract_context(text: &str, position: usize) -> String {
    let start = position.saturating_sub(CONTEXT_BEFORE);
    let end = position.saturating_add(CONTEXT_AFTER);
    let snippet: String = text.chars().skip(start).take(end - start).collect();
    snippet.trim().to_string()
}

/// Whether `word` is on the stoplist of capitalized non-names.
pub fn is_common_word(word: &str) -> bool {
    COMMON_WORDS.contains(&word)
}

fn char_offset(text: &str, byte_idx: usize) -> usize {
    text[..byte_idx].chars().count()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
