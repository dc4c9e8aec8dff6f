//! Personality-aware journaling core.
//!
//! Lumen scores a fixed 15-question Big-Five quiz into normalized trait scores
//! and a persuasion style, and pulls people, goals, concerns, emotions, and
//! activities out of free-form journal text so they can be remembered across
//! conversations.
//!
//! | Entity type | Found by | Sentiment |
//! |-------------|----------|-----------|
//! | **person** | relation verbs, capitalized names, relation words | from context |
//! | **goal** | "want to", "plan to", "my goal is" ... | positive |
//! | **concern** | "worried about", "afraid of" ... | negative |
//! | **emotion** | emotion keyword list | per keyword group |
//! | **activity** | "started", "working on", "learning" ... | positive |
//!
//! # Architecture
//!
//! - **Core**: [`personality`], [`entities`] and [`text`] are pure and never fail
//! - **Storage**: a narrow [`store::JournalStore`] trait with SQLite and in-memory backends
//! - **Operations**: [`profile`], [`journal`], [`memory`] and [`principles`] combine the
//!   core with storage
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite connection setup and schema
//! - [`entities`]: Rule-based entity extraction and sentiment
//! - [`journal`]: Saving and creating journal entries
//! - [`memory`]: Persisting extracted entities with mention counting
//! - [`personality`]: Questionnaire and Big-Five scoring
//! - [`principles`]: Personal principles, listed by priority
//! - [`profile`]: Onboarding completion
//! - [`store`]: Storage trait, records, and backends
//! - [`text`]: Word counts, display names, greetings

pub mod config;
pub mod db;
pub mod entities;
pub mod journal;
pub mod memory;
pub mod personality;
pub mod principles;
pub mod profile;
pub mod store;
pub mod text;
