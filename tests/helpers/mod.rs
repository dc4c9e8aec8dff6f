#![allow(dead_code)]

use chrono::{DateTime, Utc};
use lumen::personality::{Answers, QUESTIONS};
use lumen::store::{SqliteStore, User};

pub const USER_ID: &str = "user-123";

/// A user that has not completed onboarding.
pub fn test_user(id: &str) -> User {
    User {
        id: id.into(),
        email: "jamie@example.com".into(),
        full_name: Some("Jamie Doe".into()),
        personality_profile: None,
        onboarded: false,
    }
}

/// Open a fresh in-memory database with schema applied and [`USER_ID`] seeded.
pub fn test_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    store.upsert_user(&test_user(USER_ID)).unwrap();
    store
}

/// Every question answered with `value`.
pub fn uniform_answers(value: f64) -> Answers {
    QUESTIONS.iter().map(|q| (q.id.to_string(), value)).collect()
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}
