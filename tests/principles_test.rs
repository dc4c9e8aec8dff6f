mod helpers;

use helpers::{at, test_store, USER_ID};
use lumen::principles::{add_principle, list_principles, remove_principle, PrincipleDraft};
use lumen::store::{PrincipleCategory, SqliteStore};

fn draft(title: &str, category: PrincipleCategory, priority: i32) -> PrincipleDraft {
    PrincipleDraft {
        title: title.into(),
        description: String::new(),
        category,
        examples: vec!["  ".into(), "Ask before assuming".into()],
        priority,
    }
}

#[test]
fn principles_persist_in_priority_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.upsert_user(&helpers::test_user(USER_ID)).unwrap();
        let now = at("2026-05-01T10:00:00Z");
        add_principle(&mut store, USER_ID, &draft("Stay curious", PrincipleCategory::Aspiration, 0), now).unwrap();
        add_principle(&mut store, USER_ID, &draft("Be honest", PrincipleCategory::CoreValue, 5), now).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let principles = list_principles(&store, USER_ID).unwrap();
    let titles: Vec<_> = principles.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Be honest", "Stay curious"]);
    assert_eq!(principles[0].category, PrincipleCategory::CoreValue);
    assert_eq!(principles[0].examples, ["Ask before assuming"]);
}

#[test]
fn remove_is_scoped_to_the_owner() {
    let mut store = test_store();
    store.upsert_user(&helpers::test_user("other-user")).unwrap();
    let principle = add_principle(
        &mut store,
        USER_ID,
        &draft("Rest on Sundays", PrincipleCategory::LifePrinciple, 1),
        at("2026-05-02T10:00:00Z"),
    )
    .unwrap();

    let err = remove_principle(&mut store, "other-user", &principle.id).unwrap_err();
    assert!(format!("{err:#}").contains("not found"));
    assert_eq!(list_principles(&store, USER_ID).unwrap().len(), 1);

    remove_principle(&mut store, USER_ID, &principle.id).unwrap();
    assert!(list_principles(&store, USER_ID).unwrap().is_empty());
}
