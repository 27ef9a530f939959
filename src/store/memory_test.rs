use super::*;
use crate::state::test_helpers::dummy_activity;

#[tokio::test]
async fn new_store_is_empty() {
    let store = MemoryActivityStore::new();
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_keeps_insertion_order() {
    let store = MemoryActivityStore::new();
    store.insert(&dummy_activity("Zoology", 5, 0)).await.unwrap();
    store.insert(&dummy_activity("Art Club", 5, 0)).await.unwrap();

    let names: Vec<String> = store.find_all().await.unwrap().into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["Zoology", "Art Club"]);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn insert_rejects_duplicate_name() {
    let store = MemoryActivityStore::new();
    store.insert(&dummy_activity("Chess Club", 5, 0)).await.unwrap();
    let err = store.insert(&dummy_activity("Chess Club", 9, 1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(name) if name == "Chess Club"));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn find_by_name_is_exact() {
    let store = MemoryActivityStore::with_activities(vec![dummy_activity("Chess Club", 5, 0)]);
    assert!(store.find_by_name("Chess Club").await.unwrap().is_some());
    assert!(store.find_by_name("chess club").await.unwrap().is_none());
}

#[tokio::test]
async fn push_participant_appends_to_end() {
    let store = MemoryActivityStore::with_activities(vec![dummy_activity("Chess Club", 5, 2)]);
    let modified = store.push_participant("Chess Club", "new@mergington.edu").await.unwrap();
    assert_eq!(modified, 1);

    let activity = store.find_by_name("Chess Club").await.unwrap().unwrap();
    assert_eq!(activity.participants.last().map(String::as_str), Some("new@mergington.edu"));
    assert_eq!(activity.participants.len(), 3);
}

#[tokio::test]
async fn push_participant_missing_record_modifies_nothing() {
    let store = MemoryActivityStore::new();
    assert_eq!(store.push_participant("Nope", "a@mergington.edu").await.unwrap(), 0);
}

#[tokio::test]
async fn pull_participant_removes_email() {
    let store = MemoryActivityStore::with_activities(vec![dummy_activity("Chess Club", 5, 3)]);
    let modified = store.pull_participant("Chess Club", "student1@mergington.edu").await.unwrap();
    assert_eq!(modified, 1);

    let activity = store.find_by_name("Chess Club").await.unwrap().unwrap();
    assert_eq!(activity.participants, ["student0@mergington.edu", "student2@mergington.edu"]);
}

#[tokio::test]
async fn pull_participant_absent_email_modifies_nothing() {
    let store = MemoryActivityStore::with_activities(vec![dummy_activity("Chess Club", 5, 1)]);
    assert_eq!(store.pull_participant("Chess Club", "ghost@mergington.edu").await.unwrap(), 0);
    assert_eq!(store.pull_participant("Nope", "student0@mergington.edu").await.unwrap(), 0);
}
