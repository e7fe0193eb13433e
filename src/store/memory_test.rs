use super::*;
use crate::card::CardFields;

fn card(id: &str, status: &str) -> Card {
    Card::new(CardId::new(id), ColumnId::new(status), CardFields::default())
}

#[tokio::test]
async fn with_cards_positions_in_given_order() {
    let store = InMemoryCardStore::with_cards([card("b", "ideas"), card("a", "ideas")]);
    let loaded = store.load_cards().await.unwrap();
    let ids: Vec<&str> = loaded.iter().map(|r| r.card.id().as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(loaded[1].position, 1);
}

#[tokio::test]
async fn load_breaks_position_ties_by_id() {
    let store = InMemoryCardStore::new();
    store.create_card(&StoredCard { card: card("z", "ideas"), position: 0 }).await.unwrap();
    store.create_card(&StoredCard { card: card("m", "ideas"), position: 0 }).await.unwrap();
    let ids: Vec<String> = store.load_cards().await.unwrap().iter().map(|r| r.card.id().to_string()).collect();
    assert_eq!(ids, ["m", "z"]);
}

#[tokio::test]
async fn create_rejects_duplicate() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas")]);
    let err = store.create_card(&StoredCard { card: card("a", "launched"), position: 5 }).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(id) if id.as_str() == "a"));
    assert_eq!(store.record(&CardId::new("a")).map(|r| r.position), Some(0));
}

#[tokio::test]
async fn update_status_applies_and_logs() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas")]);
    store.update_status(&CardId::new("a"), &ColumnId::new("launched")).await.unwrap();

    let record = store.record(&CardId::new("a")).unwrap();
    assert_eq!(record.card.status().as_str(), "launched");
    assert_eq!(store.status_writes(), [(CardId::new("a"), ColumnId::new("launched"))]);
}

#[tokio::test]
async fn update_missing_card_is_not_found() {
    let store = InMemoryCardStore::new();
    let err = store.update_status(&CardId::new("ghost"), &ColumnId::new("ideas")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(matches!(store.update_card(&card("ghost", "ideas")).await, Err(StoreError::NotFound(_))));
    assert!(matches!(store.delete_card(&CardId::new("ghost")).await, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn update_card_replaces_fields_and_keeps_position() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas"), card("b", "ideas")]);
    let mut edited = card("b", "building");
    edited.fields.name = "Renamed".into();
    store.update_card(&edited).await.unwrap();

    let record = store.record(&CardId::new("b")).unwrap();
    assert_eq!(record.card, edited);
    assert_eq!(record.position, 1);
}

#[tokio::test]
async fn update_positions_skips_unknown_ids() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas"), card("b", "ideas")]);
    store
        .update_positions(&[
            CardPosition { id: CardId::new("b"), position: 0 },
            CardPosition { id: CardId::new("gone"), position: 1 },
            CardPosition { id: CardId::new("a"), position: 2 },
        ])
        .await
        .unwrap();

    let ids: Vec<String> = store.load_cards().await.unwrap().iter().map(|r| r.card.id().to_string()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[tokio::test]
async fn delete_removes_record() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas")]);
    store.delete_card(&CardId::new("a")).await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn injected_failures() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas")]);
    store.set_fail_loads(true);
    assert!(matches!(store.load_cards().await, Err(StoreError::Unavailable(_))));

    store.set_fail_writes(true);
    assert!(store.update_status(&CardId::new("a"), &ColumnId::new("launched")).await.is_err());
    assert!(store.delete_card(&CardId::new("a")).await.is_err());
    assert_eq!(store.len(), 1);

    store.set_fail_writes(false);
    store.set_fail_loads(false);
    assert!(store.delete_card(&CardId::new("a")).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn status_delay_reorders_completion() {
    let store = InMemoryCardStore::with_cards([card("a", "ideas")]);
    store.set_status_delay(&ColumnId::new("building"), Duration::from_millis(50));

    let slow = {
        let store = store.clone();
        tokio::spawn(async move { store.update_status(&CardId::new("a"), &ColumnId::new("building")).await })
    };
    let fast = {
        let store = store.clone();
        tokio::spawn(async move { store.update_status(&CardId::new("a"), &ColumnId::new("launched")).await })
    };
    slow.await.unwrap().unwrap();
    fast.await.unwrap().unwrap();

    let writes: Vec<String> = store.status_writes().iter().map(|(_, s)| s.to_string()).collect();
    assert_eq!(writes, ["launched", "building"]);
    assert_eq!(store.record(&CardId::new("a")).map(|r| r.card.status().to_string()).as_deref(), Some("building"));
}
