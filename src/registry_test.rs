use super::*;
use crate::card::CardFields;
use crate::column::ColumnId;

fn card(id: &str, status: &str) -> Card {
    Card::new(CardId::new(id), ColumnId::new(status), CardFields::default())
}

fn registry(cards: &[(&str, &str)]) -> CardRegistry {
    let mut reg = CardRegistry::new();
    reg.replace_ordering(cards.iter().map(|(id, status)| card(id, status)).collect());
    reg
}

fn ids(reg: &CardRegistry) -> Vec<String> {
    reg.ids().iter().map(ToString::to_string).collect()
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_and_index_of() {
    let reg = registry(&[("a", "ideas"), ("b", "building")]);
    assert_eq!(reg.find(&CardId::new("b")).map(|c| c.status().as_str()), Some("building"));
    assert_eq!(reg.index_of(&CardId::new("b")), Some(1));
    assert!(reg.find(&CardId::new("zz")).is_none());
    assert!(reg.find_key("a").is_some());
    assert!(reg.contains(&CardId::new("a")));
}

#[test]
fn filter_by_status_keeps_global_order() {
    let reg = registry(&[("a", "ideas"), ("b", "building"), ("c", "ideas"), ("d", "ideas")]);
    let ideas: Vec<&str> = reg.filter_by_status("ideas").iter().map(|c| c.id().as_str()).collect();
    assert_eq!(ideas, ["a", "c", "d"]);
    assert!(reg.filter_by_status("launched").is_empty());
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn update_one_patches_in_place() {
    let mut reg = registry(&[("a", "ideas")]);
    assert!(reg.update_one(&CardId::new("a"), |c| c.fields.name = "Renamed".into()));
    assert_eq!(reg.find(&CardId::new("a")).map(|c| c.fields.name.as_str()), Some("Renamed"));
    assert!(!reg.update_one(&CardId::new("missing"), |c| c.fields.name.clear()));
}

#[test]
fn remove_returns_card_and_shrinks() {
    let mut reg = registry(&[("a", "ideas"), ("b", "ideas")]);
    let removed = reg.remove(&CardId::new("a")).unwrap();
    assert_eq!(removed.id().as_str(), "a");
    assert_eq!(ids(&reg), ["b"]);
    assert!(reg.remove(&CardId::new("a")).is_none());
}

#[test]
fn insert_clamps_position_and_rejects_duplicates() {
    let mut reg = registry(&[("a", "ideas")]);
    assert!(reg.insert(card("b", "ideas"), 99));
    assert!(reg.insert(card("c", "ideas"), 0));
    assert!(!reg.insert(card("a", "launched"), 0));
    assert_eq!(ids(&reg), ["c", "a", "b"]);
    assert_eq!(reg.find(&CardId::new("a")).map(|c| c.status().as_str()), Some("ideas"));
}

#[test]
fn push_appends() {
    let mut reg = CardRegistry::new();
    assert!(reg.is_empty());
    assert!(reg.push(card("a", "ideas")));
    assert!(reg.push(card("b", "ideas")));
    assert_eq!(ids(&reg), ["a", "b"]);
    assert_eq!(reg.len(), 2);
}

#[test]
fn move_card_forward_shifts_between() {
    let mut reg = registry(&[("a", "x"), ("b", "x"), ("c", "x"), ("d", "x")]);
    assert!(reg.move_card(0, 2));
    assert_eq!(ids(&reg), ["b", "c", "a", "d"]);
}

#[test]
fn move_card_backward_shifts_between() {
    let mut reg = registry(&[("a", "x"), ("b", "x"), ("c", "x"), ("d", "x")]);
    assert!(reg.move_card(3, 1));
    assert_eq!(ids(&reg), ["a", "d", "b", "c"]);
}

#[test]
fn move_card_out_of_range_is_refused() {
    let mut reg = registry(&[("a", "x"), ("b", "x")]);
    assert!(!reg.move_card(0, 2));
    assert!(!reg.move_card(5, 0));
    assert!(reg.move_card(1, 1));
    assert_eq!(ids(&reg), ["a", "b"]);
}

#[test]
fn positions_follow_registry_index() {
    let reg = registry(&[("a", "x"), ("b", "y")]);
    let positions = reg.positions();
    assert_eq!(positions[0], CardPosition { id: CardId::new("a"), position: 0 });
    assert_eq!(positions[1], CardPosition { id: CardId::new("b"), position: 1 });
}

#[test]
fn clear_empties() {
    let mut reg = registry(&[("a", "x")]);
    reg.clear();
    assert!(reg.is_empty());
    assert_eq!(reg.iter().count(), 0);
}
