use super::*;

#[test]
fn default_set_is_ideas_building_launched() {
    let set = ColumnSet::default();
    let ids: Vec<String> = set.ids().iter().map(ToString::to_string).collect();
    assert_eq!(ids, ["ideas", "building", "launched"]);
    assert_eq!(set.get("building").map(|c| c.title.as_str()), Some("Building"));
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

#[test]
fn new_rejects_empty_list() {
    let err = ColumnSet::new(Vec::new()).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_COLUMNS");
}

#[test]
fn new_rejects_duplicate_ids() {
    let err = ColumnSet::new(vec![Column::new("todo", "To do"), Column::new("todo", "Again")]).unwrap_err();
    assert!(err.to_string().contains("duplicate column id: todo"));
}

#[test]
fn contains_matches_ids_not_titles() {
    let set = ColumnSet::new(vec![Column::new("todo", "To do"), Column::new("done", "Done")]).unwrap();
    assert!(set.contains("todo"));
    assert!(!set.contains("To do"));
    assert!(set.get("missing").is_none());
}

#[test]
fn iter_preserves_declared_order() {
    let set = ColumnSet::new(vec![Column::new("b", "B"), Column::new("a", "A")]).unwrap();
    let ids: Vec<&str> = set.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn column_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&ColumnId::new("ideas")).unwrap();
    assert_eq!(json, "\"ideas\"");
}
