use super::*;

#[test]
fn error_codes_are_stable() {
    let id = CardId::new("a");
    let cases = [
        (BoardError::LoadFailure("down".into()), "E_LOAD_FAILURE"),
        (
            BoardError::WriteFailure { op: WriteOp::Status, id: Some(id.clone()), source: StoreError::NotFound(id.clone()) },
            "E_WRITE_FAILURE",
        ),
        (BoardError::AuthRequired, "E_AUTH_REQUIRED"),
        (BoardError::CardNotFound(id.clone()), "E_CARD_NOT_FOUND"),
        (BoardError::UnknownColumn(ColumnId::new("nope")), "E_UNKNOWN_COLUMN"),
        (BoardError::GestureInProgress(id), "E_GESTURE_IN_PROGRESS"),
        (BoardError::InvalidColumns("empty".into()), "E_INVALID_COLUMNS"),
        (BoardError::Config("bad".into()), "E_CONFIG"),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }
}

#[test]
fn write_failure_names_card_and_op() {
    let id = CardId::new("card-7");
    let err = BoardError::WriteFailure {
        op: WriteOp::Fields,
        id: Some(id),
        source: StoreError::Unavailable("timeout".into()),
    };
    assert_eq!(err.to_string(), "fields write failed for card-7: store unavailable: timeout");
}

#[test]
fn write_failure_without_card_names_board() {
    let err = BoardError::WriteFailure { op: WriteOp::Order, id: None, source: StoreError::Unavailable("x".into()) };
    assert!(err.to_string().starts_with("order write failed for board:"));
}

#[test]
fn write_failure_exposes_store_error_as_source() {
    use std::error::Error as _;

    let err = BoardError::WriteFailure {
        op: WriteOp::Delete,
        id: Some(CardId::new("c")),
        source: StoreError::NotFound(CardId::new("c")),
    };
    let source = err.source().map(|e| e.to_string());
    assert_eq!(source.as_deref(), Some("card not found: c"));
}

#[test]
fn write_op_display_is_lowercase() {
    let names: Vec<String> =
        [WriteOp::Create, WriteOp::Status, WriteOp::Fields, WriteOp::Order, WriteOp::Delete].iter().map(ToString::to_string).collect();
    assert_eq!(names, ["create", "status", "fields", "order", "delete"]);
}

#[test]
fn auth_required_message_is_user_facing() {
    assert_eq!(BoardError::AuthRequired.to_string(), "sign in to add cards");
}
