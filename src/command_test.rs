use super::*;

#[test]
fn parses_simple_verbs_and_aliases() {
    assert_eq!(Command::parse("list"), Ok(Command::List));
    assert_eq!(Command::parse("  ls  "), Ok(Command::List));
    assert_eq!(Command::parse("drop"), Ok(Command::Drop));
    assert_eq!(Command::parse("cancel"), Ok(Command::Cancel));
    assert_eq!(Command::parse("logout"), Ok(Command::Logout));
    assert_eq!(Command::parse("exit"), Ok(Command::Quit));
}

#[test]
fn parses_card_commands() {
    assert_eq!(Command::parse("add building"), Ok(Command::Add(ColumnId::new("building"))));
    assert_eq!(Command::parse("rm 3"), Ok(Command::Delete(CardId::new("3"))));
    assert_eq!(
        Command::parse("status 3 launched"),
        Ok(Command::Status(CardId::new("3"), ColumnId::new("launched")))
    );
    assert_eq!(Command::parse("login ada"), Ok(Command::Login("ada".into())));
}

#[test]
fn label_joins_remaining_words() {
    assert_eq!(
        Command::parse("label 1 Developer   Tools"),
        Ok(Command::Label(CardId::new("1"), "Developer Tools".into()))
    );
    assert_eq!(Command::parse("label 1"), Err(CommandError::Usage("label <card> <text>")));
}

#[test]
fn parses_gesture_commands() {
    assert_eq!(Command::parse("drag 1"), Ok(Command::Drag(CardId::new("1"))));
    assert_eq!(Command::parse("over card 2"), Ok(Command::Over(DropTarget::OverCard(CardId::new("2")))));
    assert_eq!(
        Command::parse("over column launched"),
        Ok(Command::Over(DropTarget::OverColumn(ColumnId::new("launched"))))
    );
    assert_eq!(Command::parse("over none"), Ok(Command::Over(DropTarget::None)));
}

#[test]
fn reports_usage_for_missing_arguments() {
    assert!(matches!(Command::parse("add"), Err(CommandError::Usage(_))));
    assert!(matches!(Command::parse("status 1"), Err(CommandError::Usage(_))));
    assert!(matches!(Command::parse("over somewhere 1"), Err(CommandError::Usage(_))));
}

#[test]
fn rejects_blank_and_unknown() {
    assert_eq!(Command::parse("   "), Err(CommandError::Empty));
    assert_eq!(Command::parse("fly away"), Err(CommandError::Unknown("fly".into())));
}
