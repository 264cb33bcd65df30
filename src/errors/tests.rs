//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_illegal_number_error() {
    let error = Error::new(
        ErrorImpl::IllegalNumber {
            lexeme: "12".to_string(),
            character: 'a',
        },
        Position(2),
    );

    assert_eq!(error.get_error_name(), "IllegalNumber");
    match error.kind() {
        ErrorImpl::IllegalNumber { lexeme, character } => {
            assert_eq!(lexeme, "12");
            assert_eq!(*character, 'a');
        }
        _ => panic!("Expected IllegalNumber"),
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '#' }, Position(3));
    assert_eq!(error.to_string(), "illegal character: '#' at position 3");

    let error = Error::new(
        ErrorImpl::IllegalNumber {
            lexeme: "4".to_string(),
            character: '_',
        },
        Position(1),
    );
    assert_eq!(
        error.to_string(),
        "illegal number: \"4\" followed by '_' at position 1"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '$' }, Position(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected character `$`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_none_for_control_character() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '\u{7}' }, Position(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
