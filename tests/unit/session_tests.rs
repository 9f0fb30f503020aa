/*!
 * Tests for the session state machine
 */

use linguachat::errors::SessionError;
use linguachat::session::{SessionMachine, SessionState};

/// Build a machine with a complete, valid selection
fn ready_machine() -> SessionMachine {
    let mut machine = SessionMachine::new();
    machine.set_name("Ada");
    machine.select_sector("Games").unwrap();
    machine.select_company("Nintendo").unwrap();
    machine
}

/// Test the initial state
#[test]
fn test_newMachine_shouldStartOnSelectionScreen() {
    let machine = SessionMachine::new();
    assert_eq!(machine.state(), SessionState::SelectingCompany);
    assert!(machine.session().name.is_empty());
}

/// Test that confirming without a name is blocked
#[test]
fn test_confirm_withEmptyName_shouldRejectAndStay() {
    let mut machine = SessionMachine::new();
    machine.select_sector("Games").unwrap();
    machine.select_company("Nintendo").unwrap();

    assert_eq!(machine.confirm(), Err(SessionError::EmptyName));
    assert_eq!(machine.state(), SessionState::SelectingCompany);

    // Whitespace-only names count as empty
    machine.set_name("   ");
    assert_eq!(machine.confirm(), Err(SessionError::EmptyName));
    assert_eq!(machine.state(), SessionState::SelectingCompany);
}

/// Test selection validation against the directory
#[test]
fn test_selection_withUnknownEntries_shouldReject() {
    let mut machine = SessionMachine::new();

    assert!(matches!(
        machine.select_sector("Food"),
        Err(SessionError::UnknownSector(_))
    ));

    machine.select_sector("Games").unwrap();
    assert!(matches!(
        machine.select_company("Rolex"),
        Err(SessionError::UnknownCompany { .. })
    ));
}

/// Test that changing sector clears the company selection
#[test]
fn test_select_sector_whenChanged_shouldClearCompany() {
    let mut machine = ready_machine();

    machine.select_sector("Cars").unwrap();
    assert!(machine.session().company.is_empty());

    // Confirming now fails until a company is picked again
    assert!(matches!(
        machine.confirm(),
        Err(SessionError::UnknownCompany { .. })
    ));

    machine.select_company("Mercedes").unwrap();
    assert!(machine.confirm().is_ok());
}

/// Test the happy-path transition to chatting
#[test]
fn test_confirm_withValidSelection_shouldMoveToChatting() {
    let mut machine = ready_machine();

    assert!(machine.confirm().is_ok());
    assert_eq!(machine.state(), SessionState::Chatting);

    let session = machine.session();
    assert_eq!(session.name, "Ada");
    assert_eq!(session.sector, "Games");
    assert_eq!(session.company, "Nintendo");
}

/// Test that transitions are rejected from the wrong state
#[test]
fn test_transitions_fromWrongState_shouldBeRejected() {
    let mut machine = ready_machine();

    // go_back before confirming
    assert!(matches!(
        machine.go_back(),
        Err(SessionError::InvalidTransition(_))
    ));

    machine.confirm().unwrap();

    // confirm twice
    assert!(matches!(
        machine.confirm(),
        Err(SessionError::InvalidTransition(_))
    ));
}

/// Test that going back retains the selections
#[test]
fn test_go_back_shouldRetainSelections() {
    let mut machine = ready_machine();
    machine.confirm().unwrap();

    machine.go_back().unwrap();
    assert_eq!(machine.state(), SessionState::SelectingCompany);

    let session = machine.session();
    assert_eq!(session.name, "Ada");
    assert_eq!(session.sector, "Games");
    assert_eq!(session.company, "Nintendo");

    // The retained selection confirms again without re-entry
    assert!(machine.confirm().is_ok());
}

/// Test message validation
#[test]
fn test_validate_message_shouldGateOnStateAndContent() {
    let machine = SessionMachine::new();

    // Not chatting yet
    assert!(matches!(
        machine.validate_message("hi"),
        Err(SessionError::InvalidTransition(_))
    ));

    let mut machine = ready_machine();
    machine.confirm().unwrap();

    assert_eq!(machine.validate_message(""), Err(SessionError::EmptyMessage));
    assert_eq!(machine.validate_message("  \t "), Err(SessionError::EmptyMessage));

    // Valid messages come back trimmed
    assert_eq!(machine.validate_message("  hello  "), Ok("hello"));
}
