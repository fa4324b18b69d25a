// Opening the treasure chest with the key or the code.

mod common;

use common::{default_session, drain, place};
use labyrinth::game::items;

fn chest_present(session: &labyrinth::game::Session<labyrinth::game::ScriptedConsole>) -> bool {
    session
        .rooms()
        .get("treasure_room")
        .unwrap()
        .has_item(items::TREASURE_CHEST)
}

#[test]
fn treasure_key_opens_chest_and_wins() {
    let mut session = default_session(&[]);
    place(&mut session, "treasure_room", &["rusty_key", "treasure_key"]);
    session.process_command("solve");

    assert!(!chest_present(&session));
    assert!(session.is_over());
    // the key stays in the inventory
    assert!(session.state().holds(items::TREASURE_KEY));
    assert!(session.console().printed("You win!"));
}

#[test]
fn correct_code_opens_chest() {
    let mut session = default_session(&["yes", " 10 "]);
    place(&mut session, "treasure_room", &["rusty_key"]);
    session.process_command("solve");

    assert!(!chest_present(&session));
    assert!(session.is_over());
    assert!(session.console().printed("The code is correct!"));
}

#[test]
fn wrong_code_leaves_chest_locked_and_allows_retries() {
    let mut session = default_session(&["y", "1234", "Y", "ten", "да", "10"]);
    place(&mut session, "treasure_room", &[]);

    session.process_command("solve");
    assert!(chest_present(&session));
    assert!(!session.is_over());
    assert!(session.console().printed("Wrong code. The chest stays locked."));

    // the code is the stored answer only, without word forms
    session.process_command("solve");
    assert!(chest_present(&session));
    assert!(!session.is_over());

    session.process_command("solve");
    assert!(!chest_present(&session));
    assert!(session.is_over());
}

#[test]
fn declining_the_code_prompt_changes_nothing() {
    let mut session = default_session(&["no"]);
    place(&mut session, "treasure_room", &[]);
    session.process_command("solve");

    assert!(chest_present(&session));
    assert!(!session.is_over());
    assert_eq!(drain(&mut session).last().unwrap(), "You step back from the chest.");
}

#[test]
fn chest_without_code_reports_it() {
    let mut session = default_session(&["yes"]);
    session.rooms_mut().get_mut("treasure_room").unwrap().puzzle = None;
    place(&mut session, "treasure_room", &[]);
    session.process_command("solve");

    assert!(chest_present(&session));
    assert!(session.console().printed("There seems to be no code for this chest."));
}

#[test]
fn already_opened_chest_is_reported() {
    let mut session = default_session(&[]);
    session
        .rooms_mut()
        .get_mut("treasure_room")
        .unwrap()
        .items
        .clear();
    place(&mut session, "treasure_room", &["treasure_key"]);
    session.process_command("solve");

    assert_eq!(drain(&mut session), vec!["The chest is already open.".to_string()]);
    assert!(!session.is_over());
}

#[test]
fn opening_outside_treasure_room_is_refused() {
    let mut session = default_session(&[]);
    place(&mut session, "hall", &["treasure_key"]);
    session.attempt_open_treasure();

    assert_eq!(drain(&mut session), vec!["There is nothing to open here.".to_string()]);
    assert!(chest_present(&session));
}

#[test]
fn closed_input_at_code_prompt_quits_without_judging() {
    let mut session = default_session(&["yes"]);
    place(&mut session, "treasure_room", &[]);
    session.process_command("solve");

    assert!(session.is_over());
    assert!(chest_present(&session));
    assert!(!session.console().printed("Wrong code"));
    assert!(session.console().printed("Leaving the game."));
}
