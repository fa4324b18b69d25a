//! Shared fixtures for labyrinth integration tests.

use labyrinth::config::{Config, EventConfig, Rules};
use labyrinth::game::{
    default_commands, default_registry, Room, RoomRegistry, ScriptedConsole, Session,
};

/// Default rules with ambient events switched off so moves have no side effects.
#[allow(dead_code)]
pub fn quiet_rules() -> Rules {
    let mut rules = Config::default().rules();
    rules.events = EventConfig {
        enabled: false,
        ..EventConfig::default()
    };
    rules
}

/// Built-in labyrinth, quiet rules, scripted input.
#[allow(dead_code)]
pub fn default_session(input: &[&str]) -> Session<ScriptedConsole> {
    session_in(default_registry(), quiet_rules(), input)
}

#[allow(dead_code)]
pub fn session_in(
    registry: RoomRegistry,
    rules: Rules,
    input: &[&str],
) -> Session<ScriptedConsole> {
    Session::new(
        registry,
        default_commands(),
        rules,
        ScriptedConsole::new(input.iter().copied()),
    )
    .expect("session")
}

/// Small two-room world: `entrance` north to `corridor`, which holds a torch.
#[allow(dead_code)]
pub fn corridor_world() -> RoomRegistry {
    RoomRegistry::new(vec![
        Room::new("entrance", "A cold doorway.").with_exit("north", "corridor"),
        Room::new("corridor", "A long corridor.")
            .with_item("torch")
            .with_exit("south", "entrance"),
    ])
    .expect("valid world")
}

/// Put the player in `room` holding `items`, bypassing movement.
#[allow(dead_code)]
pub fn place(session: &mut Session<ScriptedConsole>, room: &str, items: &[&str]) {
    let state = session.state_mut();
    state.current_room = room.to_string();
    state.inventory = items.iter().map(|s| s.to_string()).collect();
}

/// Output recorded since the last call.
#[allow(dead_code)]
pub fn drain(session: &mut Session<ScriptedConsole>) -> Vec<String> {
    session.console_mut().take_output()
}
