//! The labyrinth game: rooms, player actions, puzzles and the command loop.
//!
//! A [`Session`] owns one playthrough. It is assembled from a [`RoomRegistry`],
//! the help table, the [`Rules`](crate::config::Rules) and a [`Console`], then
//! driven with [`Session::run`] or line by line with [`Session::process_command`].

pub mod actions;
pub mod commands;
pub mod console;
pub mod errors;
pub mod events;
pub mod narration;
pub mod rng;
pub mod session;
pub mod types;
pub mod world;

pub use commands::{parse_command, GameCommand, Verb};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use errors::GameError;
pub use events::{answer_matches, roll_event, trap_is_fatal, RandomEvent, EVENT_TYPE_COUNT};
pub use narration::{render_help, render_room};
pub use rng::{pseudo_index, pseudo_random};
pub use session::Session;
pub use types::{items, normalize_item, rooms, same_item, GameState, Puzzle, Room};
pub use world::{
    default_commands, default_registry, default_rooms, load_rooms_from_json, parse_rooms_json,
    rooms_to_json, CommandHelp, RoomRegistry, RoomSeed, SeedEntries,
};
