//! Core data model for the labyrinth: rooms, puzzles and the per-session state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room identifiers the game logic gives special meaning to.
pub mod rooms {
    pub const HALL: &str = "hall";
    pub const LIBRARY: &str = "library";
    pub const TRAP_ROOM: &str = "trap_room";
    pub const TREASURE_ROOM: &str = "treasure_room";
}

/// Item names (in normalized form) the game logic recognises.
pub mod items {
    pub const TORCH: &str = "torch";
    pub const SWORD: &str = "sword";
    pub const BRONZE_BOX: &str = "bronze_box";
    pub const RUSTY_KEY: &str = "rusty_key";
    pub const TREASURE_KEY: &str = "treasure_key";
    pub const TREASURE_CHEST: &str = "treasure_chest";
    pub const COIN: &str = "coin";
    pub const ANCIENT_HINT: &str = "ancient_hint";
    pub const TRAP_TOKEN: &str = "trap_token";
    pub const MYSTERIOUS_TOKEN: &str = "mysterious_token";
}

/// Normalize an item name for identity comparison: lowercase, spaces become underscores.
pub fn normalize_item(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// True when `a` and `b` name the same item after normalization.
pub fn same_item(a: &str, b: &str) -> bool {
    normalize_item(a) == normalize_item(b)
}

/// A single question/answer riddle attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
}

impl Puzzle {
    pub fn new(question: &str, answer: &str) -> Self {
        Puzzle {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// A node of the labyrinth graph. Items, exits and the puzzle change during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: String,
    pub description: String,
    pub items: Vec<String>,
    pub exits: BTreeMap<String, String>,
    /// `None` once solved (or if the room never had one).
    pub puzzle: Option<Puzzle>,
}

impl Room {
    pub fn new(id: &str, description: &str) -> Self {
        Room {
            id: id.to_string(),
            description: description.to_string(),
            items: Vec::new(),
            exits: BTreeMap::new(),
            puzzle: None,
        }
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    pub fn with_exit(mut self, direction: &str, target: &str) -> Self {
        self.exits
            .insert(direction.to_lowercase(), target.to_string());
        self
    }

    pub fn with_puzzle(mut self, question: &str, answer: &str) -> Self {
        self.puzzle = Some(Puzzle::new(question, answer));
        self
    }

    /// Resolve a direction case-insensitively against this room's exits.
    pub fn exit_towards(&self, direction: &str) -> Option<&str> {
        let wanted = direction.to_lowercase();
        self.exits
            .iter()
            .find(|(dir, _)| dir.to_lowercase() == wanted)
            .map(|(_, target)| target.as_str())
    }

    /// Position of the first item whose normalized name matches `name`.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| same_item(item, name))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }
}

/// Mutable per-session player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub inventory: Vec<String>,
    pub current_room: String,
    pub game_over: bool,
    /// Successful moves so far; also the seed for trap and event rolls.
    pub steps_taken: u32,
}

impl GameState {
    pub fn new(start_room: &str) -> Self {
        GameState {
            inventory: Vec::new(),
            current_room: start_room.to_string(),
            game_over: false,
            steps_taken: 0,
        }
    }

    /// The stored inventory entry matching `name` after normalization.
    pub fn find_in_inventory(&self, name: &str) -> Option<&str> {
        self.inventory
            .iter()
            .find(|item| same_item(item, name))
            .map(String::as_str)
    }

    pub fn holds(&self, name: &str) -> bool {
        self.find_in_inventory(name).is_some()
    }
}
