//! Startup content for a labyrinth session: the room registry, the built-in
//! room table, JSON room table loading and the command help table.
//!
//! A room table on disk is a JSON object keyed by room id:
//!
//! ```json
//! {
//!   "entrance": {
//!     "description": "A cold stone doorway.",
//!     "items": ["torch"],
//!     "exits": { "north": "hall" },
//!     "puzzle": null
//!   }
//! }
//! ```
//!
//! `items`, `exits` and `puzzle` may be omitted.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::game::errors::GameError;
use crate::game::types::{Puzzle, Room};

/// All rooms of one session, keyed by id. Exits are validated on construction
/// so every exit target names a registered room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRegistry {
    rooms: BTreeMap<String, Room>,
}

impl RoomRegistry {
    pub fn new(rooms: Vec<Room>) -> Result<Self, GameError> {
        let mut map = BTreeMap::new();
        for room in rooms {
            if map.contains_key(&room.id) {
                return Err(GameError::DuplicateRoom(room.id));
            }
            map.insert(room.id.clone(), room);
        }

        for room in map.values() {
            for (direction, target) in &room.exits {
                if !map.contains_key(target) {
                    return Err(GameError::UnknownExitTarget {
                        room: room.id.clone(),
                        direction: direction.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(RoomRegistry { rooms: map })
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Rooms that still carry an unsolved puzzle.
    pub fn puzzle_count(&self) -> usize {
        self.rooms.values().filter(|r| r.puzzle.is_some()).count()
    }

    /// Items lying around in all rooms.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items.len()).sum()
    }
}

/// Key/value pairs of a JSON object in file order, duplicates included.
///
/// A plain map would silently keep the last of two equal keys; room tables
/// need to see both so they can be rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedEntries<V>(pub Vec<(String, V)>);

impl<V: Serialize> Serialize for SeedEntries<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SeedEntries<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(std::marker::PhantomData<V>);

        impl<'de, V: Deserialize<'de>> serde::de::Visitor<'de> for EntriesVisitor<V> {
            type Value = SeedEntries<V>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(std::marker::PhantomData))
    }
}

/// On-disk shape of a single room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSeed {
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub exits: SeedEntries<String>,
    #[serde(default)]
    pub puzzle: Option<Puzzle>,
}

impl RoomSeed {
    /// Turn the seed into a room. Directions are case-insensitive, so two exits
    /// that differ only by case are a conflict.
    fn into_room(self, id: String) -> Result<Room, GameError> {
        let mut exits = BTreeMap::new();
        for (direction, target) in self.exits.0 {
            let direction = direction.to_lowercase();
            if exits.contains_key(&direction) {
                return Err(GameError::DuplicateExit {
                    room: id,
                    direction,
                });
            }
            exits.insert(direction, target);
        }
        Ok(Room {
            id,
            description: self.description,
            items: self.items,
            exits,
            puzzle: self.puzzle,
        })
    }
}

/// Build a registry from id-keyed seeds, in file order.
pub fn rooms_from_seeds(seeds: SeedEntries<RoomSeed>) -> Result<RoomRegistry, GameError> {
    let rooms = seeds
        .0
        .into_iter()
        .map(|(id, seed)| seed.into_room(id))
        .collect::<Result<Vec<_>, _>>()?;
    RoomRegistry::new(rooms)
}

/// Parse a JSON room table. `origin` names the source in error messages.
pub fn parse_rooms_json(contents: &str, origin: &str) -> Result<RoomRegistry, GameError> {
    let seeds: SeedEntries<RoomSeed> =
        serde_json::from_str(contents).map_err(|source| GameError::SeedParse {
            path: origin.to_string(),
            source,
        })?;
    rooms_from_seeds(seeds)
}

/// Load a JSON room table from disk.
pub fn load_rooms_from_json<P: AsRef<Path>>(path: P) -> Result<RoomRegistry, GameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let registry = parse_rooms_json(&contents, &path.display().to_string())?;
    debug!(
        "Loaded {} rooms from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Serialize a registry back into the JSON room table format.
pub fn rooms_to_json(registry: &RoomRegistry) -> serde_json::Result<String> {
    let seeds = SeedEntries(
        registry
            .iter()
            .map(|room| {
                (
                    room.id.clone(),
                    RoomSeed {
                        description: room.description.clone(),
                        items: room.items.clone(),
                        exits: SeedEntries(
                            room.exits
                                .iter()
                                .map(|(dir, target)| (dir.clone(), target.clone()))
                                .collect(),
                        ),
                        puzzle: room.puzzle.clone(),
                    },
                )
            })
            .collect(),
    );
    serde_json::to_string_pretty(&seeds)
}

/// The built-in labyrinth used when no room table file is configured.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(
            "entrance",
            "You stand at the mouth of the labyrinth. Cold air drifts in from the dark corridors ahead.",
        )
        .with_item("torch")
        .with_exit("north", "hall")
        .with_exit("east", "trap_room"),
        Room::new(
            "hall",
            "A vast hall with a stone pedestal in the middle. An inscription is carved into its base.",
        )
        .with_exit("south", "entrance")
        .with_exit("west", "library")
        .with_exit("north", "treasure_room")
        .with_puzzle(
            "The inscription reads: \"Name the number that comes after nine.\" Answer with digits or a word.",
            "10",
        ),
        Room::new(
            "trap_room",
            "A narrow room with a suspicious tiled floor. Scratches on the walls tell of those who stumbled here.",
        )
        .with_item("rusty_key")
        .with_exit("west", "entrance")
        .with_puzzle(
            "The tiles hum. To cross safely, say the word \"step\" three times in a row.",
            "step step step",
        ),
        Room::new(
            "library",
            "Dusty shelves full of crumbling scrolls. Something might still be readable.",
        )
        .with_item("ancient_book")
        .with_exit("east", "hall")
        .with_exit("north", "armory")
        .with_puzzle(
            "A line on a scroll: \"I speak without a mouth and hear without ears. What am I?\"",
            "echo",
        ),
        Room::new(
            "armory",
            "An old armory. Most racks are empty, but not all of them.",
        )
        .with_item("sword")
        .with_item("bronze_box")
        .with_exit("south", "library"),
        Room::new(
            "treasure_room",
            "A chamber glittering with gold. A heavy chest stands against the far wall.",
        )
        .with_item("treasure_chest")
        .with_exit("south", "hall")
        .with_puzzle(
            "The chest lock is engraved: \"Two steps, five times over (2*5 = ?)\".",
            "10",
        ),
    ]
}

/// The built-in registry. The table is static, so validation cannot fail.
pub fn default_registry() -> RoomRegistry {
    RoomRegistry {
        rooms: default_rooms()
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect(),
    }
}

/// One line of the `help` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHelp {
    pub usage: String,
    pub description: String,
}

impl CommandHelp {
    pub fn new(usage: &str, description: &str) -> Self {
        CommandHelp {
            usage: usage.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn default_commands() -> Vec<CommandHelp> {
    vec![
        CommandHelp::new("go <direction>", "move in a direction (north/south/east/west)"),
        CommandHelp::new("look", "look around the current room"),
        CommandHelp::new("take <item>", "pick up an item"),
        CommandHelp::new("use <item>", "use an item from your inventory"),
        CommandHelp::new("inventory", "show your inventory"),
        CommandHelp::new("solve", "solve the puzzle in this room"),
        CommandHelp::new("quit", "leave the game"),
        CommandHelp::new("help", "show this message"),
    ]
}
