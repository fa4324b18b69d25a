//! Room descriptions and the help listing.

use log::warn;

use crate::game::console::Console;
use crate::game::session::Session;
use crate::game::types::Room;
use crate::game::world::CommandHelp;

/// Lines describing `room`: header, description, items, exits, puzzle hint.
pub fn render_room(room: &Room) -> Vec<String> {
    let mut lines = vec![
        format!("== {} ==", room.id.to_uppercase()),
        room.description.clone(),
    ];

    if !room.items.is_empty() {
        lines.push(format!("You notice: {}", room.items.join(", ")));
    }

    if !room.exits.is_empty() {
        let exits: Vec<String> = room
            .exits
            .iter()
            .map(|(direction, target)| format!("{} -> {}", direction, target))
            .collect();
        lines.push(format!("Exits: {}", exits.join(", ")));
    }

    if room.puzzle.is_some() {
        lines.push("There seems to be a puzzle here (use the solve command).".to_string());
    }

    lines
}

pub fn render_help(commands: &[CommandHelp]) -> Vec<String> {
    let mut lines = vec![String::new(), "Available commands:".to_string()];
    lines.extend(
        commands
            .iter()
            .map(|c| format!("  {:<16} - {}", c.usage, c.description)),
    );
    lines
}

impl<C: Console> Session<C> {
    pub fn describe_current_room(&mut self) {
        let lines = match self.rooms.get(&self.state.current_room) {
            Some(room) => render_room(room),
            None => {
                warn!("describe: unknown room '{}'", self.state.current_room);
                vec!["Unknown room. Something went wrong...".to_string()]
            }
        };
        for line in &lines {
            self.console.say(line);
        }
    }

    pub fn show_help(&mut self) {
        for line in render_help(&self.commands) {
            self.console.say(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_room_renders_in_order() {
        let room = Room::new("hall", "A vast hall.")
            .with_item("torch")
            .with_item("coin")
            .with_exit("south", "entrance")
            .with_exit("north", "treasure_room")
            .with_puzzle("Q?", "A");
        assert_eq!(
            render_room(&room),
            vec![
                "== HALL ==".to_string(),
                "A vast hall.".to_string(),
                "You notice: torch, coin".to_string(),
                "Exits: north -> treasure_room, south -> entrance".to_string(),
                "There seems to be a puzzle here (use the solve command).".to_string(),
            ]
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let room = Room::new("cell", "Bare walls.");
        assert_eq!(
            render_room(&room),
            vec!["== CELL ==".to_string(), "Bare walls.".to_string()]
        );
    }

    #[test]
    fn help_pads_usage_column() {
        let lines = render_help(&[CommandHelp::new("look", "look around")]);
        assert_eq!(lines[1], "Available commands:");
        assert_eq!(lines[2], format!("  {:<16} - look around", "look"));
    }
}
