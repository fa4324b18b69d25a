//! Player actions: movement, inventory, picking up and using items.

use log::{debug, info};

use crate::game::console::Console;
use crate::game::session::Session;
use crate::game::types::{items, normalize_item, rooms};

impl<C: Console> Session<C> {
    /// Move along an exit of the current room. The treasure room needs the rusty key.
    pub fn move_player(&mut self, direction: &str) {
        let target = match self
            .rooms
            .get(&self.state.current_room)
            .and_then(|room| room.exit_towards(direction))
        {
            Some(target) => target.to_string(),
            None => {
                self.say("You can't go that way.");
                return;
            }
        };

        if target == rooms::TREASURE_ROOM {
            if !self.state.holds(items::RUSTY_KEY) {
                self.say("The door is locked. You need a key to go further.");
                return;
            }
            self.say("You use the key you found to unlock the way into the treasure room.");
        }

        debug!(
            "move: '{}' -> '{}' via {}",
            self.state.current_room, target, direction
        );
        self.state.current_room = target;
        self.state.steps_taken = self.state.steps_taken.saturating_add(1);
        self.describe_current_room();
        self.random_event();
    }

    pub fn show_inventory(&mut self) {
        if self.state.inventory.is_empty() {
            self.say("Your inventory is empty.");
            return;
        }
        let line = format!("You are carrying: {}", self.state.inventory.join(", "));
        self.say(&line);
    }

    /// Move a matching item from the current room into the inventory, keeping its spelling.
    pub fn take_item(&mut self, name: &str) {
        let normalized = normalize_item(name);
        if normalized == items::TREASURE_CHEST || normalized == "treasure-chest" {
            self.say("You can't lift the chest, it is far too heavy.");
            return;
        }

        let taken = self
            .rooms
            .get_mut(&self.state.current_room)
            .and_then(|room| room.find_item(name).map(|idx| room.items.remove(idx)));

        match taken {
            Some(item) => {
                info!("take: '{}' from '{}'", item, self.state.current_room);
                self.say(&format!("You pick up: {}", item));
                self.state.inventory.push(item);
            }
            None => self.say("There is no such item here."),
        }
    }

    pub fn use_item(&mut self, name: &str) {
        let Some(stored) = self.state.find_in_inventory(name).map(str::to_string) else {
            self.say("You don't have that item.");
            return;
        };

        match normalize_item(&stored).as_str() {
            items::TORCH => self.say("You light the torch. It gets brighter around you."),
            items::SWORD => self.say("You grip the sword tighter and feel a surge of confidence."),
            items::BRONZE_BOX => {
                self.say("You open the bronze box.");
                if !self.state.holds(items::RUSTY_KEY) {
                    self.state.inventory.push(items::RUSTY_KEY.to_string());
                    self.say("Inside you find a rusty key and put it in your inventory.");
                }
            }
            _ => self.say("You are not sure how to use this item."),
        }
    }
}
