//! Puzzles, traps, the treasure chest and ambient events.
//!
//! Everything that rolls dice seeds from `steps_taken`, so the same route
//! through the labyrinth always produces the same traps and events.

use log::{debug, info};

use crate::config::{EventConfig, TrapConfig};
use crate::game::console::Console;
use crate::game::rng::{pseudo_index, pseudo_random};
use crate::game::session::Session;
use crate::game::types::{items, rooms};

/// Number of distinct ambient event outcomes.
pub const EVENT_TYPE_COUNT: i64 = 3;

/// Accepted spellings when the expected answer is "10".
const TEN_WORDS: [&str; 3] = ["10", "ten", "десять"];

/// Replies to the chest prompt that mean "yes".
const AFFIRMATIVE: [&str; 3] = ["yes", "y", "да"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEvent {
    /// A coin appears on the floor of the current room.
    Find,
    /// Flavor only; a sword earns an extra line.
    Scare,
    /// Springs the trap, but only in the trap room without a torch.
    TrapAttempt,
}

impl RandomEvent {
    fn from_roll(roll: i64) -> Self {
        match roll {
            0 => RandomEvent::Find,
            1 => RandomEvent::Scare,
            _ => RandomEvent::TrapAttempt,
        }
    }
}

/// Which event, if any, fires after the move that brought the step count to `steps`.
pub fn roll_event(steps: u32, events: &EventConfig) -> Option<RandomEvent> {
    if !events.enabled {
        return None;
    }
    let seed = i64::from(steps);
    if pseudo_random(seed, events.probability) != events.trigger_value {
        return None;
    }
    Some(RandomEvent::from_roll(pseudo_random(seed + 1, EVENT_TYPE_COUNT)))
}

/// Outcome of a trap with an empty inventory.
pub fn trap_is_fatal(steps: u32, trap: &TrapConfig) -> bool {
    pseudo_random(i64::from(steps), trap.damage_roll_modulo) < trap.death_threshold
}

fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Compare a typed answer with the expected one, ignoring case and surrounding space.
pub fn answer_matches(given: &str, expected: &str) -> bool {
    let given = normalize_answer(given);
    let expected = normalize_answer(expected);
    if expected == "10" {
        return TEN_WORDS.contains(&given.as_str());
    }
    given == expected
}

impl<C: Console> Session<C> {
    pub fn solve_puzzle(&mut self) {
        let room_id = self.state.current_room.clone();
        let Some(puzzle) = self.rooms.get(&room_id).and_then(|r| r.puzzle.clone()) else {
            self.say("There are no puzzles here.");
            return;
        };

        self.say(&puzzle.question);
        let Some(answer) = self.ask("Your answer: ") else {
            return;
        };

        if !answer_matches(&answer, &puzzle.answer) {
            self.say("Wrong. Try again.");
            if room_id == rooms::TRAP_ROOM {
                self.trigger_trap();
            }
            return;
        }

        self.say("Correct! You solved the puzzle.");
        if let Some(room) = self.rooms.get_mut(&room_id) {
            room.puzzle = None;
        }
        info!("puzzle solved in '{}'", room_id);
        self.grant_reward(&room_id);
    }

    fn grant_reward(&mut self, room_id: &str) {
        match room_id {
            rooms::HALL => {
                if !self.state.holds(items::TREASURE_KEY) {
                    self.state.inventory.push(items::TREASURE_KEY.to_string());
                    self.say("You receive the treasure key!");
                }
            }
            rooms::LIBRARY => {
                self.state.inventory.push(items::ANCIENT_HINT.to_string());
                self.say("You find an ancient hint among the scrolls.");
            }
            rooms::TRAP_ROOM => {
                self.state.inventory.push(items::TRAP_TOKEN.to_string());
                self.say("You slip past the traps and find a strange token.");
            }
            _ => {
                self.state.inventory.push(items::MYSTERIOUS_TOKEN.to_string());
                self.say("You receive a mysterious token as a reward.");
            }
        }
    }

    /// Take a random item away, or roll for damage if there is nothing to take.
    pub fn trigger_trap(&mut self) {
        self.say("A trap is triggered! The floor begins to shake...");
        let steps = self.state.steps_taken;

        if !self.state.inventory.is_empty() {
            let idx = pseudo_index(steps, self.state.inventory.len());
            let lost = self.state.inventory.remove(idx);
            info!("trap: lost '{}' at step {}", lost, steps);
            self.say(&format!("You lose an item: {}!", lost));
            return;
        }

        if trap_is_fatal(steps, &self.rules.trap) {
            info!("trap: fatal at step {}", steps);
            self.say("The trap is deadly. You fail to escape in time...");
            self.state.game_over = true;
        } else {
            self.say("You narrowly avoid serious harm.");
        }
    }

    /// Open the chest with the treasure key, or by entering the room's code.
    pub fn attempt_open_treasure(&mut self) {
        if self.state.current_room != rooms::TREASURE_ROOM {
            self.say("There is nothing to open here.");
            return;
        }

        let chest_present = self
            .rooms
            .get(rooms::TREASURE_ROOM)
            .is_some_and(|room| room.has_item(items::TREASURE_CHEST));
        if !chest_present {
            self.say("The chest is already open.");
            return;
        }

        if self.state.holds(items::TREASURE_KEY) {
            self.say("You turn the key and the lock clicks. The chest is open!");
            self.open_chest();
            return;
        }

        self.say("The chest is locked. It looks like it opens with the right code.");
        let Some(choice) = self.ask("Enter the code? (yes/no): ") else {
            return;
        };
        if !AFFIRMATIVE.contains(&normalize_answer(&choice).as_str()) {
            self.say("You step back from the chest.");
            return;
        }

        let Some(expected) = self
            .rooms
            .get(rooms::TREASURE_ROOM)
            .and_then(|room| room.puzzle.as_ref())
            .map(|puzzle| puzzle.answer.clone())
        else {
            self.say("There seems to be no code for this chest.");
            return;
        };

        let Some(code) = self.ask("Enter the code: ") else {
            return;
        };
        if normalize_answer(&code) == normalize_answer(&expected) {
            self.say("The code is correct! The lock clicks and the chest opens.");
            self.open_chest();
        } else {
            debug!("chest: wrong code attempt");
            self.say("Wrong code. The chest stays locked.");
        }
    }

    fn open_chest(&mut self) {
        if let Some(room) = self.rooms.get_mut(rooms::TREASURE_ROOM) {
            if let Some(idx) = room.find_item(items::TREASURE_CHEST) {
                room.items.remove(idx);
            }
        }
        info!("chest opened after {} steps", self.state.steps_taken);
        self.say("The treasure is yours! You win!");
        self.state.game_over = true;
    }

    /// Roll for an ambient event after a successful move.
    pub fn random_event(&mut self) {
        let Some(event) = roll_event(self.state.steps_taken, &self.rules.events) else {
            return;
        };
        debug!(
            "random event {:?} at step {} in '{}'",
            event, self.state.steps_taken, self.state.current_room
        );

        match event {
            RandomEvent::Find => {
                self.say("You notice an old coin on the floor.");
                if let Some(room) = self.rooms.get_mut(&self.state.current_room) {
                    room.items.push(items::COIN.to_string());
                }
            }
            RandomEvent::Scare => {
                self.say("You hear a strange rustle nearby...");
                if self.state.holds(items::SWORD) {
                    self.say("You raise your sword and the creature retreats into the dark.");
                }
            }
            RandomEvent::TrapAttempt => {
                if self.state.current_room == rooms::TRAP_ROOM
                    && !self.state.holds(items::TORCH)
                {
                    self.say("You seem to have stepped on a suspicious tile...");
                    self.trigger_trap();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_ignore_case_and_whitespace() {
        assert!(answer_matches("  Echo ", "echo"));
        assert!(answer_matches("STEP step Step", "step step step"));
        assert!(!answer_matches("step step", "step step step"));
    }

    #[test]
    fn ten_accepts_word_forms() {
        assert!(answer_matches("10", "10"));
        assert!(answer_matches("Ten", "10"));
        assert!(answer_matches(" десять ", "10"));
        assert!(!answer_matches("eleven", "10"));
        // word forms only apply when the expected answer is the numeral
        assert!(!answer_matches("ten", "echo"));
    }

    #[test]
    fn disabled_events_never_fire() {
        let events = EventConfig {
            enabled: false,
            ..EventConfig::default()
        };
        assert!((0..200).all(|steps| roll_event(steps, &events).is_none()));
    }

    #[test]
    fn event_fires_only_on_trigger_value() {
        let events = EventConfig::default();
        for steps in 0..200u32 {
            let first = pseudo_random(i64::from(steps), events.probability);
            assert_eq!(
                roll_event(steps, &events).is_some(),
                first == events.trigger_value,
                "step {}",
                steps
            );
        }
    }

    #[test]
    fn event_kind_follows_second_roll() {
        let events = EventConfig::default();
        for steps in 0..300u32 {
            if let Some(event) = roll_event(steps, &events) {
                let kind = pseudo_random(i64::from(steps) + 1, EVENT_TYPE_COUNT);
                assert_eq!(event, RandomEvent::from_roll(kind));
            }
        }
    }

    #[test]
    fn fatal_trap_respects_threshold() {
        let never = TrapConfig {
            damage_roll_modulo: 10,
            death_threshold: 0,
        };
        let always = TrapConfig {
            damage_roll_modulo: 10,
            death_threshold: 10,
        };
        for steps in 0..50 {
            assert!(!trap_is_fatal(steps, &never));
            assert!(trap_is_fatal(steps, &always));
        }
    }
}
