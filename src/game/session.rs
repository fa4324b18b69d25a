//! A single game session: state, room registry, rules and console, plus the
//! read-dispatch loop that drives them.
//!
//! The handlers live next to their concerns (`narration`, `actions`, `events`)
//! as further `impl` blocks on [`Session`].

use log::{debug, error, info};

use crate::config::Rules;
use crate::game::commands::{parse_command, GameCommand};
use crate::game::console::Console;
use crate::game::errors::GameError;
use crate::game::types::{rooms, GameState};
use crate::game::world::{default_commands, default_registry, CommandHelp, RoomRegistry};
use crate::logutil::escape_log;

pub const WELCOME: &str = "Welcome to the Treasure Labyrinth!";
pub const FAREWELL: &str = "Leaving the game. Thanks for playing!";
const PROMPT: &str = "> ";

pub struct Session<C: Console> {
    pub(crate) state: GameState,
    pub(crate) rooms: RoomRegistry,
    pub(crate) commands: Vec<CommandHelp>,
    pub(crate) rules: Rules,
    pub(crate) console: C,
}

impl<C: Console> Session<C> {
    /// Assemble a session. The start room named by `rules` must exist.
    pub fn new(
        rooms: RoomRegistry,
        commands: Vec<CommandHelp>,
        rules: Rules,
        console: C,
    ) -> Result<Self, GameError> {
        if !rooms.contains(&rules.start_room) {
            return Err(GameError::UnknownStartRoom(rules.start_room));
        }
        Ok(Session {
            state: GameState::new(&rules.start_room),
            rooms,
            commands,
            rules,
            console,
        })
    }

    /// Session over the built-in labyrinth with default rules.
    pub fn with_defaults(console: C) -> Self {
        let rules = Rules::default();
        Session {
            state: GameState::new(&rules.start_room),
            rooms: default_registry(),
            commands: default_commands(),
            rules,
            console,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut RoomRegistry {
        &mut self.rooms
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub(crate) fn say(&mut self, line: &str) {
        self.console.say(line);
    }

    /// Read a reply to a sub-prompt. Closed input ends the game like `quit`.
    pub(crate) fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.console.prompt(prompt) {
            Some(line) => Some(line),
            None => {
                debug!("input closed during prompt '{}'", prompt.trim());
                self.say("");
                self.quit();
                None
            }
        }
    }

    pub(crate) fn quit(&mut self) {
        self.say(FAREWELL);
        self.state.game_over = true;
    }

    /// Greet the player and loop over input until the game ends.
    pub fn run(&mut self) {
        info!(
            "Session started in '{}' with {} rooms",
            self.state.current_room,
            self.rooms.len()
        );
        self.say(WELCOME);
        self.describe_current_room();

        while !self.state.game_over {
            match self.console.prompt(PROMPT) {
                Some(line) => self.process_command(&line),
                None => {
                    debug!("input closed, treating as quit");
                    self.say("");
                    self.dispatch(GameCommand::Quit);
                }
            }
        }

        info!(
            "Session finished after {} steps in '{}'",
            self.state.steps_taken, self.state.current_room
        );
    }

    /// Parse and execute one line of player input.
    pub fn process_command(&mut self, input: &str) {
        let command = parse_command(input);
        debug!(
            "command parsed: input='{}' command={:?}",
            escape_log(input),
            command
        );
        self.dispatch(command);
        self.recover_if_lost();
    }

    pub fn dispatch(&mut self, command: GameCommand) {
        match command {
            GameCommand::Empty => self.say("Enter a command."),
            GameCommand::Look => self.describe_current_room(),
            GameCommand::Inventory => self.show_inventory(),
            GameCommand::Help => self.show_help(),
            GameCommand::Move(direction) => self.move_player(&direction),
            GameCommand::Take(item) => self.take_item(&item),
            GameCommand::Use(item) => self.use_item(&item),
            GameCommand::Solve => {
                // the chest shares the verb with ordinary puzzles
                if self.state.current_room == rooms::TREASURE_ROOM {
                    self.attempt_open_treasure();
                } else {
                    self.solve_puzzle();
                }
            }
            GameCommand::Quit => self.quit(),
            GameCommand::MissingArgument(verb) => self.say(verb.usage()),
            GameCommand::Unknown(_) => {
                self.say("Unknown command. Type 'help' to see what you can do.")
            }
        }
    }

    /// Pull the player back to the start room if the current room vanished from the registry.
    fn recover_if_lost(&mut self) {
        if self.state.game_over || self.rooms.contains(&self.state.current_room) {
            return;
        }
        error!(
            "current room '{}' is not in the registry; returning player to '{}'",
            escape_log(&self.state.current_room),
            self.rules.start_room
        );
        self.state.current_room = self.rules.start_room.clone();
        self.say("The walls shift around you and you find yourself back where you started.");
        self.describe_current_room();
    }
}
