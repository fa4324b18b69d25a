//! # Labyrinth - a small text treasure hunt
//!
//! The player walks a fixed graph of rooms, collects and uses items, solves
//! riddles and tries to open the treasure chest. Everything runs in a single
//! read-eval-print loop over one in-memory game state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use labyrinth::game::{Session, StdConsole};
//!
//! let mut session = Session::with_defaults(StdConsole::new());
//! session.run();
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - rooms, player actions, puzzles, traps, events and the command loop
//! - [`config`] - TOML configuration and the [`Rules`](config::Rules) handed to a session
//! - [`logutil`] - logger setup and log-safe escaping of player input
//!
//! ## Determinism
//!
//! There is no system randomness. Traps and ambient events roll
//! [`game::pseudo_random`] seeded with the number of steps taken, so a given
//! sequence of commands always plays out the same way.

pub mod config;
pub mod game;
pub mod logutil;
