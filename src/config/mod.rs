//! # Configuration
//!
//! Labyrinth reads an optional TOML file. Every section has defaults, so an empty
//! or partial file is valid and a missing `config.toml` simply means "defaults".
//!
//! ```toml
//! [game]
//! start_room = "entrance"
//! rooms_file = "rooms.json"   # optional, replaces the built-in labyrinth
//!
//! [events]
//! enabled = true
//! probability = 10            # one roll in `probability` may fire an event
//! trigger_value = 0
//!
//! [trap]
//! damage_roll_modulo = 10
//! death_threshold = 3         # damage rolls below this are fatal
//!
//! [logging]
//! level = "warn"
//! file = "labyrinth.log"      # optional
//! ```
//!
//! Only [`Rules`] reaches the game session; the rest is startup plumbing.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, also used by `init`.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub events: EventConfig,
    #[serde(default)]
    pub trap: TrapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_start_room")]
    pub start_room: String,
    /// JSON room table replacing the built-in labyrinth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms_file: Option<String>,
}

fn default_start_room() -> String {
    "entrance".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: default_start_room(),
            rooms_file: None,
        }
    }
}

/// Ambient random events rolled after every successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_event_probability")]
    pub probability: i64,
    #[serde(default)]
    pub trigger_value: i64,
}

fn default_true() -> bool {
    true
}

fn default_event_probability() -> i64 {
    10
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probability: default_event_probability(),
            trigger_value: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapConfig {
    #[serde(default = "default_damage_roll_modulo")]
    pub damage_roll_modulo: i64,
    #[serde(default = "default_death_threshold")]
    pub death_threshold: i64,
}

fn default_damage_roll_modulo() -> i64 {
    10
}

fn default_death_threshold() -> i64 {
    3
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            damage_roll_modulo: default_damage_roll_modulo(),
            death_threshold: default_death_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Game rules injected into a session at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub start_room: String,
    pub events: EventConfig,
    pub trap: TrapConfig,
}

impl Default for Rules {
    fn default() -> Self {
        Config::default().rules()
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow!("Failed to load config file {}: {}", path.display(), e))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Only the implicit default path may be absent; an explicitly named file must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            return Ok(Config::default());
        }
        Self::load(path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default configuration to `path`.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.start_room.trim().is_empty() {
            return Err(anyhow!("game.start_room must not be empty"));
        }
        if self.events.probability <= 0 {
            return Err(anyhow!(
                "events.probability must be positive, got {}",
                self.events.probability
            ));
        }
        if !(0..self.events.probability).contains(&self.events.trigger_value) {
            return Err(anyhow!(
                "events.trigger_value must be in [0, {}), got {}",
                self.events.probability,
                self.events.trigger_value
            ));
        }
        if self.trap.damage_roll_modulo <= 0 {
            return Err(anyhow!(
                "trap.damage_roll_modulo must be positive, got {}",
                self.trap.damage_roll_modulo
            ));
        }
        if !(0..=self.trap.damage_roll_modulo).contains(&self.trap.death_threshold) {
            return Err(anyhow!(
                "trap.death_threshold must be in [0, {}], got {}",
                self.trap.damage_roll_modulo,
                self.trap.death_threshold
            ));
        }
        Ok(())
    }

    /// The part of the configuration a game session consumes.
    pub fn rules(&self) -> Rules {
        Rules {
            start_room: self.game.start_room.clone(),
            events: self.events.clone(),
            trap: self.trap.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.start_room, "entrance");
        assert_eq!(config.events.probability, 10);
        assert_eq!(config.events.trigger_value, 0);
        assert!(config.events.enabled);
        assert_eq!(config.trap.damage_roll_modulo, 10);
        assert_eq!(config.trap.death_threshold, 3);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.rules(), Rules::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::from_toml_str(
            r#"
            [events]
            probability = 4

            [game]
            rooms_file = "custom.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.events.probability, 4);
        assert_eq!(config.events.trigger_value, 0);
        assert_eq!(config.game.start_room, "entrance");
        assert_eq!(config.game.rooms_file.as_deref(), Some("custom.json"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            "[events]\nprobability = 0",
            "[events]\nprobability = 5\ntrigger_value = 5",
            "[events]\ntrigger_value = -1",
            "[trap]\ndamage_roll_modulo = 0",
            "[trap]\ndeath_threshold = 11",
            "[game]\nstart_room = \"  \"",
        ];
        for case in cases {
            assert!(
                Config::from_toml_str(case).is_err(),
                "expected '{}' to be rejected",
                case
            );
        }
    }

    #[test]
    fn default_serializes_and_parses_back() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(serialized.contains("[events]"));
        let parsed = Config::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed.rules(), Config::default().rules());
    }
}
