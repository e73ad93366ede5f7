//! Game configuration and roster validation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 20;
pub const MIN_SPINS_PER_TURN: u32 = 1;
pub const MAX_SPINS_PER_TURN: u32 = 10;
pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 20;

/// A participant in the game. Score starts at zero and moves by one point
/// per resolved spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub score: i32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Immutable game settings fixed at session start: the roster, how many
/// consecutive spins each player takes per turn, and how many full rounds
/// the game lasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: SmallVec<[Player; 8]>,
    #[serde(default = "GameConfig::default_spins_per_turn")]
    pub spins_per_turn: u32,
    #[serde(default = "GameConfig::default_total_rounds")]
    pub total_rounds: u32,
}

impl GameConfig {
    const fn default_spins_per_turn() -> u32 {
        1
    }

    const fn default_total_rounds() -> u32 {
        2
    }

    /// Build a config from raw player names. Blank or whitespace-only names
    /// fall back to `Player N` (1-based), matching the setup wizard.
    #[must_use]
    pub fn with_player_names<I, S>(names: I, spins_per_turn: u32, total_rounds: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players = names
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Player::new(normalized_name(raw.as_ref(), index)))
            .collect();
        Self {
            players,
            spins_per_turn,
            total_rounds,
        }
    }

    /// Check every field against the documented bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the roster is too small or large, or when
    /// spins-per-turn or rounds fall outside their ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                got: self.players.len(),
            });
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.players.len(),
                max: MAX_PLAYERS,
            });
        }
        check_range(
            "spins_per_turn",
            self.spins_per_turn,
            MIN_SPINS_PER_TURN,
            MAX_SPINS_PER_TURN,
        )?;
        check_range("total_rounds", self.total_rounds, MIN_ROUNDS, MAX_ROUNDS)?;
        Ok(())
    }

    /// Spins in one full round: every player takes a complete turn.
    #[must_use]
    pub fn spins_per_round(&self) -> u32 {
        self.players.len() as u32 * self.spins_per_turn
    }

    /// Total spins in a complete game.
    #[must_use]
    pub fn total_spins(&self) -> u32 {
        self.spins_per_round() * self.total_rounds
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::RangeViolation {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn normalized_name(raw: &str, index: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        format!("Player {}", index + 1)
    } else {
        trimmed.to_string()
    }
}

/// Errors raised when game configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least {MIN_PLAYERS} players required (got {got})")]
    TooFewPlayers { got: usize },
    #[error("at most {max} players supported (got {got})")]
    TooManyPlayers { got: usize, max: usize },
    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("punishment catalog is empty")]
    EmptyCatalog,
}
