//! Turn-tracking state and spin outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::GameConfig;

/// How the shown punishment was resolved by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinOutcome {
    Completed,
    Ignored,
}

impl SpinOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ignored => "ignored",
        }
    }

    /// Score adjustment applied to the acting player.
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Completed => 1,
            Self::Ignored => -1,
        }
    }
}

impl fmt::Display for SpinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinOutcome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "ignored" => Ok(Self::Ignored),
            _ => Err(()),
        }
    }
}

/// Immutable snapshot of turn/round progress. Successor states are produced
/// exclusively by [`crate::turn::resolve_spin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnState {
    /// Index into the roster of the player whose turn it is. After
    /// completion this keeps the final player's identity for reporting.
    pub current_player: usize,
    /// Spins already taken by the current player this turn, in
    /// `0..spins_per_turn`.
    pub spins_this_turn: u32,
    /// Total spins resolved since game start.
    pub total_spins: u32,
    /// Terminal flag. Once set, no further transitions are accepted.
    pub completed: bool,
}

impl TurnState {
    /// Fresh state at game start: player 0, nothing spun.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_player: 0,
            spins_this_turn: 0,
            total_spins: 0,
            completed: false,
        }
    }

    /// Full rounds already played out.
    #[must_use]
    pub fn completed_rounds(&self, config: &GameConfig) -> u32 {
        let per_round = config.spins_per_round();
        if per_round == 0 {
            return 0;
        }
        self.total_spins / per_round
    }

    /// 1-based round number for display, clamped to the configured total
    /// so the terminal state still reads as the last round.
    #[must_use]
    pub fn current_round(&self, config: &GameConfig) -> u32 {
        (self.completed_rounds(config) + 1).min(config.total_rounds.max(1))
    }

    /// Spins remaining for the current player this turn.
    #[must_use]
    pub const fn spins_remaining(&self, config: &GameConfig) -> u32 {
        config.spins_per_turn.saturating_sub(self.spins_this_turn)
    }

    /// Progress accounting invariant. Holds for every non-terminal state:
    /// the spin total decomposes into whole rounds, whole turns earlier in
    /// the current round, and the partial current turn.
    #[must_use]
    pub fn accounting_holds(&self, config: &GameConfig) -> bool {
        if self.completed {
            return true;
        }
        let whole_rounds = self.completed_rounds(config) * config.spins_per_round();
        let earlier_turns = self.current_player as u32 * config.spins_per_turn;
        self.total_spins == whole_rounds + earlier_turns + self.spins_this_turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn config() -> GameConfig {
        GameConfig::with_player_names(["a", "b", "c"], 2, 2)
    }

    #[test]
    fn outcome_round_trips_as_str() {
        for outcome in [SpinOutcome::Completed, SpinOutcome::Ignored] {
            assert_eq!(outcome.as_str().parse(), Ok(outcome));
        }
        assert_eq!("skipped".parse::<SpinOutcome>(), Err(()));
    }

    #[test]
    fn score_deltas_are_symmetric() {
        assert_eq!(SpinOutcome::Completed.score_delta(), 1);
        assert_eq!(SpinOutcome::Ignored.score_delta(), -1);
    }

    #[test]
    fn fresh_state_satisfies_accounting() {
        let state = TurnState::new();
        assert!(state.accounting_holds(&config()));
        assert_eq!(state.completed_rounds(&config()), 0);
        assert_eq!(state.current_round(&config()), 1);
    }

    #[test]
    fn mid_game_accounting_decomposes() {
        // Round 2, player 1 (second), one spin into their turn:
        // 6 (round one) + 2 (player 0's turn) + 1 = 9.
        let state = TurnState {
            current_player: 1,
            spins_this_turn: 1,
            total_spins: 9,
            completed: false,
        };
        assert!(state.accounting_holds(&config()));
        assert_eq!(state.completed_rounds(&config()), 1);
        assert_eq!(state.current_round(&config()), 2);
        assert_eq!(state.spins_remaining(&config()), 1);
    }
}
