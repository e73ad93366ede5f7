//! The single turn/round transition function.
//!
//! One call resolves one spin: the acting player's score moves by the
//! outcome delta, then the turn either continues, passes to the next player,
//! or the game completes. Completion is authoritative on exact spin count
//! (`players * spins_per_turn * total_rounds`), so termination never depends
//! on the rotation happening to land back on player 0.

use thiserror::Error;

use crate::config::GameConfig;
use crate::state::{SpinOutcome, TurnState};

/// Result of resolving one spin: the successor state plus the score delta
/// applied to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResolution {
    pub state: TurnState,
    /// Roster index of the player who took the spin.
    pub player: usize,
    /// Score adjustment for that player (+1 completed, -1 ignored).
    pub delta: i32,
}

/// Errors raised when a transition is requested in an invalid state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("game already completed; no further spins accepted")]
    GameComplete,
    #[error("a spin is already awaiting resolution")]
    SpinInFlight,
    #[error("no spin awaiting resolution")]
    NoSpinPending,
}

/// Resolve one spin against the current state.
///
/// The caller applies `delta` to the roster entry at `player`; the function
/// itself is pure arithmetic over the turn bookkeeping.
///
/// # Errors
///
/// Returns [`TurnError::GameComplete`] if the state is terminal. The input
/// state is untouched; the caller must not retry.
pub fn resolve_spin(
    state: &TurnState,
    config: &GameConfig,
    outcome: SpinOutcome,
) -> Result<SpinResolution, TurnError> {
    if state.completed {
        return Err(TurnError::GameComplete);
    }
    debug_assert!(state.accounting_holds(config));

    let player = state.current_player;
    let total_spins = state.total_spins + 1;

    let next = if total_spins >= config.total_spins() {
        // The completing spin always falls on the last spin of a turn, so
        // the turn counter resets while the final player stays identified.
        TurnState {
            current_player: player,
            spins_this_turn: 0,
            total_spins,
            completed: true,
        }
    } else if state.spins_this_turn + 1 < config.spins_per_turn {
        // Same player keeps spinning.
        TurnState {
            spins_this_turn: state.spins_this_turn + 1,
            total_spins,
            ..*state
        }
    } else {
        // Turn passes in fixed round-robin order.
        TurnState {
            current_player: (player + 1) % config.players.len(),
            spins_this_turn: 0,
            total_spins,
            completed: false,
        }
    };

    debug_assert!(next.accounting_holds(config));
    Ok(SpinResolution {
        state: next,
        player,
        delta: outcome.score_delta(),
    })
}
