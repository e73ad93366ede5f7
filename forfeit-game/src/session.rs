//! High-level game session binding config, turn state, roster scores, and a
//! seeded wheel RNG.
//!
//! The session is the one mutable owner of game state. Views hold the latest
//! snapshot and re-render on change; every mutation flows through `spin` /
//! `resolve`. The punishment index is picked at spin time, so animation
//! timing can never change the computed outcome.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use smallvec::SmallVec;

use crate::catalog::{Punishment, PunishmentCatalog};
use crate::config::{ConfigError, GameConfig};
use crate::score::GameSummary;
use crate::state::{SpinOutcome, TurnState};
use crate::turn::{self, SpinResolution, TurnError};

type Roster = SmallVec<[crate::config::Player; 8]>;

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    catalog: PunishmentCatalog,
    players: Roster,
    state: TurnState,
    rng: ChaCha20Rng,
    seed: u64,
    /// Catalog index of the spin awaiting resolution, if any.
    pending: Option<usize>,
    completions: u32,
    ignores: u32,
}

impl GameSession {
    /// Start a session from a validated config, a non-empty catalog, and a
    /// wheel seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the config violates its bounds or the
    /// catalog is empty.
    pub fn new(
        config: GameConfig,
        catalog: PunishmentCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut players = config.players.clone();
        for player in &mut players {
            player.score = 0;
        }
        Ok(Self {
            config,
            catalog,
            players,
            state: TurnState::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            pending: None,
            completions: 0,
            ignores: 0,
        })
    }

    /// Spin the wheel: choose the punishment for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameComplete`] after the final spin and
    /// [`TurnError::SpinInFlight`] while a previous spin awaits resolution;
    /// overlapping spins are rejected rather than queued.
    pub fn spin(&mut self) -> Result<&Punishment, TurnError> {
        if self.state.completed {
            return Err(TurnError::GameComplete);
        }
        if self.pending.is_some() {
            return Err(TurnError::SpinInFlight);
        }
        // Catalog verified non-empty at construction.
        let index = self.rng.gen_range(0..self.catalog.len());
        self.pending = Some(index);
        debug!(
            "spin: player {} round {} punishment {}",
            self.state.current_player,
            self.state.current_round(&self.config),
            index
        );
        Ok(&self.catalog.punishments[index])
    }

    /// Resolve the pending spin with the player's outcome, applying the
    /// score delta and advancing the turn bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoSpinPending`] when no spin is awaiting
    /// resolution. State is unchanged on error.
    pub fn resolve(&mut self, outcome: SpinOutcome) -> Result<SpinResolution, TurnError> {
        if self.pending.is_none() {
            return Err(TurnError::NoSpinPending);
        }
        let resolution = turn::resolve_spin(&self.state, &self.config, outcome)?;
        self.players[resolution.player].score += resolution.delta;
        match outcome {
            SpinOutcome::Completed => self.completions += 1,
            SpinOutcome::Ignored => self.ignores += 1,
        }
        self.state = resolution.state;
        self.pending = None;
        if self.state.completed {
            debug!("game complete after {} spins", self.state.total_spins);
        }
        Ok(resolution)
    }

    /// New-game semantics: zero scores, fresh turn state, same config and
    /// catalog, wheel re-seeded from the session seed.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
        self.state = TurnState::new();
        self.rng = ChaCha20Rng::seed_from_u64(self.seed);
        self.pending = None;
        self.completions = 0;
        self.ignores = 0;
    }

    #[must_use]
    pub const fn state(&self) -> &TurnState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &[crate::config::Player] {
        &self.players
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.completed
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The punishment currently awaiting resolution, if any.
    #[must_use]
    pub fn pending_punishment(&self) -> Option<&Punishment> {
        self.pending.and_then(|index| self.catalog.get(index))
    }

    /// Name of the player whose turn it is (or was, once completed).
    #[must_use]
    pub fn current_player_name(&self) -> &str {
        &self.players[self.state.current_player].name
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_players(&self.players, self.completions, self.ignores)
    }
}
