//! Forfeit Game Engine
//!
//! Platform-agnostic core logic for the Forfeit wheel party game: a spinning
//! wheel assigns a forfeit to the current player, points are tallied over
//! configurable rounds, and the leaderboard names a winner. This crate owns
//! the turn/round arithmetic, punishment catalog, uniform wheel selection,
//! and scoring; rendering and animation are view concerns layered on top.

pub mod catalog;
pub mod config;
pub mod score;
pub mod seed;
pub mod session;
pub mod state;
pub mod turn;
pub mod wheel;

// Re-export commonly used types
pub use catalog::{Punishment, PunishmentCatalog};
pub use config::{
    ConfigError, GameConfig, MAX_PLAYERS, MAX_ROUNDS, MAX_SPINS_PER_TURN, MIN_PLAYERS, MIN_ROUNDS,
    MIN_SPINS_PER_TURN, Player,
};
pub use score::{GameSummary, Standing, rank_players, winner};
pub use seed::{decode_to_seed, encode_friendly, generate_code_from_entropy};
pub use session::GameSession;
pub use state::{SpinOutcome, TurnState};
pub use turn::{SpinResolution, TurnError, resolve_spin};
pub use wheel::{index_for_angle, pick_index, pick_punishment, rotation_for_index, segment_angle};

/// Trait for abstracting where the punishment catalog comes from.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the punishment catalog from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or parsed.
    fn load_catalog(&self) -> Result<PunishmentCatalog, Self::Error>;
}

/// The in-code stock catalog; always available, never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    type Error = std::convert::Infallible;

    fn load_catalog(&self) -> Result<PunishmentCatalog, Self::Error> {
        Ok(PunishmentCatalog::builtin())
    }
}

/// Convenience constructor: start a session with a catalog source.
///
/// # Errors
///
/// Returns the source's error if loading fails, or a boxed `ConfigError`
/// when the config or catalog is invalid.
pub fn start_session<C: CatalogSource>(
    source: &C,
    config: GameConfig,
    seed: u64,
) -> Result<GameSession, Box<dyn std::error::Error + Send + Sync>> {
    let catalog = source.load_catalog()?;
    Ok(GameSession::new(config, catalog, seed)?)
}
