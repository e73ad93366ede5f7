//! Whole-game simulation driving `GameSession` to completion and checking
//! the engine's contract along the way.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

use forfeit_game::{GameConfig, GameSession, GameSummary, PunishmentCatalog, TurnError};
use log::info;

use crate::policy::OutcomePolicy;
use crate::seeds::SeedInfo;

/// Domain separation between the wheel RNG (inside the session) and the
/// outcome-decision RNG driving the simulated players.
const OUTCOME_RNG_SALT: u64 = 0x666F_7266_6569_7421;

#[derive(Debug, Clone)]
pub struct SimulationSpec {
    pub config: GameConfig,
    pub policy: OutcomePolicy,
    pub iterations: usize,
    pub verbose: bool,
}

/// Aggregated outcome of running one scenario (config x policy x seed) for a
/// number of iterations.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed_label: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    pub average_duration: Duration,
    /// Summary of the final iteration's finished game.
    pub last_summary: Option<GameSummary>,
}

#[must_use]
pub fn scenario_name(config: &GameConfig, policy: OutcomePolicy) -> String {
    format!(
        "{}p x {} spins x {} rounds [{}]",
        config.players.len(),
        config.spins_per_turn,
        config.total_rounds,
        policy
    )
}

/// Run one scenario to completion `iterations` times, verifying the engine
/// contract on every game.
#[must_use]
pub fn run_scenario(spec: &SimulationSpec, seed: &SeedInfo) -> ScenarioResult {
    let mut failures = Vec::new();
    let mut successful = 0;
    let mut total_elapsed = Duration::ZERO;
    let mut last_summary = None;

    for iteration in 0..spec.iterations {
        let game_seed = seed.seed.wrapping_add(iteration as u64);
        let start = Instant::now();
        match run_single_game(spec, game_seed) {
            Ok(summary) => {
                if spec.verbose {
                    info!(
                        "seed {} iteration {iteration}: {}",
                        seed.label(),
                        summary
                            .winner_name
                            .as_deref()
                            .unwrap_or("tie")
                    );
                }
                last_summary = Some(summary);
                successful += 1;
            }
            Err(violation) => failures.push(format!("iteration {iteration}: {violation}")),
        }
        total_elapsed += start.elapsed();
    }

    let average_duration = if spec.iterations > 0 {
        total_elapsed / spec.iterations as u32
    } else {
        Duration::ZERO
    };

    ScenarioResult {
        scenario_name: scenario_name(&spec.config, spec.policy),
        seed_label: seed.label(),
        passed: failures.is_empty(),
        iterations_run: spec.iterations,
        successful_iterations: successful,
        failures,
        average_duration,
        last_summary,
    }
}

/// Play one full game, checking the contract; returns the end-game summary
/// or a description of the first violation.
fn run_single_game(spec: &SimulationSpec, game_seed: u64) -> Result<GameSummary, String> {
    let mut session = GameSession::new(
        spec.config.clone(),
        PunishmentCatalog::builtin(),
        game_seed,
    )
    .map_err(|e| format!("session rejected config: {e}"))?;
    let mut outcome_rng = ChaCha20Rng::seed_from_u64(game_seed ^ OUTCOME_RNG_SALT);

    let expected_spins = spec.config.total_spins();
    let player_count = spec.config.players.len();
    let mut resolutions = 0u32;
    let mut completions = 0i32;
    let mut ignores = 0i32;
    let mut expected_player = 0usize;
    let mut spins_into_turn = 0u32;

    while !session.is_complete() {
        if resolutions > expected_spins {
            return Err(format!(
                "game still open after {resolutions} spins (expected {expected_spins})"
            ));
        }
        let actual_player = session.state().current_player;
        if actual_player != expected_player {
            return Err(format!(
                "round-robin violated at spin {resolutions}: player {actual_player}, expected {expected_player}"
            ));
        }

        session.spin().map_err(|e| format!("spin failed: {e}"))?;
        let outcome = spec.policy.decide(&mut outcome_rng);
        let resolution = session
            .resolve(outcome)
            .map_err(|e| format!("resolve failed: {e}"))?;
        if resolution.player != actual_player {
            return Err(format!(
                "delta applied to player {} instead of {actual_player}",
                resolution.player
            ));
        }

        if resolution.delta > 0 {
            completions += 1;
        } else {
            ignores += 1;
        }
        resolutions += 1;
        spins_into_turn += 1;
        if spins_into_turn == spec.config.spins_per_turn {
            spins_into_turn = 0;
            expected_player = (expected_player + 1) % player_count;
        }
    }

    if resolutions != expected_spins {
        return Err(format!(
            "completed after {resolutions} spins, expected exactly {expected_spins}"
        ));
    }

    let score_sum: i32 = session.players().iter().map(|p| p.score).sum();
    if score_sum != completions - ignores {
        return Err(format!(
            "score conservation broken: sum {score_sum}, completions {completions}, ignores {ignores}"
        ));
    }

    match session.spin() {
        Err(TurnError::GameComplete) => {}
        other => {
            return Err(format!(
                "terminal state accepted a spin: {other:?}"
            ));
        }
    }

    Ok(session.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::SeedInfo;

    fn spec(players: usize, spins: u32, rounds: u32, policy: OutcomePolicy) -> SimulationSpec {
        SimulationSpec {
            config: GameConfig::with_player_names(
                (1..=players).map(|i| format!("P{i}")),
                spins,
                rounds,
            ),
            policy,
            iterations: 5,
            verbose: false,
        }
    }

    #[test]
    fn keen_policy_scenario_passes() {
        let result = run_scenario(&spec(3, 2, 2, OutcomePolicy::Keen), &SeedInfo::from_numeric(7));
        assert!(result.passed, "failures: {:?}", result.failures);
        assert_eq!(result.successful_iterations, 5);
        let summary = result.last_summary.unwrap();
        assert_eq!(summary.total_spins, 12);
        assert_eq!(summary.ignores, 0);
        // Everyone completes everything, so the game is a tie.
        assert!(summary.winner_name.is_none());
    }

    #[test]
    fn coin_policy_scenario_passes_across_seeds() {
        for seed in [1u64, 99, 0xFEED] {
            let result = run_scenario(
                &spec(4, 1, 3, OutcomePolicy::Coin),
                &SeedInfo::from_numeric(seed),
            );
            assert!(result.passed, "seed {seed} failures: {:?}", result.failures);
        }
    }

    #[test]
    fn defiant_policy_scores_stay_negative() {
        let result = run_scenario(
            &spec(2, 2, 1, OutcomePolicy::Defiant),
            &SeedInfo::from_numeric(3),
        );
        assert!(result.passed);
        let summary = result.last_summary.unwrap();
        assert_eq!(summary.completions, 0);
        assert!(summary.standings.iter().all(|s| s.score < 0));
    }

    #[test]
    fn scenario_name_is_descriptive() {
        let spec = spec(3, 2, 2, OutcomePolicy::Coin);
        assert_eq!(
            scenario_name(&spec.config, spec.policy),
            "3p x 2 spins x 2 rounds [coin]"
        );
    }
}
