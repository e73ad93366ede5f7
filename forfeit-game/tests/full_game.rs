use forfeit_game::{
    GameConfig, GameSession, PunishmentCatalog, SpinOutcome, TurnError, TurnState, rank_players,
    resolve_spin, winner,
};

fn make_session(players: usize, spins_per_turn: u32, rounds: u32, seed: u64) -> GameSession {
    let config = GameConfig::with_player_names(
        (1..=players).map(|i| format!("Player {i}")),
        spins_per_turn,
        rounds,
    );
    GameSession::new(config, PunishmentCatalog::builtin(), seed).unwrap()
}

fn play_to_completion(session: &mut GameSession, mut decide: impl FnMut(u32) -> SpinOutcome) {
    let mut spin_number = 0;
    while !session.is_complete() {
        session.spin().unwrap();
        session.resolve(decide(spin_number)).unwrap();
        spin_number += 1;
    }
}

#[test]
fn two_player_single_round_completes_after_two_spins() {
    let mut session = make_session(2, 1, 1, 99);
    session.spin().unwrap();
    session.resolve(SpinOutcome::Completed).unwrap();
    assert!(!session.is_complete());
    session.spin().unwrap();
    session.resolve(SpinOutcome::Ignored).unwrap();
    assert!(session.is_complete());

    let summary = session.summary();
    assert_eq!(summary.winner_name.as_deref(), Some("Player 1"));
    assert_eq!(summary.standings[0].score, 1);
    assert_eq!(summary.standings[1].score, -1);
}

#[test]
fn two_player_single_round_equal_scores_tie() {
    let mut session = make_session(2, 1, 1, 99);
    play_to_completion(&mut session, |_| SpinOutcome::Completed);
    let summary = session.summary();
    assert_eq!(summary.winner_name, None);
    assert!(summary.standings.iter().all(|s| s.score == 1));
}

#[test]
fn three_player_two_spins_two_rounds_needs_twelve_resolutions() {
    let mut session = make_session(3, 2, 2, 7);
    for spin in 0..12u32 {
        assert!(!session.is_complete(), "completed early at spin {spin}");
        session.spin().unwrap();
        session.resolve(SpinOutcome::Completed).unwrap();
        if spin == 10 {
            assert!(!session.is_complete(), "11th resolution must not complete");
        }
    }
    assert!(session.is_complete());
    assert_eq!(session.state().total_spins, 12);
}

#[test]
fn completion_count_holds_across_configs() {
    for (players, spins, rounds) in [(2, 1, 1), (2, 5, 3), (4, 2, 2), (7, 1, 3), (3, 3, 5)] {
        let mut session = make_session(players, spins, rounds, 4242);
        let expected = session.config().total_spins();
        let mut resolutions = 0;
        while !session.is_complete() {
            session.spin().unwrap();
            session.resolve(SpinOutcome::Completed).unwrap();
            resolutions += 1;
        }
        assert_eq!(
            resolutions, expected,
            "{players}p x{spins} spins x{rounds} rounds"
        );
    }
}

#[test]
fn misaligned_rounds_still_terminate_on_exact_count() {
    // 5 players, 1 spin, 1 round: termination lands on player 4, never back
    // on player 0. The rotation-coincidence check of the original UI would
    // have kept playing; the exact-count rule must not.
    let mut session = make_session(5, 1, 1, 0);
    play_to_completion(&mut session, |_| SpinOutcome::Ignored);
    assert_eq!(session.state().total_spins, 5);
    assert_eq!(session.state().current_player, 4);
}

#[test]
fn turn_order_never_skips_a_player() {
    let mut session = make_session(4, 2, 3, 11);
    let mut seen_players = Vec::new();
    while !session.is_complete() {
        seen_players.push(session.state().current_player);
        session.spin().unwrap();
        session.resolve(SpinOutcome::Completed).unwrap();
    }
    // Each player takes spins_per_turn consecutive spins, then the next
    // index follows in cyclic order.
    for chunk in seen_players.chunks(2) {
        assert!(chunk.iter().all(|p| *p == chunk[0]));
    }
    let turn_owners: Vec<usize> = seen_players.chunks(2).map(|chunk| chunk[0]).collect();
    for pair in turn_owners.windows(2) {
        assert_eq!(pair[1], (pair[0] + 1) % 4);
    }
}

#[test]
fn scores_conserve_outcome_totals() {
    let mut session = make_session(3, 2, 2, 2026);
    // Alternate outcomes: even spins complete, odd spins ignore.
    play_to_completion(&mut session, |spin| {
        if spin % 2 == 0 {
            SpinOutcome::Completed
        } else {
            SpinOutcome::Ignored
        }
    });
    let summary = session.summary();
    assert_eq!(summary.completions, 6);
    assert_eq!(summary.ignores, 6);
    let total: i32 = session.players().iter().map(|p| p.score).sum();
    assert_eq!(total, summary.completions as i32 - summary.ignores as i32);
}

#[test]
fn terminal_session_rejects_everything_and_keeps_state() {
    let mut session = make_session(2, 1, 1, 5);
    play_to_completion(&mut session, |_| SpinOutcome::Completed);
    let state_before = *session.state();
    let scores_before: Vec<i32> = session.players().iter().map(|p| p.score).collect();

    assert_eq!(session.spin().unwrap_err(), TurnError::GameComplete);
    assert_eq!(
        session.resolve(SpinOutcome::Ignored).unwrap_err(),
        TurnError::NoSpinPending
    );

    assert_eq!(*session.state(), state_before);
    let scores_after: Vec<i32> = session.players().iter().map(|p| p.score).collect();
    assert_eq!(scores_after, scores_before);
}

#[test]
fn bare_transition_function_matches_session_progression() {
    let config = GameConfig::with_player_names(["a", "b", "c"], 2, 1);
    let mut state = TurnState::new();
    let mut session =
        GameSession::new(config.clone(), PunishmentCatalog::builtin(), 31337).unwrap();
    while !state.completed {
        session.spin().unwrap();
        let session_res = session.resolve(SpinOutcome::Completed).unwrap();
        let bare_res = resolve_spin(&state, &config, SpinOutcome::Completed).unwrap();
        assert_eq!(bare_res.state, session_res.state);
        assert_eq!(bare_res.player, session_res.player);
        state = bare_res.state;
    }
    assert!(session.is_complete());
}

#[test]
fn leaderboard_of_finished_game_is_stable_and_ranked() {
    let mut session = make_session(4, 1, 2, 123);
    // Player 0 completes everything, player 2 ignores everything, players 1
    // and 3 split evenly and tie.
    play_to_completion(&mut session, |spin| match spin % 4 {
        0 => SpinOutcome::Completed,
        2 => SpinOutcome::Ignored,
        _ => {
            if spin / 4 == 0 {
                SpinOutcome::Completed
            } else {
                SpinOutcome::Ignored
            }
        }
    });
    let standings = rank_players(session.players());
    assert_eq!(standings[0].player, 0);
    assert_eq!(standings[0].score, 2);
    // Tied middle players keep roster order.
    assert_eq!(standings[1].player, 1);
    assert_eq!(standings[2].player, 3);
    assert_eq!(standings[3].player, 2);
    assert_eq!(winner(&standings).map(|s| s.player), Some(0));
}
