//! Leaderboard ranking and end-game summary.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::config::Player;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Roster index of the player.
    pub player: usize,
    pub name: String,
    pub score: i32,
}

/// Rank players by score, descending. The sort is stable, so equal scores
/// keep their roster order.
#[must_use]
pub fn rank_players(players: &[Player]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter()
        .enumerate()
        .map(|(player, entry)| Standing {
            player,
            name: entry.name.clone(),
            score: entry.score,
        })
        .collect();
    standings.sort_by_key(|standing| Reverse(standing.score));
    standings
}

/// A clear winner exists only when the top score strictly exceeds second
/// place. Equal top scores are a tie and nobody is announced.
#[must_use]
pub fn winner(standings: &[Standing]) -> Option<&Standing> {
    let top = standings.first()?;
    match standings.get(1) {
        Some(second) if second.score >= top.score => None,
        _ => Some(top),
    }
}

/// Complete summary of a finished game for display and sharing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub standings: Vec<Standing>,
    /// `None` means a tie.
    pub winner_name: Option<String>,
    pub total_spins: u32,
    pub completions: u32,
    pub ignores: u32,
}

impl GameSummary {
    #[must_use]
    pub fn from_players(players: &[Player], completions: u32, ignores: u32) -> Self {
        let standings = rank_players(players);
        let winner_name = winner(&standings).map(|standing| standing.name.clone());
        Self {
            standings,
            winner_name,
            total_spins: completions + ignores,
            completions,
            ignores,
        }
    }

    /// Shareable plain-text results block.
    #[must_use]
    pub fn share_text(&self) -> String {
        let mut lines = vec![String::from("Forfeit Wheel Results:")];
        match (&self.winner_name, self.standings.first()) {
            (Some(name), Some(top)) => {
                lines.push(format!(
                    "Game completed! Winner: {name} with {} points!",
                    top.score
                ));
            }
            _ => lines.push(String::from("Game completed! It's a tie!")),
        }
        for (position, standing) in self.standings.iter().enumerate() {
            lines.push(format!(
                "{}. {}: {}{}",
                position + 1,
                standing.name,
                if standing.score > 0 { "+" } else { "" },
                standing.score
            ));
        }
        lines.join("\n")
    }
}
