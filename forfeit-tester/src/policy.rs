//! Outcome policies driving simulated players.

use clap::ValueEnum;
use forfeit_game::SpinOutcome;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How a simulated player answers each punishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutcomePolicy {
    /// Always completes the forfeit (+1 every spin)
    Keen,
    /// Always refuses the forfeit (-1 every spin)
    Defiant,
    /// Flips a fair coin per spin
    Coin,
}

impl OutcomePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keen => "keen",
            Self::Defiant => "defiant",
            Self::Coin => "coin",
        }
    }

    /// Decide the outcome of one spin.
    pub fn decide<R: Rng>(self, rng: &mut R) -> SpinOutcome {
        match self {
            Self::Keen => SpinOutcome::Completed,
            Self::Defiant => SpinOutcome::Ignored,
            Self::Coin => {
                if rng.gen_bool(0.5) {
                    SpinOutcome::Completed
                } else {
                    SpinOutcome::Ignored
                }
            }
        }
    }
}

impl fmt::Display for OutcomePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keen" => Ok(Self::Keen),
            "defiant" => Ok(Self::Defiant),
            "coin" => Ok(Self::Coin),
            _ => Err(()),
        }
    }
}
