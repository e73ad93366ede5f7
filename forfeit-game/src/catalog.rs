//! Punishment reference data.
//!
//! Punishments are read-only catalog entries; the engine only ever deals in
//! indices into the catalog. The built-in set ships in-code so the game is
//! playable without any asset loading; platform layers may substitute their
//! own catalog via JSON.

use serde::{Deserialize, Serialize};

/// A single forfeit task shown to the player after a spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punishment {
    pub id: u32,
    pub text: String,
    pub emoji: String,
    /// Wheel segment color as `#RRGGBB`; purely presentational.
    pub color: String,
}

impl Punishment {
    #[must_use]
    pub fn new(id: u32, text: &str, emoji: &str, color: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
        }
    }
}

/// Container for all punishment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PunishmentCatalog {
    pub punishments: Vec<Punishment>,
}

impl PunishmentCatalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            punishments: Vec::new(),
        }
    }

    /// Load catalog data from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-built entries.
    #[must_use]
    pub fn from_punishments(punishments: Vec<Punishment>) -> Self {
        Self { punishments }
    }

    /// The stock set of fifteen party forfeits.
    #[must_use]
    pub fn builtin() -> Self {
        let punishments = vec![
            Punishment::new(
                1,
                "Do 20 jumping jacks while singing your favorite song",
                "\u{1F3C3}\u{200D}\u{2642}\u{FE0F}",
                "#FF6B6B",
            ),
            Punishment::new(
                2,
                "Tell a joke in a funny accent for 2 minutes",
                "\u{1F3AD}",
                "#4ECDC4",
            ),
            Punishment::new(
                3,
                "Dance like no one's watching for 30 seconds",
                "\u{1F483}",
                "#45B7D1",
            ),
            Punishment::new(4, "Do your best celebrity impression", "\u{2B50}", "#96CEB4"),
            Punishment::new(
                5,
                "Speak only in questions for the next 3 rounds",
                "\u{2753}",
                "#FECA57",
            ),
            Punishment::new(6, "Act like a chicken for 1 minute", "\u{1F414}", "#FF9FF3"),
            Punishment::new(
                7,
                "Tell everyone your most embarrassing moment",
                "\u{1F633}",
                "#54A0FF",
            ),
            Punishment::new(
                8,
                "Do 10 pushups while complimenting everyone",
                "\u{1F4AA}",
                "#5F27CD",
            ),
            Punishment::new(
                9,
                "Sing 'Happy Birthday' in opera style",
                "\u{1F3B5}",
                "#00D2D3",
            ),
            Punishment::new(
                10,
                "Act out your favorite movie scene silently",
                "\u{1F3AC}",
                "#FF6348",
            ),
            Punishment::new(
                11,
                "Do a fashion show walk around the room",
                "\u{1F457}",
                "#2ED573",
            ),
            Punishment::new(
                12,
                "Tell a bedtime story to an imaginary child",
                "\u{1F4DA}",
                "#FFA502",
            ),
            Punishment::new(
                13,
                "Do your best robot dance for 45 seconds",
                "\u{1F916}",
                "#3742FA",
            ),
            Punishment::new(
                14,
                "Compliment everyone using only food words",
                "\u{1F34E}",
                "#2F3542",
            ),
            Punishment::new(
                15,
                "Act like you're underwater for the next 2 minutes",
                "\u{1F30A}",
                "#70A1FF",
            ),
        ];
        Self { punishments }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.punishments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.punishments.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Punishment> {
        self.punishments.get(index)
    }
}
