//! App Configuration
//!
//! Compile-time settings and the built-in default record.

use crate::models::{Game, GameCollections};

/// localStorage key holding the whole record
pub const STORAGE_KEY: &str = "games";

/// Console log level
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Lists start collapsed
pub const START_COLLAPSED: bool = true;

/// (name, url, emoji) of the seeded daily list
const DEFAULT_DAILY: &[(&str, &str, &str)] = &[
    ("NYT Wordle", "https://www.nytimes.com/games/wordle/index.html", "🎯"),
    ("Termo", "https://term.ooo/", "🔤"),
    ("Duotrigordle", "https://duotrigordle.com/", "🎲"),
    ("Spellcheck", "https://spellcheckgame.com/", "✍️"),
    ("Futbol11", "https://futbol-11.com/", "⚽"),
    ("Globle", "https://globle-game.com/", "🌍"),
    ("Worldle", "https://worldle.teuteuf.fr/", "🗺️"),
    ("Flagle", "https://www.flagle.io/", "🏳️"),
    ("Flagle Game", "https://flagle-game.com/", "🎌"),
    ("NYT Connections", "https://www.nytimes.com/games/connections", "🔗"),
    ("Gamedle", "https://www.gamedle.wtf/#", "🎮"),
];

/// Record used on first run and whenever the stored one is unreadable
pub fn default_collections() -> GameCollections {
    GameCollections {
        daily: DEFAULT_DAILY
            .iter()
            .map(|(name, url, emoji)| Game::new(*name, *url, *emoji))
            .collect(),
        other: Vec::new(),
    }
}
