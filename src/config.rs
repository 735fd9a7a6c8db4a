use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::algorithms::{MinMaxBot, TieBreak};

/// Difficulty level from 1 (easy) to 5 (hard).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASY: Difficulty = Difficulty(1);
    pub const NORMAL: Difficulty = Difficulty(3);
    pub const HARD: Difficulty = Difficulty(5);

    pub fn new(level: u8) -> Self {
        Difficulty(level.clamp(Self::EASY.0, Self::HARD.0))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Piecewise linear: level 1 gives `easy`, 3 `normal`, 5 `hard`.
    pub fn interpolate(self, easy: f64, normal: f64, hard: f64) -> f64 {
        let level = self.0 as f64;
        if level <= 3.0 {
            easy + (normal - easy) * (level - 1.0) / 2.0
        } else {
            normal + (hard - normal) * (level - 3.0) / 2.0
        }
    }

    /// Plies the Connect Four CPU looks ahead below each of its own candidate drops.
    pub fn connect_four_depth(self) -> u32 {
        self.interpolate(2.0, 5.0, 7.0).round() as u32
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::NORMAL
    }
}

impl From<u8> for Difficulty {
    fn from(value: u8) -> Self {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(String);

impl Display for ParseDifficultyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown difficulty '{}', expected 1-5, easy, normal or hard", self.0)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::EASY),
            "normal" => Ok(Difficulty::NORMAL),
            "hard" => Ok(Difficulty::HARD),
            level => level
                .parse::<u8>()
                .map(Difficulty::new)
                .map_err(|_| ParseDifficultyError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    pub tie_break: TieBreak,
}

impl SearchConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        SearchConfig {
            difficulty,
            ..Default::default()
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Checkers ignores the difficulty, its depth follows the material left.
    pub fn checkers_bot(&self) -> MinMaxBot {
        MinMaxBot::adaptive().with_tie_break(self.tie_break)
    }

    /// The bot's depth counts the CPU's own drop on top of the look-ahead.
    pub fn connect_four_bot(&self) -> MinMaxBot {
        MinMaxBot::new(self.difficulty.connect_four_depth() + 1).with_tie_break(self.tie_break)
    }
}
