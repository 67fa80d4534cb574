use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority tier derived from a record's MOC count and hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    Three, // 3
    Five,  // 5
    Seven, // 7
}

impl Level {
    pub fn value(&self) -> u8 {
        match self {
            Level::Three => 3,
            Level::Five => 5,
            Level::Seven => 7,
        }
    }

    /// Convert numeric tier → enum
    pub fn from_value(v: u8) -> Option<Self> {
        match v {
            3 => Some(Level::Three),
            5 => Some(Level::Five),
            7 => Some(Level::Seven),
            _ => None,
        }
    }

    /// Helper: parse a level typed on the command line ("5", " 7 ")
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse::<u8>().ok().and_then(Level::from_value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.value()
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Level::from_value(v).ok_or_else(|| format!("invalid level {v}"))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
