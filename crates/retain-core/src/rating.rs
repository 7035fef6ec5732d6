use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Five-point review grade reported by the caller after presenting an item.
///
/// Wire form is the integer 1–5; `TryFrom<u8>` validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Did not recognize the item at all.
    Unknown = 1,
    /// Barely recognized it.
    Recognized = 2,
    /// Somewhat familiar.
    Familiar = 3,
    /// Knew it well.
    Confident = 4,
    /// Fully mastered.
    Mastered = 5,
}

impl Rating {
    /// Base familiarity delta applied before the learning-rate multiplier.
    ///
    /// Only `Unknown` is a lapse; every other grade reinforces.
    pub fn base_delta(self) -> f64 {
        match self {
            Rating::Unknown => -20.0,
            Rating::Recognized => 5.0,
            Rating::Familiar => 15.0,
            Rating::Confident => 25.0,
            Rating::Mastered => 35.0,
        }
    }

    /// The 1–5 wire value.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rating {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Unknown),
            2 => Ok(Rating::Recognized),
            3 => Ok(Rating::Familiar),
            4 => Ok(Rating::Confident),
            5 => Ok(Rating::Mastered),
            other => Err(EngineError::invalid(format!(
                "rating {other} outside 1..=5"
            ))),
        }
    }
}
