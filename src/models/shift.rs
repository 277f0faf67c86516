use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Work shift. `First` always sorts before `Second` inside a day,
/// whatever the hour numbers are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    First,
    Second,
}

impl Shift {
    pub fn number(&self) -> u8 {
        match self {
            Shift::First => 1,
            Shift::Second => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Shift::First),
            2 => Some(Shift::Second),
            _ => None,
        }
    }

    /// Helper: parse shift from CLI input ("1", "2", "t1", "shift2", ...)
    pub fn parse(input: &str) -> AppResult<Self> {
        let s = input.trim().to_lowercase();
        let digits = s.trim_start_matches("shift").trim_start_matches('t');

        digits
            .parse::<u8>()
            .ok()
            .and_then(Shift::from_number)
            .ok_or_else(|| AppError::InvalidShift(input.to_string()))
    }
}
