use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fixed `(row, col)` identity of a seat, assigned when the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Accepts `R-C` (the stored form) as well as `R,C`.
impl FromStr for Position {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (r, c) = trimmed
            .split_once('-')
            .or_else(|| trimmed.split_once(','))
            .ok_or_else(|| AppError::InvalidPosition(s.to_string()))?;

        let row = r
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::InvalidPosition(s.to_string()))?;
        let col = c
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::InvalidPosition(s.to_string()))?;

        Ok(Position { row, col })
    }
}
