use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COLOR: &str = "#f0f0f0";

/// Swatches offered by the seat editor's color picker.
pub const PALETTE: [&str; 10] = [
    "#f0f0f0", "#ff4d4d", "#ff99cc", "#faa441", "#f8f405", "#3399ff", "#66ffff", "#66cc66",
    "#6dfa10", "#cc99ff",
];

/// A seat background color, always stored as lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SeatColor(String);

impl SeatColor {
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(SeatColor(format!("#{}", hex.to_ascii_lowercase())))
        } else {
            None
        }
    }

    pub fn from_palette(index: usize) -> Option<Self> {
        PALETTE.get(index).and_then(|c| SeatColor::parse(c))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl Default for SeatColor {
    fn default() -> Self {
        SeatColor(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for SeatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts `#rrggbb` or a palette index (`0`..`9`).
impl FromStr for SeatColor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(idx) = s.trim().parse::<usize>() {
            return SeatColor::from_palette(idx).ok_or_else(|| AppError::InvalidColor(s.into()));
        }
        SeatColor::parse(s).ok_or_else(|| AppError::InvalidColor(s.into()))
    }
}
