pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod shell;
pub mod show;
pub mod shuffle;
pub mod sketch;
pub mod swap;

use crate::cli::parser::GridArgs;
use crate::config::Config;
use crate::core::grid::parse_dimension;
use crate::core::keys::SketchTarget;
use crate::errors::{AppError, AppResult};
use crate::models::position::Position;

/// Resolve `--rows/--cols`, falling back to the configured defaults.
pub(crate) fn grid_dims(args: &GridArgs, cfg: &Config) -> (usize, usize) {
    let rows = args
        .rows
        .as_deref()
        .map(parse_dimension)
        .unwrap_or(cfg.default_rows);
    let cols = args
        .cols
        .as_deref()
        .map(parse_dimension)
        .unwrap_or(cfg.default_cols);
    (rows, cols)
}

/// `--seat POS` selects a seat sketch, no flag the main sketch.
pub(crate) fn sketch_target(seat: &Option<String>) -> AppResult<SketchTarget> {
    match seat {
        Some(s) => Ok(SketchTarget::Seat(s.parse::<Position>()?)),
        None => Ok(SketchTarget::Main),
    }
}

/// Parse a canvas point written as `X,Y`.
pub(crate) fn parse_point(s: &str) -> AppResult<(i32, i32)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| AppError::InvalidPoint(s.to_string()))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidPoint(s.to_string()))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidPoint(s.to_string()))?;
    Ok((x, y))
}
