//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage quota exceeded: writing {needed} bytes would exceed the {quota} byte quota")]
    QuotaExceeded { needed: u64, quota: u64 },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid seat position: {0} (expected ROW-COL, e.g. 0-3)")]
    InvalidPosition(String),

    #[error("Invalid color: {0} (expected #rrggbb or a palette index 0-9)")]
    InvalidColor(String),

    #[error("Invalid attendance: {0} (expected present, absent or other)")]
    InvalidAttendance(String),

    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("Invalid point: {0} (expected X,Y)")]
    InvalidPoint(String),

    #[error("Invalid sketch data: {0}")]
    InvalidSketch(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Seat {0} is outside the current grid")]
    SeatNotFound(String),

    #[error("No seat is open in the editor")]
    NoOpenSeat,

    #[error("No sketch stored for {0}")]
    NoSketch(String),

    #[error("Unknown shell command: {0}")]
    UnknownCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
