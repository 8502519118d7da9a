//! Storage key layout.
//!
//! ```text
//! {ns}-seat-{r}-{c}-{field}    one scalar field (name, memo, color, attendance)
//! {ns}-seat-{r}-{c}            the whole seat record as JSON
//! {ns}-modalSketch-{r}-{c}     per-seat sketch (PNG data URI)
//! {ns}-mainSketch              global sketch (PNG data URI)
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::position::Position;
use crate::models::seat::SeatField;
use std::fmt;

/// Version tag isolating one generation of the chart from another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// `-` is the key separator, so it cannot appear inside a namespace.
    pub fn new(tag: &str) -> AppResult<Self> {
        let tag = tag.trim();
        let valid = !tag.is_empty()
            && tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

        if valid {
            Ok(Namespace(tag.to_string()))
        } else {
            Err(AppError::InvalidNamespace(tag.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix shared by every key of this namespace, trailing `-` included.
    pub fn prefix(&self) -> String {
        format!("{}-", self.0)
    }

    pub fn field_key(&self, pos: Position, field: SeatField) -> String {
        format!("{}-seat-{}-{}", self.0, pos, field.as_str())
    }

    pub fn record_key(&self, pos: Position) -> String {
        format!("{}-seat-{}", self.0, pos)
    }

    pub fn seat_sketch_key(&self, pos: Position) -> String {
        format!("{}-modalSketch-{}", self.0, pos)
    }

    pub fn main_sketch_key(&self) -> String {
        format!("{}-mainSketch", self.0)
    }
}

/// Which canvas a sketch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchTarget {
    /// The global memo canvas next to the grid.
    Main,
    /// The canvas inside the seat editor.
    Seat(Position),
}

impl SketchTarget {
    pub fn key(&self, ns: &Namespace) -> String {
        match self {
            SketchTarget::Main => ns.main_sketch_key(),
            SketchTarget::Seat(pos) => ns.seat_sketch_key(*pos),
        }
    }
}

impl fmt::Display for SketchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchTarget::Main => f.write_str("main sketch"),
            SketchTarget::Seat(pos) => write!(f, "seat {} sketch", pos),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
