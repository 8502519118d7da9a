use crate::db::store::SeatStore;
use crate::errors::{AppError, AppResult};
use crate::models::position::Position;
use crate::models::seat::Seat;

/// Parse a grid dimension the way a numeric form field would be read:
/// anything that is not a positive integer counts as zero.
pub fn parse_dimension(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(0)
}

/// Row-major matrix of seats, hydrated from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    seats: Vec<Seat>,
}

impl Grid {
    /// Build a fresh `rows × cols` grid. A zero dimension, or a seat count
    /// that does not fit in `usize`, yields an empty grid.
    pub fn build(store: &SeatStore, rows: usize, cols: usize) -> AppResult<Self> {
        let (rows, cols) = match rows.checked_mul(cols) {
            Some(n) if n > 0 => (rows, cols),
            _ => (0, 0),
        };

        let mut seats = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let pos = Position::new(r, c);
                seats.push(Seat::from_record(pos, store.load_seat(pos)?));
            }
        }

        Ok(Self { rows, cols, seats })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    pub fn seat(&self, pos: Position) -> Option<&Seat> {
        self.index_of(pos).map(|i| &self.seats[i])
    }

    pub fn seat_mut(&mut self, pos: Position) -> Option<&mut Seat> {
        self.index_of(pos).map(move |i| &mut self.seats[i])
    }

    /// Like [`Grid::seat`], but a position outside the grid is an error.
    pub fn require(&self, pos: Position) -> AppResult<&Seat> {
        self.seat(pos)
            .ok_or_else(|| AppError::SeatNotFound(pos.to_string()))
    }

    pub fn require_mut(&mut self, pos: Position) -> AppResult<&mut Seat> {
        self.seat_mut(pos)
            .ok_or_else(|| AppError::SeatNotFound(pos.to_string()))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.seats.iter().map(|s| s.position)
    }

    /// Seats of one row, left to right.
    pub fn row(&self, r: usize) -> &[Seat] {
        if r >= self.rows {
            return &[];
        }
        &self.seats[r * self.cols..(r + 1) * self.cols]
    }
}
