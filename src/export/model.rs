use crate::models::seat::Seat;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SeatExport {
    pub position: String,
    pub row: usize,
    pub col: usize,
    pub name: String,
    pub memo: String,
    pub color: String,
    pub attendance: String,
    pub has_sketch: bool,
}

impl SeatExport {
    pub fn from_seat(seat: &Seat, has_sketch: bool) -> Self {
        Self {
            position: seat.position.to_string(),
            row: seat.position.row,
            col: seat.position.col,
            name: seat.content.name.clone(),
            memo: seat.content.memo.clone(),
            color: seat.content.color.to_string(),
            attendance: seat.attendance.to_db_str().to_string(),
            has_sketch,
        }
    }
}
