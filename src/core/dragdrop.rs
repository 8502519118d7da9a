use crate::core::grid::Grid;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::models::position::Position;
use crate::models::seat::Seat;
use std::mem;

/// Drag-and-drop between two seats. Dropping exchanges name, memo and
/// color; attendance and sketches stay where they are.
#[derive(Debug, Default)]
pub struct Transposer {
    dragged: Option<Position>,
}

impl Transposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<Position> {
        self.dragged
    }

    pub fn drag_start(&mut self, pos: Position) {
        self.dragged = Some(pos);
    }

    /// Drop the dragged seat on `target`. Returns false, without touching
    /// anything, when no drag is in progress or the seat lands on itself.
    pub fn drop_on(
        &mut self,
        grid: &mut Grid,
        store: &mut SeatStore,
        target: Position,
    ) -> AppResult<bool> {
        let Some(source) = self.dragged.take() else {
            return Ok(false);
        };
        swap(grid, store, source, target)
    }
}

/// Exchange the content of two seats in the grid and in the store.
pub fn swap(grid: &mut Grid, store: &mut SeatStore, a: Position, b: Position) -> AppResult<bool> {
    if a == b {
        return Ok(false);
    }

    let mut record_a = grid.require(a)?.to_record();
    let mut record_b = grid.require(b)?.to_record();
    mem::swap(&mut record_a.name, &mut record_b.name);
    mem::swap(&mut record_a.memo, &mut record_b.memo);
    mem::swap(&mut record_a.color, &mut record_b.color);

    store.save_seats(&[(a, record_a.clone()), (b, record_b.clone())])?;

    *grid.require_mut(a)? = Seat::from_record(a, record_a);
    *grid.require_mut(b)? = Seat::from_record(b, record_b);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::SketchTarget;
    use crate::models::attendance::Attendance;
    use crate::models::color::SeatColor;
    use crate::models::seat::SeatRecord;

    fn seeded() -> (SeatStore, Grid) {
        let mut store = SeatStore::in_memory("seat10").unwrap();
        store
            .save_seat(
                Position::new(0, 0),
                &SeatRecord {
                    name: "Alice".into(),
                    memo: "front".into(),
                    color: SeatColor::parse("#ff4d4d").unwrap(),
                    attendance: Attendance::Absent,
                },
            )
            .unwrap();
        store
            .save_seat(
                Position::new(1, 1),
                &SeatRecord {
                    name: "Bob".into(),
                    memo: "back".into(),
                    color: SeatColor::parse("#3399ff").unwrap(),
                    attendance: Attendance::Present,
                },
            )
            .unwrap();
        store
            .save_sketch(SketchTarget::Seat(Position::new(0, 0)), "data:alice")
            .unwrap();
        let grid = Grid::build(&store, 2, 2).unwrap();
        (store, grid)
    }

    #[test]
    fn drop_swaps_content_only() {
        let (mut store, mut grid) = seeded();
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);

        let mut t = Transposer::new();
        t.drag_start(a);
        assert!(t.drop_on(&mut grid, &mut store, b).unwrap());
        assert!(t.dragged().is_none());

        let at_a = store.load_seat(a).unwrap();
        let at_b = store.load_seat(b).unwrap();
        assert_eq!(at_a.name, "Bob");
        assert_eq!(at_a.memo, "back");
        assert_eq!(at_a.color.as_str(), "#3399ff");
        assert_eq!(at_a.attendance, Attendance::Absent);
        assert_eq!(at_b.name, "Alice");
        assert_eq!(at_b.attendance, Attendance::Present);

        assert_eq!(grid.seat(a).unwrap().content.name, "Bob");
        assert_eq!(
            store.load_sketch(SketchTarget::Seat(a)).unwrap().as_deref(),
            Some("data:alice")
        );
    }

    #[test]
    fn swapping_back_restores_the_original() {
        let (mut store, mut grid) = seeded();
        let before = grid.clone();
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);

        let mut t = Transposer::new();
        t.drag_start(a);
        t.drop_on(&mut grid, &mut store, b).unwrap();
        t.drag_start(b);
        t.drop_on(&mut grid, &mut store, a).unwrap();

        assert_eq!(grid, before);
        assert_eq!(
            Grid::build(&store, 2, 2).unwrap().seat(a).unwrap().content.name,
            "Alice"
        );
    }

    #[test]
    fn no_drag_or_self_drop_is_a_no_op() {
        let (mut store, mut grid) = seeded();
        let before = grid.clone();
        let mut t = Transposer::new();
        assert!(!t.drop_on(&mut grid, &mut store, Position::new(0, 0)).unwrap());

        t.drag_start(Position::new(0, 0));
        assert!(!t.drop_on(&mut grid, &mut store, Position::new(0, 0)).unwrap());
        assert_eq!(grid, before);
    }

    #[test]
    fn seats_outside_the_grid_are_rejected() {
        let (mut store, mut grid) = seeded();
        assert!(swap(&mut grid, &mut store, Position::new(0, 0), Position::new(4, 4)).is_err());
    }
}
