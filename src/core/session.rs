//! Seat editor session: at most one seat open at a time.
//!
//! ```text
//! Closed --open(pos)--> Open(pos) --save/cancel--> Closed
//!                        |  ^
//!                        +--+ open(other): silently retargets
//! ```

use crate::config::Config;
use crate::core::grid::Grid;
use crate::core::keys::SketchTarget;
use crate::core::sketch::SketchSurface;
use crate::db::store::SeatStore;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::Attendance;
use crate::models::color::SeatColor;
use crate::models::position::Position;
use crate::models::seat::{Seat, SeatRecord};

/// Staged values of the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub memo: String,
    pub color: SeatColor,
    pub attendance: Attendance,
}

impl EditForm {
    fn from_seat(seat: &Seat) -> Self {
        Self {
            name: seat.content.name.clone(),
            memo: seat.content.memo.clone(),
            color: seat.content.color.clone(),
            attendance: seat.attendance,
        }
    }

    fn to_record(&self) -> SeatRecord {
        SeatRecord {
            name: self.name.clone(),
            memo: self.memo.clone(),
            color: self.color.clone(),
            attendance: self.attendance,
        }
    }
}

#[derive(Debug, Clone)]
struct OpenSeat {
    position: Position,
    form: EditForm,
    /// Stored sketch as it was when the seat was opened.
    sketch_on_open: Option<String>,
}

pub struct EditorSession {
    open: Option<OpenSeat>,
    /// One canvas reused for every seat, like the editor's modal canvas.
    surface: SketchSurface,
    cancel_discards_sketch: bool,
}

impl EditorSession {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            open: None,
            surface: SketchSurface::new(canvas_width, canvas_height, None),
            cancel_discards_sketch: false,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.canvas_width, cfg.canvas_height)
            .with_cancel_discards_sketch(cfg.cancel_discards_sketch)
    }

    pub fn with_cancel_discards_sketch(mut self, discard: bool) -> Self {
        self.cancel_discards_sketch = discard;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn position(&self) -> Option<Position> {
        self.open.as_ref().map(|o| o.position)
    }

    pub fn form(&self) -> Option<&EditForm> {
        self.open.as_ref().map(|o| &o.form)
    }

    pub fn surface(&self) -> &SketchSurface {
        &self.surface
    }

    /// Open `pos` for editing. Whatever was open before is dropped without
    /// saving.
    pub fn open(&mut self, grid: &Grid, store: &SeatStore, pos: Position) -> AppResult<()> {
        let seat = grid.require(pos)?;
        let stored = store.load_sketch(SketchTarget::Seat(pos))?;

        self.seat_selected(pos, stored.as_deref());
        self.open = Some(OpenSeat {
            position: pos,
            form: EditForm::from_seat(seat),
            sketch_on_open: stored,
        });
        Ok(())
    }

    /// Fired once the editor shows a newly selected seat: the shared
    /// canvas is wiped and shows that seat's sketch.
    fn seat_selected(&mut self, pos: Position, stored: Option<&str>) {
        self.surface.show(SketchTarget::Seat(pos), stored);
    }

    fn form_mut(&mut self) -> AppResult<&mut EditForm> {
        self.open
            .as_mut()
            .map(|o| &mut o.form)
            .ok_or(AppError::NoOpenSeat)
    }

    pub fn set_name(&mut self, name: &str) -> AppResult<()> {
        self.form_mut()?.name = name.to_string();
        Ok(())
    }

    pub fn set_memo(&mut self, memo: &str) -> AppResult<()> {
        self.form_mut()?.memo = memo.to_string();
        Ok(())
    }

    pub fn set_color(&mut self, color: SeatColor) -> AppResult<()> {
        self.form_mut()?.color = color;
        Ok(())
    }

    pub fn set_attendance(&mut self, attendance: Attendance) -> AppResult<()> {
        self.form_mut()?.attendance = attendance;
        Ok(())
    }

    // ---------------------------
    // Seat canvas
    // ---------------------------

    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.surface.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, store: &mut SeatStore, x: i32, y: i32) -> AppResult<bool> {
        self.surface.pointer_move(store, x, y)
    }

    pub fn pointer_up(&mut self, store: &mut SeatStore) -> AppResult<bool> {
        self.surface.pointer_up(store)
    }

    pub fn pointer_leave(&mut self, store: &mut SeatStore) -> AppResult<bool> {
        self.surface.pointer_leave(store)
    }

    pub fn clear_sketch(&mut self, store: &mut SeatStore) -> AppResult<()> {
        self.surface.clear(store)
    }

    // ---------------------------
    // Transitions out of Open
    // ---------------------------

    /// Commit the form and the canvas, reflect them on the grid and close.
    /// Returns the saved position, or `None` when nothing was open.
    pub fn save(&mut self, grid: &mut Grid, store: &mut SeatStore) -> AppResult<Option<Position>> {
        let Some(open) = self.open.as_ref() else {
            return Ok(None);
        };

        let pos = open.position;
        let record = open.form.to_record();
        let sketch = self.surface.snapshot()?;
        store.save_seat_with_sketch(pos, &record, sketch.as_deref())?;

        if let Some(seat) = grid.seat_mut(pos) {
            *seat = Seat::from_record(pos, record);
        }

        self.close();
        Ok(Some(pos))
    }

    /// Drop the form edits and close. The canvas is still persisted for the
    /// open seat unless the session reverts sketches on cancel.
    pub fn cancel(&mut self, store: &mut SeatStore) -> AppResult<Option<Position>> {
        let Some(open) = self.open.as_ref() else {
            return Ok(None);
        };

        let pos = open.position;
        let target = SketchTarget::Seat(pos);
        if self.cancel_discards_sketch {
            match &open.sketch_on_open {
                Some(uri) => store.save_sketch(target, uri)?,
                None => {
                    store.remove_sketch(target)?;
                }
            }
        } else {
            self.surface.persist(store)?;
        }

        self.close();
        Ok(Some(pos))
    }

    /// Forget the open seat without writing anything (reset, regenerate).
    pub fn close(&mut self) {
        self.open = None;
        self.surface.retarget(None);
    }

    /// Close and wipe the shared canvas.
    pub fn discard(&mut self) {
        self.close();
        self.surface.wipe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SeatStore, Grid, EditorSession) {
        let store = SeatStore::in_memory("seat10").unwrap();
        let grid = Grid::build(&store, 3, 3).unwrap();
        (store, grid, EditorSession::new(40, 20))
    }

    fn stroke(session: &mut EditorSession, store: &mut SeatStore) {
        session.pointer_down(2, 2);
        session.pointer_move(store, 30, 10).unwrap();
        session.pointer_up(store).unwrap();
    }

    #[test]
    fn save_round_trips_through_a_reload() {
        let (mut store, mut grid, mut session) = setup();
        let p = Position::new(1, 2);

        session.open(&grid, &store, p).unwrap();
        assert_eq!(session.form().unwrap().attendance, Attendance::Present);
        session.set_name("Alice").unwrap();
        session.set_memo("note").unwrap();
        session.set_color("#ff4d4d".parse().unwrap()).unwrap();
        session.set_attendance(Attendance::Absent).unwrap();
        assert_eq!(session.save(&mut grid, &mut store).unwrap(), Some(p));
        assert!(!session.is_open());

        assert_eq!(grid.seat(p).unwrap().content.name, "Alice");

        let reloaded = Grid::build(&store, 3, 3).unwrap();
        let seat = reloaded.seat(p).unwrap();
        assert_eq!(seat.content.name, "Alice");
        assert_eq!(seat.content.memo, "note");
        assert_eq!(seat.content.color.as_str(), "#ff4d4d");
        assert_eq!(seat.attendance, Attendance::Absent);
    }

    #[test]
    fn cancel_discards_fields_but_keeps_strokes() {
        let (mut store, grid, mut session) = setup();
        let p = Position::new(0, 0);

        session.open(&grid, &store, p).unwrap();
        session.set_name("Bob").unwrap();
        stroke(&mut session, &mut store);
        session.cancel(&mut store).unwrap();

        assert_eq!(store.load_seat(p).unwrap().name, "");
        assert!(store.load_sketch(SketchTarget::Seat(p)).unwrap().is_some());
    }

    #[test]
    fn cancel_can_revert_strokes() {
        let (mut store, grid, session) = setup();
        let mut session = session.with_cancel_discards_sketch(true);
        let p = Position::new(0, 0);

        session.open(&grid, &store, p).unwrap();
        stroke(&mut session, &mut store);
        assert!(store.load_sketch(SketchTarget::Seat(p)).unwrap().is_some());
        session.cancel(&mut store).unwrap();

        assert!(store.load_sketch(SketchTarget::Seat(p)).unwrap().is_none());
    }

    #[test]
    fn cancel_restores_the_sketch_stored_at_open() {
        let (mut store, mut grid, session) = setup();
        let mut session = session.with_cancel_discards_sketch(true);
        let p = Position::new(1, 1);
        let target = SketchTarget::Seat(p);

        session.open(&grid, &store, p).unwrap();
        stroke(&mut session, &mut store);
        session.save(&mut grid, &mut store).unwrap();
        let saved = store.load_sketch(target).unwrap().unwrap();

        session.open(&grid, &store, p).unwrap();
        assert!(!session.surface().canvas().is_blank());
        session.pointer_down(0, 15);
        session.pointer_move(&mut store, 35, 15).unwrap();
        session.pointer_up(&mut store).unwrap();
        assert_ne!(store.load_sketch(target).unwrap().unwrap(), saved);

        session.cancel(&mut store).unwrap();
        assert_eq!(store.load_sketch(target).unwrap().unwrap(), saved);
    }

    #[test]
    fn reopening_shows_the_same_bitmap() {
        let (mut store, mut grid, mut session) = setup();
        let p = Position::new(2, 1);

        session.open(&grid, &store, p).unwrap();
        stroke(&mut session, &mut store);
        let drawn = session.surface().canvas().clone();
        session.save(&mut grid, &mut store).unwrap();

        session.open(&grid, &store, p).unwrap();
        assert_eq!(session.surface().canvas(), &drawn);
    }

    #[test]
    fn other_seat_never_shows_the_previous_bitmap() {
        let (mut store, mut grid, mut session) = setup();
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);

        session.open(&grid, &store, a).unwrap();
        stroke(&mut session, &mut store);
        session.save(&mut grid, &mut store).unwrap();

        session.open(&grid, &store, b).unwrap();
        assert!(session.surface().canvas().is_blank());
    }

    #[test]
    fn opening_another_seat_drops_the_first() {
        let (mut store, mut grid, mut session) = setup();
        session.open(&grid, &store, Position::new(0, 0)).unwrap();
        session.set_name("lost").unwrap();
        session.open(&grid, &store, Position::new(1, 1)).unwrap();
        session.save(&mut grid, &mut store).unwrap();

        assert_eq!(store.load_seat(Position::new(0, 0)).unwrap().name, "");
        assert_eq!(store.load_seat(Position::new(1, 1)).unwrap().name, "");
    }

    #[test]
    fn strokes_after_close_go_nowhere() {
        let (mut store, grid, mut session) = setup();
        session.open(&grid, &store, Position::new(0, 0)).unwrap();
        session.cancel(&mut store).unwrap();
        let before = store.keys_with_prefix("seat10-").unwrap();

        stroke(&mut session, &mut store);
        assert_eq!(store.keys_with_prefix("seat10-").unwrap(), before);
    }

    #[test]
    fn closed_session_rejects_form_edits() {
        let (mut store, mut grid, mut session) = setup();
        assert!(matches!(session.set_name("x"), Err(AppError::NoOpenSeat)));
        assert_eq!(session.save(&mut grid, &mut store).unwrap(), None);
        assert_eq!(session.cancel(&mut store).unwrap(), None);
    }

    #[test]
    fn opening_outside_the_grid_fails() {
        let (store, grid, mut session) = setup();
        assert!(session.open(&grid, &store, Position::new(5, 0)).is_err());
        assert!(!session.is_open());
    }
}
