use crate::core::grid::Grid;
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::AppResult;

pub struct ResetOutcome {
    pub removed: usize,
    pub grid: Grid,
}

pub struct ResetLogic;

impl ResetLogic {
    /// Delete every key of the store's namespace and rebuild the grid from
    /// defaults. Callers wipe their canvases afterwards.
    pub fn apply(store: &mut SeatStore, rows: usize, cols: usize) -> AppResult<ResetOutcome> {
        let removed = store.reset_namespace()?;
        let grid = Grid::build(store, rows, cols)?;

        sclog_quiet(
            store.conn(),
            "reset",
            store.namespace().as_str(),
            &format!("Removed {} keys", removed),
        );

        Ok(ResetOutcome { removed, grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::SketchTarget;
    use crate::models::position::Position;

    #[test]
    fn reset_rebuilds_from_defaults() {
        let mut store = SeatStore::in_memory("seat10").unwrap();
        store
            .set(Position::new(0, 0), crate::models::seat::SeatField::Name, "Alice")
            .unwrap();
        store.save_sketch(SketchTarget::Main, "data:x").unwrap();
        store.set_raw("seat9-seat-0-0-name", "Keep").unwrap();

        let outcome = ResetLogic::apply(&mut store, 2, 2).unwrap();
        assert_eq!(outcome.removed, 6);
        assert!(outcome.grid.seats().iter().all(|s| s.content.name.is_empty()));
        assert_eq!(
            store.get_raw("seat9-seat-0-0-name").unwrap().as_deref(),
            Some("Keep")
        );
    }
}
