use crate::core::grid::Grid;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::models::seat::SeatContent;
use rand::Rng;

/// In-place Fisher–Yates: every permutation is equally likely given a
/// uniform `rng`.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

pub struct ShuffleLogic;

impl ShuffleLogic {
    /// Randomly redistribute name, memo and color over every seat and
    /// persist the result. Attendance and sketches keep their positions.
    pub fn apply<R: Rng>(
        grid: &mut Grid,
        store: &mut SeatStore,
        rng: &mut R,
    ) -> AppResult<()> {
        let mut contents: Vec<SeatContent> =
            grid.seats().iter().map(|s| s.content.clone()).collect();
        fisher_yates(&mut contents, rng);

        let records: Vec<_> = grid
            .seats()
            .iter()
            .zip(&contents)
            .map(|(seat, content)| {
                let mut record = seat.to_record();
                record.name = content.name.clone();
                record.memo = content.memo.clone();
                record.color = content.color.clone();
                (seat.position, record)
            })
            .collect();

        // Persist first so the grid never shows an order the store lacks.
        store.save_seats(&records)?;

        for (seat, content) in grid.seats_mut().iter_mut().zip(contents) {
            seat.content = content;
        }
        Ok(())
    }
}
