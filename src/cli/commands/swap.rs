use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dragdrop;
use crate::core::grid::Grid;
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::models::position::Position;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Swap { a, b, grid } = cmd {
        let a: Position = a.parse()?;
        let b: Position = b.parse()?;

        let mut store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let mut grid = Grid::build(&store, rows, cols)?;

        if dragdrop::swap(&mut grid, &mut store, a, b)? {
            sclog_quiet(store.conn(), "swap", &format!("{a}<->{b}"), "Seats swapped");
            success(format!("Seats {} and {} swapped.", a, b));
        } else {
            info("A seat dropped on itself stays as it is.");
        }
    }
    Ok(())
}
