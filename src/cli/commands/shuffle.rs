use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::Grid;
use crate::core::shuffle::ShuffleLogic;
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shuffle { seed, grid } = cmd {
        let mut store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let mut grid = Grid::build(&store, rows, cols)?;

        match seed {
            Some(s) => ShuffleLogic::apply(&mut grid, &mut store, &mut StdRng::seed_from_u64(*s))?,
            None => ShuffleLogic::apply(&mut grid, &mut store, &mut rand::rng())?,
        }

        sclog_quiet(
            store.conn(),
            "shuffle",
            store.namespace().as_str(),
            &format!("Shuffled {} seats", grid.len()),
        );
        success(format!("Shuffled {} seats.", grid.len()));
    }
    Ok(())
}
