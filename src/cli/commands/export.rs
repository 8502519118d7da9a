use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::Grid;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        grid,
    } = cmd
    {
        let store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let grid = Grid::build(&store, rows, cols)?;
        ExportLogic::export(&grid, &store, *format, file, *force)?;
    }
    Ok(())
}
