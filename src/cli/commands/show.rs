use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::Grid;
use crate::core::keys::SketchTarget;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::ui::messages::{colors_enabled, header};
use crate::utils::grid_view::{render_details, render_grid};

pub fn handle(cmd: &Commands, cfg: &Config, plain: bool) -> AppResult<()> {
    if let Commands::Show { grid, details } = cmd {
        let store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let grid = Grid::build(&store, rows, cols)?;
        let colored = !plain && colors_enabled();

        header(format!(
            "Seats {}×{} · namespace {}",
            grid.rows(),
            grid.cols(),
            store.namespace()
        ));

        if *details {
            let mut with_sketch = Vec::with_capacity(grid.len());
            for pos in grid.positions() {
                with_sketch.push(store.load_sketch(SketchTarget::Seat(pos))?.is_some());
            }
            print!("{}", render_details(&grid, &with_sketch, colored));
        } else {
            print!("{}", render_grid(&grid, colored));
        }
    }
    Ok(())
}
