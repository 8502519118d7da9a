use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::Grid;
use crate::db::log::sclog_quiet;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::models::attendance::Attendance;
use crate::models::color::SeatColor;
use crate::models::position::Position;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        position,
        name,
        memo,
        color,
        attendance,
        grid,
    } = cmd
    {
        let pos: Position = position.parse()?;
        // Validate everything before touching the store.
        let color = color.as_deref().map(str::parse::<SeatColor>).transpose()?;
        let attendance = attendance
            .as_deref()
            .map(str::parse::<Attendance>)
            .transpose()?;

        let mut store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let grid = Grid::build(&store, rows, cols)?;
        let mut record = grid.require(pos)?.to_record();

        if name.is_none() && memo.is_none() && color.is_none() && attendance.is_none() {
            info(format!("Nothing to change for seat {}.", pos));
            return Ok(());
        }

        if let Some(n) = name {
            record.name = n.clone();
        }
        if let Some(m) = memo {
            record.memo = m.clone();
        }
        if let Some(c) = color {
            record.color = c;
        }
        if let Some(a) = attendance {
            record.attendance = a;
        }

        store.save_seat(pos, &record)?;
        sclog_quiet(
            store.conn(),
            "edit",
            &pos.to_string(),
            &format!("name={} attendance={}", record.name, record.attendance),
        );
        success(format!("Seat {} saved.", pos));
    }
    Ok(())
}
