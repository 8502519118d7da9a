use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes, grid } = cmd {
        let prompt = format!(
            "Delete ALL seat data (names, memos, colors, attendance, sketches) in namespace '{}'? This action is irreversible.",
            cfg.namespace
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let outcome = ResetLogic::apply(&mut store, rows, cols)?;

        success(format!(
            "Removed {} keys; {} empty seats ready.",
            outcome.removed,
            outcome.grid.len()
        ));
    }
    Ok(())
}
