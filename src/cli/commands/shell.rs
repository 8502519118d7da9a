use crate::cli::commands::grid_dims;
use crate::cli::parser::Commands;
use crate::cli::shell::Shell;
use crate::config::Config;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::ui::messages::colors_enabled;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

pub fn handle(cmd: &Commands, cfg: &Config, plain: bool) -> AppResult<()> {
    if let Commands::Shell { script, grid } = cmd {
        let store = SeatStore::open(cfg)?;
        let (rows, cols) = grid_dims(grid, cfg);
        let mut shell =
            Shell::new(store, cfg, rows, cols, io::stdout())?.with_colors(!plain && colors_enabled());

        match script {
            Some(path) => shell.run(BufReader::new(File::open(path)?), false)?,
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                shell.run(stdin.lock(), interactive)?;
            }
        }
    }
    Ok(())
}
