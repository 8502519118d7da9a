use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::store::SeatStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = SeatStore::open(cfg)?;
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 25),
            Column::new("OPERATION", 18),
            Column::new("TARGET", 30),
            Column::new("MESSAGE", 40),
        ]);
        for e in entries {
            table.add_row(vec![e.date, e.operation, e.target, e.message]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
