use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(&path)?;
        }

        if *check {
            let added = ConfigLogic::check_and_fill(&path)?;
            if added.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Added missing fields: {}", added.join(", ")));
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }

        if !*print_config && !*check && !*edit_config {
            info(format!("Configuration file: {}", path.display()));
        }
    }
    Ok(())
}
