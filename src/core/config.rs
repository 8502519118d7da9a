use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        println!("{}", content);
        Ok(())
    }

    /// Add every field missing from the file with its default value, keeping
    /// the values already present. Returns the names that were added.
    pub fn check_and_fill(path: &Path) -> AppResult<Vec<String>> {
        let content = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        let mut current = match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(map)) => map,
            Ok(Value::Null) => Mapping::new(),
            Ok(_) | Err(_) => {
                return Err(AppError::ConfigLoad(format!(
                    "{} is not a YAML mapping",
                    path.display()
                )));
            }
        };

        let defaults = match serde_yaml::to_value(Config::default()) {
            Ok(Value::Mapping(map)) => map,
            _ => return Err(AppError::ConfigSave),
        };

        let mut added = Vec::new();
        for (key, value) in defaults {
            if !current.contains_key(&key) {
                if let Some(name) = key.as_str() {
                    added.push(name.to_string());
                }
                current.insert(key, value);
            }
        }

        if !added.is_empty() {
            let yaml =
                serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, yaml)?;
        }

        Ok(added)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        Command::new(ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(())
    }
}
