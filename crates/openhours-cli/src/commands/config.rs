use std::path::Path;

use clap::Subcommand;
use openhours_core::Config;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "store.name", "hours.monday.open")
        key: String,
    },
    /// Print the whole config as TOML
    Show,
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(config_path: Option<&Path>, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = load_config(config_path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Show => {
            let config = load_config(config_path)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => match config_path {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", Config::path()?.display()),
        },
        ConfigAction::Reset => {
            let config = Config::default();
            match config_path {
                Some(path) => config.save_to(path)?,
                None => config.save()?,
            }
            println!("config reset to defaults");
        }
    }
    Ok(())
}
