pub mod config;
pub mod hours;
pub mod status;
pub mod watch;

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use openhours_core::{Config, Instant, WeeklySchedule};

/// Format accepted by `--at`.
pub const AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Validated schedule, printing the neutral "status unknown" fallback in
/// the requested format when the hours table is unusable.
pub fn schedule_or_unknown(
    config: &Config,
    json: bool,
) -> Result<WeeklySchedule, Box<dyn std::error::Error>> {
    config.schedule().map_err(|e| {
        if json {
            let unknown = serde_json::json!({
                "store": config.store.name,
                "status": "unknown",
                "error": e.to_string(),
            });
            println!("{unknown:#}");
        } else {
            println!("{}: Status unknown", config.store.name);
        }
        Box::<dyn std::error::Error>::from(e)
    })
}

/// The instant to evaluate: `--at` if given, otherwise the local clock.
pub fn sample_instant(at: Option<&str>) -> Result<Instant, Box<dyn std::error::Error>> {
    match at {
        Some(value) => {
            let datetime = NaiveDateTime::parse_from_str(value, AT_FORMAT)
                .map_err(|e| format!("invalid --at '{value}' (expected YYYY-MM-DDTHH:MM): {e}"))?;
            Ok(Instant::from_datetime(&datetime))
        }
        None => Ok(Instant::from_datetime(&Local::now())),
    }
}
