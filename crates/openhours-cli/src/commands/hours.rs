use std::path::Path;

use openhours_core::week_overview;

use super::load_config;

pub fn run(config_path: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let schedule = config
        .schedule()
        .map_err(|e| format!("cannot show opening hours for {}: {e}", config.store.name))?;
    let rows = week_overview(&schedule);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", config.store.name);
    for row in rows {
        println!("  {:<10} {}", row.day_name, row.label);
    }
    Ok(())
}
