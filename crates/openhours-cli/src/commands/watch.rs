use std::path::Path;
use std::time::Duration;

use chrono::Local;
use openhours_core::{evaluate, Instant};

use super::{load_config, schedule_or_unknown, status::countdown_line};

pub fn run(
    config_path: Option<&Path>,
    interval: Option<u64>,
    count: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let schedule = schedule_or_unknown(&config, false)?;
    let interval = Duration::from_secs(interval.unwrap_or(config.presenter.refresh_seconds).max(1));

    let mut refreshes = 0u32;
    loop {
        let sampled = Local::now();
        let status = evaluate(Instant::from_datetime(&sampled), &schedule);
        let countdown = countdown_line(&status)
            .map(|line| format!(" ({line})"))
            .unwrap_or_default();
        println!(
            "[{}] {}: {}{}",
            sampled.format("%H:%M"),
            config.store.name,
            status.message,
            countdown
        );

        refreshes += 1;
        if count.is_some_and(|limit| refreshes >= limit) {
            break;
        }
        tracing::debug!(seconds = interval.as_secs(), "sleeping until next refresh");
        std::thread::sleep(interval);
    }
    Ok(())
}
