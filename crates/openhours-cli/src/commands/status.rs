use std::path::Path;

use openhours_core::{evaluate, StatusDescriptor, StatusTone};
use serde::Serialize;

use super::{load_config, sample_instant, schedule_or_unknown};

#[derive(Serialize)]
struct StatusReport<'a> {
    store: &'a str,
    tone: StatusTone,
    #[serde(flatten)]
    status: &'a StatusDescriptor,
}

/// Second display line: when the state flips next.
pub fn countdown_line(status: &StatusDescriptor) -> Option<String> {
    if status.is_permanently_closed() {
        return None;
    }
    let verb = if status.is_open { "Closes" } else { "Opens" };
    Some(format!("{verb} in {}", status.time_until_label))
}

pub fn run(
    config_path: Option<&Path>,
    at: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let now = sample_instant(at)?;
    let schedule = schedule_or_unknown(&config, json)?;

    let status = evaluate(now, &schedule);
    let tone = status.tone(config.presenter.closing_soon_minutes);

    if json {
        let report = StatusReport {
            store: &config.store.name,
            tone,
            status: &status,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}: {}", config.store.name, status.message);
    if let Some(line) = countdown_line(&status) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(is_open: bool, minutes: Option<u32>, label: &str) -> StatusDescriptor {
        StatusDescriptor {
            is_open,
            minutes_until_transition: minutes,
            message: String::new(),
            time_until_label: label.to_string(),
        }
    }

    #[test]
    fn countdown_line_per_state() {
        assert_eq!(
            countdown_line(&status(true, Some(5), "5m")).as_deref(),
            Some("Closes in 5m")
        );
        assert_eq!(
            countdown_line(&status(false, Some(2900), "2 days")).as_deref(),
            Some("Opens in 2 days")
        );
        assert_eq!(countdown_line(&status(false, None, "N/A")), None);
    }
}
