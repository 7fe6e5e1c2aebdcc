//! Booking window and slot configuration.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Working-window and slot settings for availability computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Start of the bookable day, `"HH:MM"`.
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// End of the bookable day, `"HH:MM"`.
    #[serde(default = "default_day_end")]
    pub day_end: String,
    /// Minimum length of an offered free slot in minutes.
    #[serde(default = "default_min_slot_minutes")]
    pub min_slot_minutes: i64,
    /// Duration of a repeated booking in hours.
    #[serde(default = "default_repeat_duration_hours")]
    pub repeat_duration_hours: i64,
}

impl BookingConfig {
    /// Parse the configured day start as a [`NaiveTime`].
    pub fn day_start_time(&self) -> Result<NaiveTime, AppError> {
        parse_time(&self.day_start)
    }

    /// Parse the configured day end as a [`NaiveTime`].
    pub fn day_end_time(&self) -> Result<NaiveTime, AppError> {
        parse_time(&self.day_end)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
            min_slot_minutes: default_min_slot_minutes(),
            repeat_duration_hours: default_repeat_duration_hours(),
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AppError::configuration(format!("Invalid booking time '{value}': {e}")))
}

fn default_day_start() -> String {
    "09:00".to_string()
}

fn default_day_end() -> String {
    "18:00".to_string()
}

fn default_min_slot_minutes() -> i64 {
    30
}

fn default_repeat_duration_hours() -> i64 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_working_window() {
        let cfg = BookingConfig::default();
        assert_eq!(
            cfg.day_start_time().unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            cfg.day_end_time().unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(cfg.min_slot_minutes, 30);
        assert_eq!(cfg.repeat_duration_hours, 2);
    }

    #[test]
    fn test_invalid_time_is_configuration_error() {
        let cfg = BookingConfig {
            day_start: "9am".to_string(),
            ..BookingConfig::default()
        };
        assert!(cfg.day_start_time().is_err());
    }
}
