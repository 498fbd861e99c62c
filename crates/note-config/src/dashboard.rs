//! Dashboard aggregation configuration.

use chrono_tz::Tz;
use note_core::responses::{DEFAULT_RECENT_LIMIT, DEFAULT_WINDOW_DAYS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default calendar timezone for streaks and weekly buckets.
fn default_timezone() -> String {
    String::from("UTC")
}

const fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

const fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// IANA timezone name used to map timestamps to calendar dates.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Default lookback window in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Default number of recent entries.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            window_days: default_window_days(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl DashboardConfig {
    /// Parse the configured timezone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the name is not a known IANA zone.
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "dashboard.timezone".into(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DashboardConfig::default();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.window_days, 30);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.tz().unwrap(), Tz::UTC);
    }

    #[test]
    fn parses_named_zone() {
        let config = DashboardConfig {
            timezone: "America/New_York".into(),
            ..Default::default()
        };
        assert_eq!(config.tz().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn rejects_unknown_zone() {
        let config = DashboardConfig {
            timezone: "Mars/Olympus_Mons".into(),
            ..Default::default()
        };
        let err = config.tz().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "dashboard.timezone"));
    }
}
