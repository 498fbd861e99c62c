//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default JSON store location.
fn default_data_path() -> String {
    String::from("neuralnote.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the JSON journal store used by the CLI.
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.data_path, "neuralnote.json");
    }
}
