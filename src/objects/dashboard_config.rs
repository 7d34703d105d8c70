use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::JsError;

/// Id of the inline `application/json` script element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub title: String,
    pub log_level: String,
    pub console_interval_ms: u32,
    pub console_history_limit: Option<usize>,
    pub dark_mode: bool,
    pub sider_collapsed: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Smart Factory Audit System".into(),
            log_level: "info".into(),
            console_interval_ms: 2_000,
            console_history_limit: None,
            dark_mode: false,
            sider_collapsed: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, JsError> {
        let config: Self = serde_json::from_str(json)?;

        if config.console_interval_ms == 0 {
            return Err("consoleIntervalMs must be greater than zero".into());
        }

        Ok(config)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = DashboardConfig::from_json(r#"{"darkMode": true}"#).unwrap();

        assert!(config.dark_mode);
        assert_eq!(config.console_interval_ms, 2_000);
        assert_eq!(config.console_history_limit, None);
        assert!(config.sider_collapsed);
        assert_eq!(config.title, "Smart Factory Audit System");
    }

    #[test]
    fn history_limit_and_interval_are_read() {
        let config =
            DashboardConfig::from_json(r#"{"consoleIntervalMs": 500, "consoleHistoryLimit": 50}"#)
                .unwrap();

        assert_eq!(config.console_interval_ms, 500);
        assert_eq!(config.console_history_limit, Some(50));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{darkMode: yes").is_err());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = DashboardConfig::from_json(r#"{"consoleIntervalMs": 0}"#).unwrap_err();

        assert!(err.description.contains("consoleIntervalMs"));
    }

    #[test]
    fn log_level_parsing() {
        let mut config = DashboardConfig::default();

        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
