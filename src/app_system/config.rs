//! Stall configuration.
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [system]
//! actor_buffer_size = 32
//! log_filter = "info"
//! order_sequence_start = 1
//!
//! [[slots]]
//! label = "11:30"
//! capacity = 10
//! ```
//!
//! Slots are shown to customers in the order they are listed.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TimeSlotCreate;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message, not the dump of the input
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StallConfig {
    #[serde(default)]
    pub system: SystemSettings,
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemSettings {
    /// Channel buffer for each actor.
    #[serde(default = "default_actor_buffer_size")]
    pub actor_buffer_size: usize,
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// First order id handed out; set it past the last persisted order.
    #[serde(default = "default_order_sequence_start")]
    pub order_sequence_start: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SlotConfig {
    pub label: String,
    pub capacity: u32,
    /// Seats still free, when resuming a partly booked slot.
    #[serde(default)]
    pub available: Option<u32>,
}

fn default_actor_buffer_size() -> usize {
    32
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_order_sequence_start() -> u64 {
    1
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            actor_buffer_size: default_actor_buffer_size(),
            log_filter: default_log_filter(),
            order_sequence_start: default_order_sequence_start(),
        }
    }
}

impl StallConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.system.actor_buffer_size == 0 {
            return Err(ConfigError::Validation("actor_buffer_size must be greater than 0".into()));
        }
        if self.slots.is_empty() {
            return Err(ConfigError::Validation("at least one time slot must be configured".into()));
        }

        let mut labels = HashSet::new();
        for slot in &self.slots {
            if slot.label.trim().is_empty() {
                return Err(ConfigError::Validation("time slot label cannot be empty".into()));
            }
            if !labels.insert(slot.label.as_str()) {
                return Err(ConfigError::Validation(format!("duplicate time slot '{}'", slot.label)));
            }
            if slot.capacity == 0 {
                return Err(ConfigError::Validation(format!(
                    "time slot '{}' must have a capacity greater than 0",
                    slot.label
                )));
            }
            if let Some(available) = slot.available {
                if available > slot.capacity {
                    return Err(ConfigError::Validation(format!(
                        "time slot '{}' has {} available seats but a capacity of {}",
                        slot.label, available, slot.capacity
                    )));
                }
            }
        }
        Ok(())
    }

    /// Provisioning payloads, with display order taken from list position.
    pub fn slot_params(&self) -> Vec<TimeSlotCreate> {
        self.slots
            .iter()
            .zip(0u32..)
            .map(|(slot, display_order)| TimeSlotCreate {
                label: slot.label.clone(),
                capacity: slot.capacity,
                available: slot.available,
                display_order,
            })
            .collect()
    }
}

impl FromStr for StallConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: StallConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[system]
actor_buffer_size = 8
order_sequence_start = 1042

[[slots]]
label = "11:30"
capacity = 10

[[slots]]
label = "12:00"
capacity = 12
available = 4
"#;

    #[test]
    fn test_parse_sample() {
        let config: StallConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.system.actor_buffer_size, 8);
        assert_eq!(config.system.log_filter, "info");
        assert_eq!(config.system.order_sequence_start, 1042);
        assert_eq!(config.slots.len(), 2);
        assert_eq!(config.slots[1].available, Some(4));

        let params = config.slot_params();
        assert_eq!(params[0].display_order, 0);
        assert_eq!(params[1].display_order, 1);
        assert_eq!(params[1].label, "12:00");
    }

    #[test]
    fn test_system_section_is_optional() {
        let config: StallConfig = "[[slots]]\nlabel = \"12:00\"\ncapacity = 3\n".parse().unwrap();
        assert_eq!(config.system, SystemSettings::default());
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            "slots = []",
            "[system]\nactor_buffer_size = 0\n[[slots]]\nlabel = \"a\"\ncapacity = 1",
            "[[slots]]\nlabel = \"\"\ncapacity = 1",
            "[[slots]]\nlabel = \"a\"\ncapacity = 0",
            "[[slots]]\nlabel = \"a\"\ncapacity = 1\navailable = 2",
            "[[slots]]\nlabel = \"a\"\ncapacity = 1\n[[slots]]\nlabel = \"a\"\ncapacity = 2",
        ];
        for case in cases {
            let result = case.parse::<StallConfig>();
            assert!(matches!(result, Err(ConfigError::Validation(_))), "{case}: {result:?}");
        }
    }

    #[test]
    fn test_parse_error() {
        let result = "[[slots]]\nlabel = 5".parse::<StallConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = StallConfig::from_file(file.path()).unwrap();
        assert_eq!(config.slots[0].label, "11:30");

        let missing = StallConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
