use thiserror::Error;

use crate::cards::Rules;

pub const DETECT_TWO_PAIR_VAR: &str = "POKERHAND_DETECT_TWO_PAIR";
pub const OUTPUT_VAR: &str = "POKERHAND_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for the command-line front end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub rules: Rules,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DETECT_TWO_PAIR_VAR) {
            config.rules.detect_two_pair =
                parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                    key: DETECT_TWO_PAIR_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: OUTPUT_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
