use crate::error::{MealError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CALORIE_TARGET: u32 = 2000;

/// Configuration for mealboard, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealboardConfig {
    /// Daily calorie target; days above it are flagged. `None` disables the check.
    #[serde(default = "default_calorie_target")]
    pub calorie_target: Option<u32>,

    /// Show protein/carbs/fat next to calories when listing meals
    #[serde(default = "default_show_macros")]
    pub show_macros: bool,
}

fn default_calorie_target() -> Option<u32> {
    Some(DEFAULT_CALORIE_TARGET)
}

fn default_show_macros() -> bool {
    true
}

impl Default for MealboardConfig {
    fn default() -> Self {
        Self {
            calorie_target: default_calorie_target(),
            show_macros: default_show_macros(),
        }
    }
}

/// Keys accepted by `config get/set`.
pub const CONFIG_KEYS: [&str; 2] = ["calorie-target", "show-macros"];

impl MealboardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MealError::Io)?;
        let config: MealboardConfig =
            serde_json::from_str(&content).map_err(MealError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MealError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MealError::Serialization)?;
        fs::write(config_path, content).map_err(MealError::Io)?;
        Ok(())
    }

    /// Current value of a key, formatted for display.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "calorie-target" => Ok(self
                .calorie_target
                .map(|t| t.to_string())
                .unwrap_or_else(|| "off".to_string())),
            "show-macros" => Ok(self.show_macros.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parses and sets a key. `calorie-target` accepts a number or `off`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "calorie-target" => {
                self.calorie_target = match value.to_lowercase().as_str() {
                    "off" | "none" | "0" => None,
                    _ => Some(value.parse().map_err(|_| {
                        MealError::Api(format!("calorie-target must be a number, got '{}'", value))
                    })?),
                };
            }
            "show-macros" => {
                self.show_macros = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => {
                        return Err(MealError::Api(format!(
                            "show-macros must be true or false, got '{}'",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> MealError {
    MealError::Api(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
