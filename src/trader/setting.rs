//! Global setting of the overlay engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{LazyLock, RwLock};

use super::utility::{load_json, load_json_from, save_json, save_json_to};

/// Default settings
fn default_settings() -> HashMap<String, SettingValue> {
    let mut settings = HashMap::new();

    // Log settings
    settings.insert("log.active".to_string(), SettingValue::Bool(true));
    settings.insert("log.level".to_string(), SettingValue::Int(20)); // INFO level
    settings.insert("log.console".to_string(), SettingValue::Bool(true));
    settings.insert("log.file".to_string(), SettingValue::Bool(true));

    // Display settings
    settings.insert("display.show_buy_trades".to_string(), SettingValue::Bool(true));
    settings.insert("display.show_sell_trades".to_string(), SettingValue::Bool(true));
    settings.insert("display.show_short_trades".to_string(), SettingValue::Bool(true));
    settings.insert("display.show_labels".to_string(), SettingValue::Bool(true));

    settings
}

/// Setting value types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl SettingValue {
    /// Get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Global settings container
pub struct Settings {
    settings: RwLock<HashMap<String, SettingValue>>,
}

impl Settings {
    /// Create new Settings, overlaying the saved app dir file onto the defaults
    pub fn new() -> Self {
        Self::from_json_map(load_json(SETTING_FILENAME))
    }

    /// Create new Settings from the setting file under the given folder
    pub fn load_from(dir: &Path) -> Self {
        Self::from_json_map(load_json_from(dir, SETTING_FILENAME))
    }

    fn from_json_map(data: HashMap<String, serde_json::Value>) -> Self {
        let mut settings = default_settings();

        for (key, value) in data {
            if let Ok(value) = serde_json::from_value(value) {
                settings.insert(key, value);
            }
        }

        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.settings.read().ok()?.get(key).cloned()
    }

    /// Get an integer setting
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_int())
    }

    /// Get a bool setting
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Set a setting value
    pub fn set(&self, key: impl Into<String>, value: SettingValue) {
        if let Ok(mut settings) = self.settings.write() {
            settings.insert(key.into(), value);
        }
    }

    /// Save settings to the app dir file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        save_json(SETTING_FILENAME, &self.to_json_map()?);
        Ok(())
    }

    /// Save settings to the setting file under the given folder
    pub fn save_to(&self, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        save_json_to(dir, SETTING_FILENAME, &self.to_json_map()?);
        Ok(())
    }

    fn to_json_map(
        &self,
    ) -> Result<HashMap<String, serde_json::Value>, Box<dyn std::error::Error>> {
        let settings = self.settings.read().map_err(|e| e.to_string())?;
        let data = settings
            .iter()
            .map(|(key, value)| Ok((key.clone(), serde_json::to_value(value)?)))
            .collect::<Result<HashMap<_, _>, serde_json::Error>>()?;
        Ok(data)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Setting filename
pub const SETTING_FILENAME: &str = "overlay_setting.json";

/// Global settings instance
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new);

/// Display toggles handed to the overlay engine.
///
/// Toggles gate markers and labels only; alert evaluation ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub show_buy_trades: bool,
    pub show_sell_trades: bool,
    pub show_short_trades: bool,
    pub show_labels: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_buy_trades: true,
            show_sell_trades: true,
            show_short_trades: true,
            show_labels: true,
        }
    }
}

impl DisplaySettings {
    /// Read the display toggles from a settings container
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            show_buy_trades: settings
                .get_bool("display.show_buy_trades")
                .unwrap_or(defaults.show_buy_trades),
            show_sell_trades: settings
                .get_bool("display.show_sell_trades")
                .unwrap_or(defaults.show_sell_trades),
            show_short_trades: settings
                .get_bool("display.show_short_trades")
                .unwrap_or(defaults.show_short_trades),
            show_labels: settings
                .get_bool("display.show_labels")
                .unwrap_or(defaults.show_labels),
        }
    }
}
