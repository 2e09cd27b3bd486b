//! General utility functions.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Locate the overlay app folder
fn get_overlay_dir(temp_name: &str) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let temp_path = cwd.join(temp_name);

    // If .trade_overlay folder exists in current working directory, use it
    if temp_path.exists() {
        return temp_path;
    }

    // Otherwise use home path
    let home_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let temp_path = home_path.join(temp_name);

    // Create folder if not exists
    if !temp_path.exists() {
        let _ = fs::create_dir_all(&temp_path);
    }

    temp_path
}

/// App data directory
pub static TEMP_DIR: LazyLock<PathBuf> = LazyLock::new(|| get_overlay_dir(".trade_overlay"));

/// Get path for app file with filename
pub fn get_file_path(filename: &str) -> PathBuf {
    TEMP_DIR.join(filename)
}

/// Get path for app folder with folder name
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = TEMP_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}

/// Load data from JSON file in app path
pub fn load_json(filename: &str) -> HashMap<String, serde_json::Value> {
    load_json_from(&TEMP_DIR, filename)
}

/// Load data from JSON file under the given folder
pub fn load_json_from(dir: &Path, filename: &str) -> HashMap<String, serde_json::Value> {
    let filepath = dir.join(filename);

    if filepath.exists() {
        if let Ok(content) = fs::read_to_string(&filepath) {
            if let Ok(data) = serde_json::from_str(&content) {
                return data;
            }
        }
    }

    // Save empty JSON and return empty map
    save_json_to(dir, filename, &HashMap::new());
    HashMap::new()
}

/// Save data into JSON file in app path
pub fn save_json(filename: &str, data: &HashMap<String, serde_json::Value>) {
    save_json_to(&TEMP_DIR, filename, data)
}

/// Save data into JSON file under the given folder
pub fn save_json_to(dir: &Path, filename: &str, data: &HashMap<String, serde_json::Value>) {
    let filepath = dir.join(filename);
    if let Ok(json) = serde_json::to_string_pretty(data) {
        let _ = fs::write(filepath, json);
    }
}

/// Round price to price tick value
pub fn round_to(value: f64, target: f64) -> f64 {
    let decimal_value = Decimal::from_f64(value).unwrap_or_default();
    let decimal_target = Decimal::from_f64(target).unwrap_or(Decimal::ONE);

    if decimal_target.is_zero() {
        return value;
    }

    let result = (decimal_value / decimal_target).round() * decimal_target;
    result.to_f64().unwrap_or(value)
}
