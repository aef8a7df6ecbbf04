//! Preference and settings persistence over `eframe::Storage`.
//!
//! The theme preference is stored as a raw string so the on-disk value stays
//! exactly `"dark"` or `"light"`; auxiliary settings go through the typed
//! JSON helpers.

use serde::{Deserialize, Serialize};

use crate::preference::ThemePreference;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Loads the theme preference. Absent storage, an absent key, and an
/// unrecognized value all yield `Light`.
pub fn load_preference(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
    storage
        .and_then(|storage| storage.get_string(THEME_KEY))
        .map(|value| ThemePreference::from_stored(&value))
        .unwrap_or_default()
}

/// Writes the theme preference and flushes the store.
pub fn save_preference(storage: &mut dyn eframe::Storage, preference: ThemePreference) {
    storage.set_string(THEME_KEY, preference.as_str().to_string());
    storage.flush();
}

/// Loads a JSON-encoded setting, falling back to the type's default when the
/// key is missing or does not decode.
pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
{
    try_load_setting(storage, key).unwrap_or_default()
}

/// Loads a JSON-encoded setting with an explicit fallback.
pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
where
    T: for<'de> Deserialize<'de>,
{
    try_load_setting(storage, key).unwrap_or(default)
}

/// Loads a JSON-encoded setting, or `None` when missing or invalid.
pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
{
    let json = storage?.get_string(key)?;
    serde_json::from_str(&json).ok()
}

/// Saves a JSON-encoded setting and flushes the store.
pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
where
    T: Serialize,
{
    if let Ok(json) = serde_json::to_string(value) {
        storage.set_string(key, json);
        storage.flush();
    }
}
