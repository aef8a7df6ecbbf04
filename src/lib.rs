pub mod controller;
pub mod preference;
pub mod shell;
pub mod storage;
pub mod theme;

// Export the preference model
pub use preference::ThemePreference;

// Export the shell model and its contract constants
pub use shell::{
    ActivationEvent, BindingId, Shell, Surface, ToggleControl, DARK_THEME_MARKER, THEME_TOGGLE_ID,
};

// Export the controller
pub use controller::{ThemeController, CONTROL_LOOKUP_RETRY_DELAY};

// Export persistence helpers
pub use storage::{
    load_preference, load_setting, load_setting_or, save_preference, save_setting,
    try_load_setting, THEME_KEY,
};

// Export the egui visual mapping
pub use theme::{apply_preference, hex_to_color32, visuals_for};
