//! Key-value store capability for the saved theme selection

/// Key under which the selected theme id is stored
pub const SELECTED_THEME_KEY: &str = "selectedTheme";

/// A string key-value store surviving across sessions
///
/// One key is in use: the selected theme id, read once at startup and
/// written on every successful theme change. An absent or unreadable
/// value is reported as `None`, never as an error.
pub trait PersistentKeyStore: Send + Sync {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}
