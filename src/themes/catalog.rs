//! Theme catalog: built-in entries plus optional TOML-defined themes
//!
//! A theme bundles a display name, a background asset, four audio assets,
//! five color tokens, and a particle preset tag. The catalog is read-only
//! configuration; the coordinator looks themes up but never mutates them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Theme selected when nothing is stored or the stored id is unknown
pub const DEFAULT_THEME_ID: &str = "darkSouls";

/// Particle overlay preset consumed by the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticlePreset {
    Fire,
    Snow,
    #[default]
    None,
}

/// Audio asset references for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSounds {
    pub work: String,
    pub rest: String,
    pub alert: String,
    pub menu: String,
}

/// Color tokens for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub gametitle: String,
    pub primary: String,
    pub text: String,
    pub background_circle: String,
    pub progress_circle: String,
}

/// A complete theme entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub background: String,
    pub sounds: ThemeSounds,
    pub colors: ThemeColors,
    #[serde(default)]
    pub particle_preset: ParticlePreset,
}

/// TOML file layout for user-supplied themes
#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    themes: BTreeMap<String, ThemeConfig>,
}

/// Immutable mapping from theme id to theme entry
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, ThemeConfig>,
}

impl ThemeCatalog {
    /// Create the catalog of built-in themes
    pub fn builtin() -> Self {
        let mut themes = BTreeMap::new();

        themes.insert(
            "darkSouls".to_string(),
            ThemeConfig {
                name: "Dark Souls: Remastered".to_string(),
                background: "darkSouls-bg.jpg".to_string(),
                sounds: ThemeSounds {
                    work: "firelink-shrine.mp3".to_string(),
                    rest: "bonfire-rest.mp3".to_string(),
                    alert: "you-died.mp3".to_string(),
                    menu: "dark-menu.mp3".to_string(),
                },
                colors: ThemeColors {
                    gametitle: "#fff".to_string(),
                    primary: "#6b2b1f".to_string(),
                    text: "#c9c5bb".to_string(),
                    background_circle: "#9b3015".to_string(),
                    progress_circle: "#6b2b1f".to_string(),
                },
                particle_preset: ParticlePreset::Fire,
            },
        );

        themes.insert(
            "shadowColossus".to_string(),
            ThemeConfig {
                name: "Shadow of the Colossus".to_string(),
                background: "shadowColossus-bg.jpg".to_string(),
                sounds: ThemeSounds {
                    work: "sotc-forbidden-lands.mp3".to_string(),
                    rest: "sotc-wander-theme.mp3".to_string(),
                    alert: "sotc-colossus-alert.mp3".to_string(),
                    menu: "shadow-menu.mp3".to_string(),
                },
                colors: ThemeColors {
                    gametitle: "#526762".to_string(),
                    primary: "#565656".to_string(),
                    text: "#DADADA".to_string(),
                    background_circle: "#444444".to_string(),
                    progress_circle: "#A8A8A8".to_string(),
                },
                particle_preset: ParticlePreset::Snow,
            },
        );

        Self { themes }
    }

    /// Merge themes from a TOML file; file entries replace built-ins with the same id
    ///
    /// Returns the number of themes read from the file.
    pub fn merge_from_toml_file(&mut self, path: &Path) -> Result<usize, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let file: ThemeFile = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

        let count = file.themes.len();
        self.themes.extend(file.themes);
        Ok(count)
    }

    /// Look up a theme by id
    pub fn get(&self, theme_id: &str) -> Option<&ThemeConfig> {
        self.themes.get(theme_id)
    }

    /// Check whether a theme id exists
    pub fn contains(&self, theme_id: &str) -> bool {
        self.themes.contains_key(theme_id)
    }

    /// Iterate over all entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ThemeConfig)> {
        self.themes.iter()
    }

    /// Number of themes in the catalog
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_contains_default_theme() {
        let catalog = ThemeCatalog::builtin();
        assert!(catalog.contains(DEFAULT_THEME_ID));

        let theme = catalog.get(DEFAULT_THEME_ID).unwrap();
        assert_eq!(theme.name, "Dark Souls: Remastered");
        assert_eq!(theme.sounds.work, "firelink-shrine.mp3");
        assert_eq!(theme.particle_preset, ParticlePreset::Fire);
    }

    #[test]
    fn unknown_theme_is_absent() {
        let catalog = ThemeCatalog::builtin();
        assert!(catalog.get("eldenRing").is_none());
        assert!(!catalog.contains("eldenRing"));
    }

    #[test]
    fn merge_adds_new_theme_and_replaces_existing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
[themes.eldenRing]
name = "Elden Ring"
background = "eldenRing-bg.jpg"
particle_preset = "none"

[themes.eldenRing.sounds]
work = "limgrave.mp3"
rest = "site-of-grace.mp3"
alert = "enemy-felled.mp3"
menu = "menu-select.mp3"

[themes.eldenRing.colors]
gametitle = "#d4af37"
primary = "#3a3a28"
text = "#e8e6d8"
background_circle = "#22201a"
progress_circle = "#d4af37"

[themes.darkSouls]
name = "Dark Souls III"
background = "darkSouls3-bg.jpg"

[themes.darkSouls.sounds]
work = "firelink-shrine.mp3"
rest = "bonfire-rest.mp3"
alert = "you-died.mp3"
menu = "dark-menu.mp3"

[themes.darkSouls.colors]
gametitle = "#fff"
primary = "#6b2b1f"
text = "#c9c5bb"
background_circle = "#9b3015"
progress_circle = "#6b2b1f"
"##
        )
        .unwrap();

        let mut catalog = ThemeCatalog::builtin();
        let count = catalog.merge_from_toml_file(file.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("eldenRing").unwrap().name, "Elden Ring");
        // a file entry with a built-in id replaces the built-in
        assert_eq!(catalog.get("darkSouls").unwrap().name, "Dark Souls III");
        // particle_preset defaults to none when omitted
        assert_eq!(
            catalog.get("darkSouls").unwrap().particle_preset,
            ParticlePreset::None
        );
    }

    #[test]
    fn merge_reports_unreadable_file() {
        let mut catalog = ThemeCatalog::builtin();
        let result = catalog.merge_from_toml_file(Path::new("/nonexistent/themes.toml"));
        assert!(result.is_err());
        assert_eq!(catalog.len(), 2);
    }
}
