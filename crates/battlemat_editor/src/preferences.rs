//! Editor preferences and persistent settings
//!
//! Preferences are stored as TOML in the platform config directory:
//! - Windows: %APPDATA%/battlemat/
//! - Linux: ~/.config/battlemat/
//! - macOS: ~/Library/Application Support/battlemat/

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::tools::EditorTool;
use crate::viewport::{is_usable_size, Viewport, DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE};

/// Maximum number of recent maps to track
pub const MAX_RECENT_MAPS: usize = 10;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Editor preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Version for future migrations
    pub version: u32,

    pub default_tool: EditorTool,

    // Viewport
    pub tile_size: f64,
    pub min_tile_size: f64,
    pub max_tile_size: f64,

    /// Most recently opened first
    pub recent_maps: Vec<RecentMap>,
}

/// A recently opened map file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentMap {
    pub path: String,
    pub last_opened: u64, // Unix timestamp
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            version: 1,
            default_tool: EditorTool::default(),
            tile_size: DEFAULT_TILE_SIZE,
            min_tile_size: MIN_TILE_SIZE,
            max_tile_size: MAX_TILE_SIZE,
            recent_maps: Vec::new(),
        }
    }
}

impl EditorPreferences {
    /// Path of the preferences file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "battlemat").map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load preferences from the default location, falling back to defaults
    /// when the file is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using default preferences");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(preferences) => preferences,
            Err(err) => {
                log::warn!(
                    "Failed to load preferences from {}: {err}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save preferences to the default location
    pub fn save(&self) -> Result<(), PreferencesError> {
        let path = Self::default_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no config directory available")
        })?;
        self.save_to(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        let text = fs::read_to_string(path)?;
        let mut preferences: Self = toml::from_str(&text)?;
        preferences.reset_unusable_sizes();
        Ok(preferences)
    }

    /// Replace tile sizes that are not positive and finite, and a reversed
    /// zoom range, with the defaults
    fn reset_unusable_sizes(&mut self) {
        if !is_usable_size(self.tile_size) {
            log::warn!(
                "Invalid tile_size {} in preferences, using default",
                self.tile_size
            );
            self.tile_size = DEFAULT_TILE_SIZE;
        }
        let range_ok = is_usable_size(self.min_tile_size)
            && is_usable_size(self.max_tile_size)
            && self.min_tile_size <= self.max_tile_size;
        if !range_ok {
            log::warn!(
                "Invalid zoom range {}..{} in preferences, using default",
                self.min_tile_size,
                self.max_tile_size
            );
            self.min_tile_size = MIN_TILE_SIZE;
            self.max_tile_size = MAX_TILE_SIZE;
        }
    }

    /// Write preferences to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// A viewport using the preferred tile size and zoom limits
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.tile_size, self.min_tile_size, self.max_tile_size)
    }

    /// Add a map to the recent maps list
    pub fn add_recent_map(&mut self, path: &Path) {
        let path_str = path.to_string_lossy().to_string();

        // Remove if already present (re-added at the front)
        self.recent_maps.retain(|m| m.path != path_str);

        self.recent_maps.insert(
            0,
            RecentMap {
                path: path_str,
                last_opened: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
            },
        );

        self.recent_maps.truncate(MAX_RECENT_MAPS);
    }

    /// Remove a map from the recent list (e.g. if the file no longer exists)
    pub fn remove_recent_map(&mut self, path: &str) {
        self.recent_maps.retain(|m| m.path != path);
    }

    /// The most recently opened map
    pub fn last_map(&self) -> Option<&RecentMap> {
        self.recent_maps.first()
    }

    pub fn clear_recent_maps(&mut self) {
        self.recent_maps.clear();
    }
}
