use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub window: WindowConfig,
    pub prefs: PrefsConfig,
}

/// Desktop window appearance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Where the per-user preference entries live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrefsConfig {
    pub data_dir: PathBuf,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Folio".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".folio") }
    }
}

impl SiteConfig {
    /// Builds a config from defaults plus environment overrides.
    ///
    /// `FOLIO_DATA_DIR` relocates the preference directory; anything else
    /// falls back to the compiled defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("FOLIO_DATA_DIR") {
            if !dir.is_empty() {
                config.prefs.data_dir = PathBuf::from(dir);
            }
        }
        config
    }
}
