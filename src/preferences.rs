//! Theme preference persistence

use crate::Result;
use crate::constants::THEME_PREFERENCE_KEY;
use crate::error::GuidelinesError;
use crate::style::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, trace, warn};

/// Key-value string storage for user preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Answers whether the platform prefers a dark colour scheme
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// Fixed answer, for hosts without a system query
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme {
    pub dark: bool,
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Preferences held only for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Preferences stored as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferenceStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => {
                serde_json::from_str::<PreferenceFile>(&text)
                    .map_err(|e| {
                        GuidelinesError::PreferenceError(format!(
                            "{} is not a preference file: {e}",
                            path.display()
                        ))
                    })?
                    .values
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preference file at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        let file = PreferenceFile {
            values: self.values.clone(),
        };
        let text = serde_json::to_string_pretty(&file)
            .map_err(|e| GuidelinesError::PreferenceError(e.to_string()))?;
        fs::write(&self.path, text)?;
        trace!("Flushed preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Stored theme, else the system preference
pub fn load_theme<S: PreferenceStore, Q: ColorSchemeQuery>(store: &S, system: &Q) -> Theme {
    if let Some(stored) = store.get(THEME_PREFERENCE_KEY) {
        match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => warn!("Ignoring stored theme: {}", e),
        }
    }
    if system.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Persist the theme under its fixed key
pub fn save_theme<S: PreferenceStore>(store: &mut S, theme: Theme) -> Result<()> {
    debug!("Saving theme {}", theme);
    store.set(THEME_PREFERENCE_KEY, &theme.to_string())
}
