//! # Portal configuration
//!
//! ## Purpose
//! Persistent JSON configuration of the chemistry portal: site texts and logos, colour theme,
//! enabled plugins, home-page tiles. The same file also works as a small key -> document store.
//!
//! ## Architecture
//! - **PortalConfig**: serializable configuration with the portal defaults
//! - **ConfigManager**: loads, updates and saves the configuration file
//! - **Global Access**: `OnceLock<Mutex<ConfigManager>>` with closure helpers
//!
//! ## Configuration Format
//! ```json
//! {
//!   "theme": "light",
//!   "site_title": "Science Portal",
//!   "site_description": "Interactive science platform",
//!   "site_logo_light": "/static/images/logo-light.png",
//!   "site_logo_dark": "/static/images/logo-dark.png",
//!   "enabled_plugins": ["periodic_table", "le_chatelier"],
//!   "tiles": []
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use ChemPortal::portal_config::with_config_manager;
//!
//! let enabled = with_config_manager(|manager| manager.is_plugin_enabled("periodic_table"));
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "data/config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration update must be a json object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub theme: String,
    pub site_title: String,
    pub site_description: String,
    pub site_logo_light: String,
    pub site_logo_dark: String,
    pub enabled_plugins: Vec<String>,
    pub tiles: Vec<Value>,
    /// any other documents kept in the same file
    #[serde(flatten)]
    pub documents: Map<String, Value>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            site_title: "Science Portal".to_string(),
            site_description: "Interactive science platform".to_string(),
            site_logo_light: "/static/images/logo-light.png".to_string(),
            site_logo_dark: "/static/images/logo-dark.png".to_string(),
            enabled_plugins: vec!["periodic_table".to_string(), "le_chatelier".to_string()],
            tiles: Vec::new(),
            documents: Map::new(),
        }
    }
}

const KNOWN_KEYS: [&str; 7] = [
    "theme",
    "site_title",
    "site_description",
    "site_logo_light",
    "site_logo_dark",
    "enabled_plugins",
    "tiles",
];

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PortalConfig,
    config_file: String,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Reads `data/config.json`, falling back to defaults if it is missing or broken
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = Self::load_config(config_file).unwrap_or_else(|err| {
            warn!("{}: {}, using default configuration", config_file, err);
            PortalConfig::default()
        });
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<PortalConfig, ConfigError> {
        if !Path::new(config_file).exists() {
            return Ok(PortalConfig::default());
        }
        let content = fs::read_to_string(config_file)?;
        if content.trim().is_empty() {
            return Ok(PortalConfig::default());
        }
        let config = serde_json::from_str(&content)?;
        info!("configuration loaded from {}", config_file);
        Ok(config)
    }

    pub fn save_config(&self) -> Result<(), ConfigError> {
        if let Some(parent) = Path::new(&self.config_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        info!("configuration saved to {}", self.config_file);
        Ok(())
    }

    pub fn get_config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Merges the known keys of a partial json object into the configuration and saves it.
    /// Unknown keys are reported and skipped.
    pub fn update(&mut self, partial: &Value) -> Result<(), ConfigError> {
        let Some(updates) = partial.as_object() else {
            return Err(ConfigError::NotAnObject);
        };
        let mut merged = serde_json::to_value(&self.config)?;
        for (key, value) in updates {
            if KNOWN_KEYS.contains(&key.as_str()) {
                merged[key.as_str()] = value.clone();
            } else {
                warn!("unknown configuration key '{}' ignored", key);
            }
        }
        // validate the whole document before touching the current configuration
        self.config = serde_json::from_value(merged)?;
        self.save_config()
    }

    pub fn is_plugin_enabled(&self, plugin_id: &str) -> bool {
        self.config.enabled_plugins.iter().any(|id| id == plugin_id)
    }

    /// Flips the plugin state, saves, and returns whether the plugin is enabled now
    pub fn toggle_plugin(&mut self, plugin_id: &str) -> Result<bool, ConfigError> {
        let enabled = if self.is_plugin_enabled(plugin_id) {
            self.config.enabled_plugins.retain(|id| id != plugin_id);
            false
        } else {
            self.config.enabled_plugins.push(plugin_id.to_string());
            true
        };
        info!("plugin {} enabled: {}", plugin_id, enabled);
        self.save_config()?;
        Ok(enabled)
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), ConfigError> {
        self.config = PortalConfig::default();
        self.save_config()
    }

    /// Document stored under `key`, known configuration keys included
    pub fn load_document(&self, key: &str) -> Option<Value> {
        serde_json::to_value(&self.config)
            .ok()
            .and_then(|config| config.get(key).cloned())
    }

    pub fn save_document(&mut self, key: &str, document: Value) -> Result<(), ConfigError> {
        let mut merged = serde_json::to_value(&self.config)?;
        merged[key] = document;
        self.config = serde_json::from_value(merged)?;
        self.save_config()
    }
}

static GLOBAL_CONFIG_MANAGER: OnceLock<Mutex<ConfigManager>> = OnceLock::new();

/// Guard on the process-wide manager. A poisoned lock is taken over: the configuration
/// is plain data and stays consistent after a panicking reader.
pub fn get_config_manager() -> MutexGuard<'static, ConfigManager> {
    GLOBAL_CONFIG_MANAGER
        .get_or_init(|| Mutex::new(ConfigManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn with_config_manager<F, R>(f: F) -> R
where
    F: FnOnce(&ConfigManager) -> R,
{
    let manager = get_config_manager();
    f(&manager)
}

pub fn with_config_manager_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConfigManager) -> R,
{
    let mut manager = get_config_manager();
    f(&mut manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manager_on(file: &NamedTempFile) -> ConfigManager {
        ConfigManager::with_config_file(file.path().to_str().unwrap())
    }

    #[test]
    fn test_defaults_for_missing_and_empty_files() {
        let manager = ConfigManager::with_config_file("no/such/dir/config.json");
        assert_eq!(manager.get_config(), &PortalConfig::default());
        assert!(manager.is_plugin_enabled("periodic_table"));
        assert!(manager.is_plugin_enabled("le_chatelier"));
        assert!(!manager.is_plugin_enabled("Ionic_equation"));

        let empty = NamedTempFile::new().unwrap();
        assert_eq!(manager_on(&empty).get_config().theme, "light");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"theme": "dark", "posts_seen": 3}"#).unwrap();
        let manager = manager_on(&file);
        assert_eq!(manager.get_config().theme, "dark");
        assert_eq!(manager.get_config().site_title, "Science Portal");
        assert_eq!(manager.load_document("posts_seen"), Some(json!(3)));
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert_eq!(manager_on(&file).get_config(), &PortalConfig::default());
    }

    #[test]
    fn test_toggle_plugin_persists() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = manager_on(&file);
        assert!(manager.toggle_plugin("Ionic_equation").unwrap());
        assert!(!manager.toggle_plugin("le_chatelier").unwrap());

        let reloaded = manager_on(&file);
        assert_eq!(
            reloaded.get_config().enabled_plugins,
            vec!["periodic_table", "Ionic_equation"]
        );
    }

    #[test]
    fn test_update_merges_known_keys() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = manager_on(&file);
        manager
            .update(&json!({"theme": "dark", "site_title": "Chemistry", "bogus": 1}))
            .unwrap();
        assert_eq!(manager.get_config().theme, "dark");
        assert_eq!(manager.get_config().site_title, "Chemistry");
        assert_eq!(manager.load_document("bogus"), None);

        assert!(matches!(
            manager.update(&json!(["theme"])),
            Err(ConfigError::NotAnObject)
        ));
        // wrong type leaves the configuration untouched
        assert!(manager.update(&json!({"tiles": "none"})).is_err());
        assert!(manager.get_config().tiles.is_empty());

        let reloaded = manager_on(&file);
        assert_eq!(reloaded.get_config().site_title, "Chemistry");
    }

    #[test]
    fn test_documents_and_reset() {
        let file = NamedTempFile::new().unwrap();
        let mut manager = manager_on(&file);
        let tiles = json!([{"title": "Periodic table", "plugin": "periodic_table"}]);
        manager.save_document("tiles", tiles.clone()).unwrap();
        manager
            .save_document("stats", json!({"visits": 10}))
            .unwrap();
        assert_eq!(manager.get_config().tiles.len(), 1);

        let reloaded = manager_on(&file);
        assert_eq!(reloaded.load_document("tiles"), Some(tiles));
        assert_eq!(reloaded.load_document("stats"), Some(json!({"visits": 10})));
        assert_eq!(reloaded.load_document("missing"), None);

        manager.reset_to_defaults().unwrap();
        assert_eq!(manager_on(&file).get_config(), &PortalConfig::default());
    }

    #[test]
    fn test_global_access() {
        let title = with_config_manager(|manager| manager.get_config().site_title.clone());
        assert!(!title.is_empty());
        let file = with_config_manager_mut(|manager| manager.config_file().to_string());
        assert_eq!(file, DEFAULT_CONFIG_FILE);
    }
}
