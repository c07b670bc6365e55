//! Configuration handling for folio
//!
//! Site settings live in `folio.toml` at the site root. User defaults live
//! in `~/.config/folio/config.toml` (or the platform equivalent).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the site settings file
pub const SETTINGS_FILE: &str = "folio.toml";

/// Content root used when none is configured
pub const DEFAULT_CONTENT_ROOT: &str = "assets/content";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for `folio watch`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Quiet period before a rebuild, in milliseconds
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Site-level settings (`folio.toml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Directory or base URL holding the JSON content documents
    pub content_root: String,

    /// Page layout file; the built-in layout is used when unset
    pub layout: Option<PathBuf>,

    /// Where the rendered page is written
    pub output: PathBuf,

    /// Watch mode settings
    pub watch: WatchConfig,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            content_root: DEFAULT_CONTENT_ROOT.to_string(),
            layout: None,
            output: PathBuf::from("index.html"),
            watch: WatchConfig::default(),
        }
    }
}

impl SiteSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::Invalid("content_root must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output must not be empty".into()));
        }
        Ok(())
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + site)
#[derive(Debug, Clone)]
pub struct Config {
    pub site: SiteSettings,
    pub global: GlobalConfig,
    pub site_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration for the site containing the current directory
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let site_root = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::find_site_root(&cwd));

        let site = match &site_root {
            Some(root) => Self::load_site_config(root)?,
            None => SiteSettings::default(),
        };

        Ok(Self {
            site,
            global,
            site_root,
        })
    }

    /// Loads configuration for a specific site
    pub fn for_site(site_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let site = Self::load_site_config(site_root)?;

        Ok(Self {
            site,
            global,
            site_root: Some(site_root.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads site configuration from a specific root
    pub fn load_site_config(site_root: &Path) -> Result<SiteSettings> {
        let config_path = site_root.join(SETTINGS_FILE);

        if !config_path.exists() {
            return Ok(SiteSettings::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read site config: {}", config_path.display()))?;

        let config: SiteSettings = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse site config")?;
        config.validate()?;
        Ok(config)
    }

    /// Finds the site root by looking for `folio.toml` from `start` upwards
    pub fn find_site_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(SETTINGS_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the site root, falling back to the current directory
    pub fn root_or_cwd(&self) -> PathBuf {
        self.site_root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolves the content root: URLs pass through, paths are site-relative
    pub fn content_root(&self) -> String {
        resolve_content_root(&self.root_or_cwd(), &self.site.content_root)
    }

    /// Resolves the output path against the site root
    pub fn output_path(&self) -> PathBuf {
        self.root_or_cwd().join(&self.site.output)
    }

    /// Resolves the layout path against the site root, if one is configured
    pub fn layout_path(&self) -> Option<PathBuf> {
        self.site
            .layout
            .as_ref()
            .map(|layout| self.root_or_cwd().join(layout))
    }
}

/// Joins a relative content root onto `base`; URLs and absolute paths are kept
pub fn resolve_content_root(base: &Path, root: &str) -> String {
    if root.starts_with("http://") || root.starts_with("https://") {
        return root.to_string();
    }

    let path = Path::new(root);
    if path.is_absolute() {
        root.to_string()
    } else {
        base.join(path).display().to_string()
    }
}
