//! # Storage Layer
//!
//! Where folio reads from and writes to.
//!
//! ## Locations
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Content | JSON | `<content_root>/<name>.json` (directory or URL) |
//! | Settings | TOML | `folio.toml` |
//! | Layout | TOML | `layout.toml` (optional) |
//! | Page | HTML | `index.html` |
//!
//! ## Site Structure
//!
//! ```text
//! site/
//! ├── folio.toml            # Site settings
//! ├── layout.toml           # Page skeleton
//! ├── assets/
//! │   └── content/          # config.json, intro.json, experience.json, ...
//! └── index.html            # Rendered page (generated)
//! ```
//!
//! ## Key Types
//!
//! - [`Site`] - Entry point for a folio site on disk
//! - [`ContentLoader`] - Fetches and parses content documents
//! - [`Config`] - Site and global configuration

mod config;
mod loader;
mod site;

pub use config::{
    resolve_content_root, Config, ConfigError, GlobalConfig, OutputFormat, SiteSettings,
    WatchConfig, DEFAULT_CONTENT_ROOT, SETTINGS_FILE,
};
pub use loader::{
    source_for_root, ContentLoader, ContentSource, DirSource, HttpSource, LoadError, MemorySource,
};
pub use site::{Site, SiteError};
