//! Site management
//!
//! Handles site initialization and resolves where content, layout and
//! output live.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, ContentLoader, DEFAULT_CONTENT_ROOT, SETTINGS_FILE};
use crate::page::Layout;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Not in a folio site. Run 'folio init' first.")]
    NotInSite,
}

const DEFAULT_SETTINGS: &str = r#"# folio site settings

# Directory (relative to this file) or http(s) URL holding the content documents
content_root = "assets/content"

# Page skeleton; remove to use the built-in layout
layout = "layout.toml"

# Rendered page
output = "index.html"

[watch]
# Quiet period before rebuilding, in milliseconds
debounce_ms = 300
"#;

const SAMPLE_CONTENT: &[(&str, &str)] = &[
    (
        "config.json",
        r#"{
  "sections": [
    { "id": "experience", "title": "Experience", "order": 1, "visible": true },
    { "id": "publications", "title": "Publications", "order": 2, "visible": true },
    { "id": "education", "title": "Education", "order": 3, "visible": true },
    { "id": "interests", "title": "Interests", "order": 4, "visible": true }
  ]
}
"#,
    ),
    (
        "intro.json",
        r#"{
  "name": "Your Name",
  "details": ["Engineer•Writer", "Somewhere, Earth"],
  "description": ["A short introduction about yourself."],
  "socials": [
    { "name": "GitHub", "url": "https://github.com/", "icon": "fa-github" }
  ]
}
"#,
    ),
    (
        "experience.json",
        r#"[
  {
    "title": "Software Engineer",
    "company": "Company",
    "location": "Remote",
    "startDate": "2020",
    "endDate": "Present",
    "description": ["What you worked on."],
    "technologies": ["Rust"]
  }
]
"#,
    ),
    (
        "education.json",
        r#"[
  {
    "title": "BSc Computer Science",
    "institution": "University",
    "startDate": "2016",
    "endDate": "2020",
    "description": ["Thesis or highlights."]
  }
]
"#,
    ),
    (
        "interests.json",
        r#"[
  { "icon": "📚", "title": "Reading", "description": "Books worth recommending." }
]
"#,
    ),
    ("publications.json", "[]\n"),
    (
        "contact.json",
        r#"{
  "description": "Feel free to reach out.",
  "email": "you@example.com",
  "location": "Somewhere, Earth",
  "availability": "Open to new opportunities"
}
"#,
    ),
];

/// A folio site on disk
pub struct Site {
    root: PathBuf,
    config: Config,
}

impl Site {
    /// Opens an existing site at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(SETTINGS_FILE).is_file() {
            return Err(SiteError::NotInSite.into());
        }

        let config = Config::for_site(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the site at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let root = Config::find_site_root(&cwd).ok_or(SiteError::NotInSite)?;

        Self::open(root)
    }

    /// Initializes a new site at the given path.
    ///
    /// Existing files are left alone, so running it twice is harmless.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        let content_dir = root.join(DEFAULT_CONTENT_ROOT);
        fs::create_dir_all(&content_dir).with_context(|| {
            format!(
                "Failed to create content directory: {}",
                content_dir.display()
            )
        })?;

        write_if_missing(&root.join(SETTINGS_FILE), DEFAULT_SETTINGS)?;

        let layout = Layout::default()
            .to_toml()
            .context("Failed to serialize default layout")?;
        write_if_missing(&root.join("layout.toml"), &layout)?;

        for (name, body) in SAMPLE_CONTENT {
            write_if_missing(&content_dir.join(name), body)?;
        }

        Self::open(root)
    }

    /// Returns the site root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the content root, resolved against the site root
    pub fn content_root(&self) -> String {
        self.config.content_root()
    }

    /// Returns a loader for the configured content root
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::for_root(&self.content_root())
    }

    /// Loads the configured layout, or the built-in one
    pub fn layout(&self) -> Result<Layout> {
        match self.config.layout_path() {
            Some(path) => Layout::load(&path)
                .with_context(|| format!("Failed to load layout: {}", path.display())),
            None => Ok(Layout::default()),
        }
    }

    /// Returns where the rendered page is written
    pub fn output_path(&self) -> PathBuf {
        self.config.output_path()
    }

    /// Paths whose changes should trigger a rebuild
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        let content_root = self.content_root();
        if !content_root.starts_with("http://") && !content_root.starts_with("https://") {
            paths.push(PathBuf::from(content_root));
        }
        if let Some(layout) = self.config.layout_path() {
            paths.push(layout);
        }
        paths.push(self.root.join(SETTINGS_FILE));
        paths
    }
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
