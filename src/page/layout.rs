//! Page layouts
//!
//! A layout describes the page skeleton the renderer writes into: header
//! and footer containers, and the sections of the main element with the
//! containers each one holds. Layouts are TOML:
//!
//! ```toml
//! title = "Ada Lovelace"
//! stylesheets = ["assets/css/style.css"]
//! header = ["header-content", "header-social-links"]
//! footer = ["social-links"]
//!
//! [[sections]]
//! id = "about"
//! title = "About"
//! containers = ["about-content"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate element id in layout: {0}")]
    DuplicateId(String),
}

/// A section of the main element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub id: String,

    /// Heading shown at the top of the section, and its default nav label
    pub title: String,

    /// Content container ids inside the section
    #[serde(default)]
    pub containers: Vec<String>,
}

impl SectionLayout {
    pub fn new(id: &str, title: &str, containers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            containers: containers.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_header() -> Vec<String> {
    vec!["header-content".to_string(), "header-social-links".to_string()]
}

fn default_footer() -> Vec<String> {
    vec!["social-links".to_string()]
}

/// The page skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub stylesheets: Vec<String>,

    #[serde(default = "default_header")]
    pub header: Vec<String>,

    #[serde(default = "default_footer")]
    pub footer: Vec<String>,

    #[serde(default)]
    pub sections: Vec<SectionLayout>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheets: vec![
                "assets/css/style.css".to_string(),
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css"
                    .to_string(),
            ],
            header: default_header(),
            footer: default_footer(),
            sections: vec![
                SectionLayout::new("about", "About", &["about-content"]),
                SectionLayout::new("experience", "Experience", &["experience-content"]),
                SectionLayout::new("education", "Education", &["education-content"]),
                SectionLayout::new("publications", "Publications", &["publications-content"]),
                SectionLayout::new("interests", "Interests", &["interests-content"]),
                SectionLayout::new("contact", "Contact", &["contact-content"]),
            ],
        }
    }
}

impl Layout {
    /// Parses and validates a TOML layout
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        let layout: Layout = toml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads a layout file
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serializes the layout back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Element ids must be unique across the whole page
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        let ids = self
            .header
            .iter()
            .chain(self.footer.iter())
            .chain(self.sections.iter().flat_map(|s| {
                std::iter::once(&s.id).chain(s.containers.iter())
            }));

        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(LayoutError::DuplicateId(id.clone()));
            }
        }
        Ok(())
    }
}
