//! Section configuration
//!
//! `config.json` lists the reorderable page sections. About and Contact are
//! fixed anchors and never appear here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One configurable page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Identifier of the section element in the page
    pub id: String,

    /// Navigation label
    pub title: String,

    /// Sort key, ascending
    pub order: f64,

    /// Hidden sections are left out of navigation and reordering
    pub visible: bool,
}

/// The `config.json` document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub sections: Vec<SectionConfig>,
}

impl SiteConfig {
    /// Returns the visible sections sorted by `order`.
    ///
    /// The sort is stable: sections with equal `order` keep their input order.
    /// `-0.0` and `0.0` compare equal.
    pub fn visible_sorted(&self) -> Vec<&SectionConfig> {
        let mut sections: Vec<&SectionConfig> =
            self.sections.iter().filter(|s| s.visible).collect();
        sections.sort_by(|a, b| a.order.partial_cmp(&b.order).unwrap_or(Ordering::Equal));
        sections
    }
}
