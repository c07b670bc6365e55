//! # Page
//!
//! The page the renderer writes into, seen through a narrow port.
//!
//! Renderers never hold the page's structure; they address elements by id
//! and either replace a container's content or move a section within the
//! main element. Every render operation writes its own disjoint set of
//! containers, so concurrent renders need no coordination beyond what the
//! implementation uses to keep a single write atomic.
//!
//! ## Key Types
//!
//! - [`Page`] - The port trait
//! - [`Document`] - In-memory implementation serialized to static HTML
//! - [`Layout`] - The skeleton a [`Document`] is built from

mod document;
mod layout;

pub use document::Document;
pub use layout::{Layout, LayoutError, SectionLayout};

use thiserror::Error;

/// Failures writing to the page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Element not found: #{0}")]
    MissingElement(String),
}

/// Write access to a page, addressed by element id
pub trait Page: Send + Sync {
    /// Replaces the content of a container
    fn set_inner_html(&self, id: &str, html: String) -> Result<(), PageError>;

    /// Replaces the content of the navigation element
    fn set_navigation(&self, html: String) -> Result<(), PageError>;

    /// Returns true if a section with this id exists, attached or not
    fn has_section(&self, id: &str) -> bool;

    /// Removes a section from the main element, keeping it for re-insertion
    fn detach_section(&self, id: &str) -> Result<(), PageError>;

    /// Moves a section to the end of the main element
    fn append_section(&self, id: &str) -> Result<(), PageError>;

    /// Moves a section to the front of the main element
    fn prepend_section(&self, id: &str) -> Result<(), PageError>;
}
