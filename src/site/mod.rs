//! # Site
//!
//! Turns content documents into a rendered page.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`SectionManager`] | Navigation and section order from `config.json` |
//! | [`ContentRenderer`] | One render operation per content domain |
//! | [`App`] | Sections first, then all renders concurrently |
//!
//! ## Content documents
//!
//! | Document | Written to |
//! |----------|------------|
//! | `config.json` | navigation, main section order |
//! | `intro.json` | `header-content`, `header-social-links`, `social-links`, `about-content` |
//! | `experience.json` | `experience-content` |
//! | `education.json` | `education-content` |
//! | `interests.json` | `interests-content` |
//! | `publications.json` | `publications-content` |
//! | `contact.json` | `contact-content` |

mod app;
pub mod renderer;
mod sections;
pub mod templates;

pub use app::{App, InitReport, StepFailure};
pub use renderer::ContentRenderer;
pub use sections::{SectionManager, ABOUT_SECTION, CONTACT_SECTION};

/// The section configuration document
pub const CONFIG_DOCUMENT: &str = "config.json";

/// Every document read during a render, in load order
pub const CONTENT_DOCUMENTS: &[&str] = &[
    CONFIG_DOCUMENT,
    "intro.json",
    "experience.json",
    "education.json",
    "interests.json",
    "publications.json",
    "contact.json",
];
