//! folio - a static personal-portfolio renderer
//!
//! folio reads small JSON documents describing a person (intro, experience,
//! education, interests, publications, contact), renders each into its
//! container on a page, and orders the page's sections and navigation
//! according to `config.json`.

pub mod domain;
pub mod page;
pub mod storage;
pub mod site;
pub mod cli;

pub use domain::{ExperienceEntry, IntroData, Position, SectionConfig, SiteConfig};
pub use page::{Document, Layout, Page, PageError};
pub use site::{App, ContentRenderer, InitReport, SectionManager};
pub use storage::{ContentLoader, ContentSource, LoadError};
