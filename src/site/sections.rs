//! Section ordering
//!
//! Reads `config.json` and rearranges the page to match it: the navigation
//! bar is rebuilt and the main element's sections are reordered. About and
//! Contact stay first and last whatever the configuration says.

use crate::domain::{SectionConfig, SiteConfig};
use crate::page::{Page, PageError};
use crate::storage::ContentLoader;

use super::{templates, CONFIG_DOCUMENT};

/// Id of the section pinned to the front of the page
pub const ABOUT_SECTION: &str = "about";

/// Id of the section pinned to the end of the page
pub const CONTACT_SECTION: &str = "contact";

/// Applies `config.json` to a page
#[derive(Debug, Clone)]
pub struct SectionManager {
    loader: ContentLoader,
}

impl SectionManager {
    pub fn new(loader: ContentLoader) -> Self {
        Self { loader }
    }

    /// Loads the section config; `None` when it is absent
    pub async fn load_config(&self) -> Option<SiteConfig> {
        self.loader.load_json(CONFIG_DOCUMENT).await
    }

    /// Rebuilds navigation and section order from `config.json`.
    ///
    /// When the config cannot be loaded the page is left untouched.
    pub async fn setup_sections(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(config) = self.load_config().await else {
            return Ok(());
        };

        let sections = config.visible_sorted();
        tracing::debug!(count = sections.len(), "applying section order");

        self.update_navigation(page, &sections)?;
        self.reorder_sections(page, &sections)
    }

    /// Navigation links are generated for every visible section, whether or
    /// not the page has an element with that id.
    pub fn update_navigation(
        &self,
        page: &dyn Page,
        sections: &[&SectionConfig],
    ) -> Result<(), PageError> {
        page.set_navigation(templates::navigation(sections))
    }

    /// Moves sections into configured order between About and Contact.
    ///
    /// Configured ids with no matching section are skipped.
    pub fn reorder_sections(
        &self,
        page: &dyn Page,
        sections: &[&SectionConfig],
    ) -> Result<(), PageError> {
        page.detach_section(ABOUT_SECTION)?;
        page.detach_section(CONTACT_SECTION)?;

        for section in sections {
            if page.has_section(&section.id) {
                page.append_section(&section.id)?;
            } else {
                tracing::debug!(id = %section.id, "configured section not found on page");
            }
        }

        page.prepend_section(ABOUT_SECTION)?;
        page.append_section(CONTACT_SECTION)
    }
}
