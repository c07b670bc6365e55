//! Page initialization
//!
//! Sections are arranged first, then every content domain renders
//! concurrently. Failures are logged and collected, never raised.

use serde::Serialize;

use crate::page::{Page, PageError};
use crate::storage::ContentLoader;

use super::{ContentRenderer, SectionManager};

/// A step of initialization that failed
#[derive(Debug, Clone, Serialize)]
pub struct StepFailure {
    pub step: &'static str,
    pub error: String,
}

/// Outcome of [`App::init`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct InitReport {
    /// False when section setup failed and rendering never started
    pub rendered: bool,
    pub failures: Vec<StepFailure>,
}

impl InitReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, step: &'static str, result: Result<(), PageError>) {
        if let Err(err) = result {
            tracing::error!(step, error = %err, "Error initializing content");
            self.failures.push(StepFailure {
                step,
                error: err.to_string(),
            });
        }
    }
}

/// Orchestrates a full page render
#[derive(Debug, Clone)]
pub struct App {
    sections: SectionManager,
    renderer: ContentRenderer,
}

impl App {
    pub fn new(loader: ContentLoader) -> Self {
        Self {
            sections: SectionManager::new(loader.clone()),
            renderer: ContentRenderer::new(loader),
        }
    }

    /// Arranges sections, then renders all content into `page`.
    ///
    /// Rendering starts only after section setup has finished. If setup
    /// fails, nothing is rendered. A failing render does not affect the
    /// others; the page keeps whatever was written before the failure.
    pub async fn init(&self, page: &dyn Page) -> InitReport {
        let mut report = InitReport::default();

        if let Err(err) = self.sections.setup_sections(page).await {
            report.record("sections", Err(err));
            return report;
        }

        let r = &self.renderer;
        let (header, about, experience, education, interests, publications, contact) = tokio::join!(
            r.render_header(page),
            r.render_about(page),
            r.render_experience(page),
            r.render_education(page),
            r.render_interests(page),
            r.render_publications(page),
            r.render_contact(page),
        );

        report.rendered = true;
        report.record("header", header);
        report.record("about", about);
        report.record("experience", experience);
        report.record("education", education);
        report.record("interests", interests);
        report.record("publications", publications);
        report.record("contact", contact);

        tracing::debug!(failures = report.failures.len(), "content initialized");
        report
    }
}
