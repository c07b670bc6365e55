//! Content rendering
//!
//! One operation per content domain. Each loads its document and replaces
//! the content of its own containers; an absent document leaves the
//! containers as they were.

use crate::domain::{
    ContactData, EducationEntry, ExperienceEntry, InterestEntry, IntroData, PublicationEntry,
};
use crate::page::{Page, PageError};
use crate::storage::ContentLoader;

use super::templates;

/// Container ids written by the renderer
pub mod containers {
    pub const HEADER: &str = "header-content";
    pub const HEADER_SOCIAL_LINKS: &str = "header-social-links";
    pub const FOOTER_SOCIAL_LINKS: &str = "social-links";
    pub const ABOUT: &str = "about-content";
    pub const EXPERIENCE: &str = "experience-content";
    pub const EDUCATION: &str = "education-content";
    pub const INTERESTS: &str = "interests-content";
    pub const PUBLICATIONS: &str = "publications-content";
    pub const CONTACT: &str = "contact-content";
}

/// Renders content documents into page containers
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    loader: ContentLoader,
}

impl ContentRenderer {
    pub fn new(loader: ContentLoader) -> Self {
        Self { loader }
    }

    /// Name, tags and location, plus social links in header and footer
    pub async fn render_header(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(intro) = self.loader.load_json::<IntroData>("intro.json").await else {
            return Ok(());
        };

        page.set_inner_html(containers::HEADER, templates::header(&intro))?;

        let links = templates::social_links(&intro.socials);
        page.set_inner_html(containers::HEADER_SOCIAL_LINKS, links.clone())?;
        page.set_inner_html(containers::FOOTER_SOCIAL_LINKS, links)
    }

    pub async fn render_about(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(intro) = self.loader.load_json::<IntroData>("intro.json").await else {
            return Ok(());
        };
        page.set_inner_html(containers::ABOUT, templates::about(&intro))
    }

    pub async fn render_experience(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(entries) = self
            .loader
            .load_json::<Vec<ExperienceEntry>>("experience.json")
            .await
        else {
            return Ok(());
        };
        page.set_inner_html(containers::EXPERIENCE, templates::experience(&entries))
    }

    pub async fn render_education(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(entries) = self
            .loader
            .load_json::<Vec<EducationEntry>>("education.json")
            .await
        else {
            return Ok(());
        };
        page.set_inner_html(containers::EDUCATION, templates::education(&entries))
    }

    pub async fn render_interests(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(entries) = self
            .loader
            .load_json::<Vec<InterestEntry>>("interests.json")
            .await
        else {
            return Ok(());
        };
        page.set_inner_html(containers::INTERESTS, templates::interests(&entries))
    }

    pub async fn render_publications(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(entries) = self
            .loader
            .load_json::<Vec<PublicationEntry>>("publications.json")
            .await
        else {
            return Ok(());
        };
        page.set_inner_html(containers::PUBLICATIONS, templates::publications(&entries))
    }

    pub async fn render_contact(&self, page: &dyn Page) -> Result<(), PageError> {
        let Some(contact) = self.loader.load_json::<ContactData>("contact.json").await else {
            return Ok(());
        };
        page.set_inner_html(containers::CONTACT, templates::contact(&contact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Document, Layout};
    use crate::storage::MemorySource;
    use std::sync::Arc;

    const INTRO: &str = r#"{
        "name": "Ada Lovelace",
        "details": ["Engineer•Writer•Runner", "London"],
        "description": ["Hello.", "More."],
        "socials": [
            {"name":"GitHub","url":"https://github.com/ada","icon":"fa-github"},
            {"name":"LinkedIn","url":"https://linkedin.com/in/ada","icon":"fa-linkedin"}
        ]
    }"#;

    fn renderer(source: MemorySource) -> ContentRenderer {
        ContentRenderer::new(ContentLoader::new(Arc::new(source)))
    }

    #[tokio::test]
    async fn header_fills_both_social_containers() {
        let doc = Document::new(Layout::default());
        renderer(MemorySource::new().with("intro.json", INTRO))
            .render_header(&doc)
            .await
            .unwrap();

        let header = doc.inner_html(containers::HEADER_SOCIAL_LINKS).unwrap();
        let footer = doc.inner_html(containers::FOOTER_SOCIAL_LINKS).unwrap();
        assert_eq!(header, footer);
        assert_eq!(header.matches("<a href=").count(), 2);
        assert!(doc.inner_html(containers::HEADER).unwrap().contains("<h1>Ada Lovelace</h1>"));
    }

    #[tokio::test]
    async fn about_uses_first_paragraph() {
        let doc = Document::new(Layout::default());
        renderer(MemorySource::new().with("intro.json", INTRO))
            .render_about(&doc)
            .await
            .unwrap();

        assert_eq!(doc.inner_html(containers::ABOUT).as_deref(), Some("<p>Hello.</p>"));
    }

    #[tokio::test]
    async fn absent_document_leaves_container_untouched() {
        let doc = Document::new(Layout::default());
        doc.set_inner_html(containers::EDUCATION, "<p>placeholder</p>".into())
            .unwrap();

        renderer(MemorySource::new()).render_education(&doc).await.unwrap();

        assert_eq!(
            doc.inner_html(containers::EDUCATION).as_deref(),
            Some("<p>placeholder</p>")
        );
    }

    #[tokio::test]
    async fn experience_flattens_groups_and_singles() {
        let experience = r#"[
            {"company":"Acme","positions":[
                {"title":"Lead","company":"Acme","location":"Remote","description":["a"],"period":"2022 - now"},
                {"title":"Engineer","company":"Acme","location":"Remote","description":["b"],"startDate":"2019","endDate":"2022"}
            ]},
            {"title":"Intern","company":"Initech","location":"Austin","description":["c"],"startDate":"2018","endDate":"2018"}
        ]"#;

        let doc = Document::new(Layout::default());
        renderer(MemorySource::new().with("experience.json", experience))
            .render_experience(&doc)
            .await
            .unwrap();

        let html = doc.inner_html(containers::EXPERIENCE).unwrap();
        assert_eq!(html.matches(r#"<div class="exp-item">"#).count(), 3);
        let lead = html.find("Lead").unwrap();
        let intern = html.find("Intern").unwrap();
        assert!(lead < intern);
    }

    #[tokio::test]
    async fn missing_container_is_reported() {
        let layout = Layout {
            sections: vec![],
            ..Layout::default()
        };
        let doc = Document::new(layout);

        let err = renderer(MemorySource::new().with(
            "contact.json",
            r#"{"description":"d","email":"e","location":"l","availability":"a"}"#,
        ))
        .render_contact(&doc)
        .await
        .unwrap_err();

        assert!(matches!(err, PageError::MissingElement(id) if id == "contact-content"));
    }
}
