//! End-to-end page tests
//!
//! These tests render complete pages through the library API and pin the
//! structure of the output: section order, navigation, and the markup each
//! content domain produces.

use std::sync::Arc;

use folio::page::{Document, Layout, SectionLayout};
use folio::storage::{ContentLoader, MemorySource};
use folio::App;

fn portfolio_layout() -> Layout {
    Layout {
        title: "Ada Lovelace".to_string(),
        stylesheets: vec!["assets/css/style.css".to_string()],
        header: vec!["header-content".to_string(), "header-social-links".to_string()],
        footer: vec!["social-links".to_string()],
        sections: vec![
            SectionLayout::new("about", "About", &["about-content"]),
            SectionLayout::new("projects", "Projects", &[]),
            SectionLayout::new("skills", "Skills", &[]),
            SectionLayout::new("contact", "Contact", &["contact-content"]),
        ],
    }
}

fn content() -> MemorySource {
    MemorySource::new()
        .with(
            "config.json",
            r#"{"sections":[
                {"id":"projects","title":"Projects","order":2,"visible":true},
                {"id":"skills","title":"Skills","order":1,"visible":true}
            ]}"#,
        )
        .with(
            "intro.json",
            r#"{
                "name": "Ada Lovelace",
                "details": ["Engineer•Writer•Runner", "London"],
                "description": ["Analyst and metaphysician."],
                "socials": [{"name":"GitHub","url":"https://github.com/ada","icon":"fa-github"}]
            }"#,
        )
        .with(
            "contact.json",
            r#"{"description":"Write to me.","email":"ada@example.com","location":"London","availability":"Evenings"}"#,
        )
}

async fn render(layout: Layout, source: MemorySource) -> Document {
    let document = Document::new(layout);
    let report = App::new(ContentLoader::new(Arc::new(source)))
        .init(&document)
        .await;
    assert!(report.is_ok(), "unexpected failures: {:?}", report.failures);
    document
}

#[tokio::test]
async fn configured_order_and_navigation() {
    let document = render(portfolio_layout(), content()).await;

    assert_eq!(document.main_order(), vec!["about", "skills", "projects", "contact"]);
    assert_eq!(
        document.navigation(),
        r##"<a href="#about">About</a><a href="#skills">Skills</a><a href="#projects">Projects</a><a href="#contact">Contact</a>"##
    );

    let html = document.to_html();
    let skills = html.find(r#"<section id="skills">"#).unwrap();
    let projects = html.find(r#"<section id="projects">"#).unwrap();
    let contact = html.find(r#"<section id="contact">"#).unwrap();
    assert!(skills < projects && projects < contact);
}

#[tokio::test]
async fn header_tags_render_in_order() {
    let document = render(portfolio_layout(), content()).await;
    let header = document.inner_html("header-content").unwrap();

    let tags: Vec<&str> = header
        .split(r#"<span class="tag">"#)
        .skip(1)
        .map(|rest| rest.split("</span>").next().unwrap())
        .collect();
    assert_eq!(tags, vec!["Engineer", "Writer", "Runner"]);
}

#[tokio::test]
async fn social_links_appear_in_header_and_footer() {
    let document = render(portfolio_layout(), content()).await;
    let html = document.to_html();

    assert_eq!(html.matches(r#"<i class="fab fa-github"></i>"#).count(), 2);
}

#[tokio::test]
async fn missing_documents_leave_containers_empty() {
    let document = render(portfolio_layout(), content()).await;

    // Only about and contact have containers in this layout, and the
    // renders for absent documents never touch the page.
    assert_eq!(document.inner_html("about-content").as_deref(), Some("<p>Analyst and metaphysician.</p>"));
    assert!(document.inner_html("experience-content").is_none());
}

#[tokio::test]
async fn hidden_sections_keep_default_navigation_out() {
    let source = content().with(
        "config.json",
        r#"{"sections":[
            {"id":"projects","title":"Projects","order":1,"visible":false},
            {"id":"skills","title":"Skills","order":2,"visible":true}
        ]}"#,
    );
    let document = render(portfolio_layout(), source).await;

    assert!(!document.navigation().contains("#projects"));
    assert_eq!(document.main_order(), vec!["about", "projects", "skills", "contact"]);
}
