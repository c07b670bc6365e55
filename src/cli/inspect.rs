//! Inspection commands (sections, check)
//!
//! Neither command writes the page.

use anyhow::Result;
use serde::Serialize;

use super::build::{content_root, runtime};
use super::output::Output;
use crate::domain::{
    ContactData, EducationEntry, ExperienceEntry, InterestEntry, IntroData, PublicationEntry,
    SiteConfig,
};
use crate::site::{templates, CONFIG_DOCUMENT, CONTENT_DOCUMENTS};
use crate::storage::{ContentLoader, LoadError, Site};

/// Show the navigation order `config.json` produces
pub fn sections(output: &Output, content: Option<&str>) -> Result<()> {
    let site = Site::open_current()?;
    let loader = loader_for(&site, content);

    let config = runtime()?.block_on(loader.try_load_json::<SiteConfig>(CONFIG_DOCUMENT));
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            output.warn(&format!("{}; the page keeps its default order", err));
            if output.is_json() {
                output.data(&serde_json::json!({ "configured": false, "error": err.to_string() }));
            }
            return Ok(());
        }
    };

    let visible = config.visible_sorted();

    if output.is_json() {
        let items: Vec<_> = visible
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "title": s.title,
                    "order": s.order,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "configured": true,
            "navigation": templates::navigation(&visible),
            "sections": items,
        }));
    } else {
        println!("{:<4} {:<20} TITLE", "#", "ID");
        println!("{}", "-".repeat(50));
        println!("{:<4} {:<20} About", "", "about");
        for (i, section) in visible.iter().enumerate() {
            println!("{:<4} {:<20} {}", i + 1, section.id, section.title);
        }
        println!("{:<4} {:<20} Contact", "", "contact");

        let hidden = config.sections.len() - visible.len();
        if hidden > 0 {
            println!();
            println!("{} hidden section(s)", hidden);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct DocumentStatus {
    name: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parses a document with the type its renderer expects
async fn probe(loader: &ContentLoader, name: &str) -> Result<(), LoadError> {
    match name {
        "config.json" => loader.try_load_json::<SiteConfig>(name).await.map(drop),
        "intro.json" => loader.try_load_json::<IntroData>(name).await.map(drop),
        "experience.json" => loader.try_load_json::<Vec<ExperienceEntry>>(name).await.map(drop),
        "education.json" => loader.try_load_json::<Vec<EducationEntry>>(name).await.map(drop),
        "interests.json" => loader.try_load_json::<Vec<InterestEntry>>(name).await.map(drop),
        "publications.json" => loader.try_load_json::<Vec<PublicationEntry>>(name).await.map(drop),
        "contact.json" => loader.try_load_json::<ContactData>(name).await.map(drop),
        _ => loader.try_load_json::<serde_json::Value>(name).await.map(drop),
    }
}

/// Try every content document and report which would be skipped
pub fn check(output: &Output, content: Option<&str>) -> Result<()> {
    let site = Site::open_current()?;
    let loader = loader_for(&site, content);

    let statuses: Vec<DocumentStatus> = runtime()?.block_on(async {
        let mut statuses = Vec::with_capacity(CONTENT_DOCUMENTS.len());
        for &name in CONTENT_DOCUMENTS {
            let result = probe(&loader, name).await;
            statuses.push(DocumentStatus {
                name,
                ok: result.is_ok(),
                error: result.err().map(|e| e.to_string()),
            });
        }
        statuses
    });

    let failed = statuses.iter().filter(|s| !s.ok).count();

    if output.is_json() {
        output.data(&serde_json::json!({
            "content_root": loader.source().describe(),
            "documents": statuses,
            "failed": failed,
        }));
    } else {
        println!("Content root: {}", loader.source().describe());
        for status in &statuses {
            match &status.error {
                None => println!("  ok      {}", status.name),
                Some(err) => println!("  FAILED  {} ({})", status.name, err),
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} content document(s) failed to load", failed, statuses.len());
    }

    if !output.is_json() {
        output.success("All content documents load");
    }
    Ok(())
}

fn loader_for(site: &Site, content: Option<&str>) -> ContentLoader {
    ContentLoader::for_root(&content_root(site, content))
}
