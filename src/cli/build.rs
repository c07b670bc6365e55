//! Build and watch commands

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use serde::Serialize;

use super::output::Output;
use crate::page::Document;
use crate::site::{App, StepFailure};
use crate::storage::{resolve_content_root, ContentLoader, Site};

/// Overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub content: Option<String>,
    pub out: Option<PathBuf>,
}

/// What a build produced
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub content_root: String,
    pub sections: Vec<String>,
    pub rendered: bool,
    pub failures: Vec<StepFailure>,
    pub built_at: DateTime<Utc>,
    pub duration_ms: u128,
}

/// Current-thread runtime: renders interleave at their fetches only
pub(super) fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Content root from `--content` (relative to the working directory) or the site
pub(super) fn content_root(site: &Site, content: Option<&str>) -> String {
    match content {
        Some(root) => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            resolve_content_root(&cwd, root)
        }
        None => site.content_root(),
    }
}

fn output_path(site: &Site, opts: &BuildOptions) -> PathBuf {
    opts.out.clone().unwrap_or_else(|| site.output_path())
}

/// Renders the site once and writes the page
pub fn build_once(site: &Site, opts: &BuildOptions) -> Result<BuildSummary> {
    let start = Instant::now();
    let content_root = content_root(site, opts.content.as_deref());
    let output = output_path(site, opts);

    let layout = site.layout()?;
    let document = Document::new(layout);
    let app = App::new(ContentLoader::for_root(&content_root));

    tracing::debug!(content_root = %content_root, "building page");
    let report = runtime()?.block_on(app.init(&document));

    write_page(&output, &document.to_html())?;

    let summary = BuildSummary {
        output,
        content_root,
        sections: document.main_order(),
        rendered: report.rendered,
        failures: report.failures,
        built_at: Utc::now(),
        duration_ms: start.elapsed().as_millis(),
    };
    tracing::info!(
        output = %summary.output.display(),
        failures = summary.failures.len(),
        "page written"
    );
    Ok(summary)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page: {}", path.display()))
}

fn report(output: &Output, summary: &BuildSummary) {
    if output.is_json() {
        output.data(summary);
        return;
    }

    for failure in &summary.failures {
        output.warn(&format!("{}: {}", failure.step, failure.error));
    }
    output.success(&format!(
        "Built {} in {}ms ({} sections)",
        summary.output.display(),
        summary.duration_ms,
        summary.sections.len()
    ));
}

pub fn build(output: &Output, opts: BuildOptions) -> Result<()> {
    let site = Site::open_current()?;
    let summary = build_once(&site, &opts)?;
    report(output, &summary);
    Ok(())
}

/// Builds, then rebuilds whenever content or layout changes
pub fn watch(output: &Output, opts: BuildOptions) -> Result<()> {
    let site = Site::open_current()?;
    let out_path = output_path(&site, &opts);

    report(output, &build_once(&site, &opts)?);

    let (tx, rx) = mpsc::channel();
    let debounce = Duration::from_millis(site.config().site.watch.debounce_ms);
    let mut debouncer = new_debouncer(debounce, tx)?;

    let mut paths = site.watch_paths();
    if let Some(content) = opts.content.as_deref() {
        let configured = PathBuf::from(site.content_root());
        paths.retain(|p| *p != configured);
        if !content.starts_with("http://") && !content.starts_with("https://") {
            paths.push(PathBuf::from(content_root(&site, Some(content))));
        }
    }

    for path in &paths {
        if path.exists() {
            debouncer.watcher().watch(path, RecursiveMode::Recursive)?;
            tracing::debug!(path = %path.display(), "watching");
        }
    }

    output.success(&format!("Watching {} path(s) for changes", paths.len()));

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().filter(|e| e.path != out_path).count();
                if relevant == 0 {
                    continue;
                }

                tracing::debug!(changes = relevant, "rebuilding");
                match build_once(&site, &opts) {
                    Ok(summary) => report(output, &summary),
                    Err(err) => tracing::error!(error = %format!("{:#}", err), "rebuild failed"),
                }
            }
            Ok(Err(error)) => {
                tracing::warn!(error = ?error, "watch error");
            }
            Err(_) => break,
        }
    }

    Ok(())
}
