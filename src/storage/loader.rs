//! Content loading
//!
//! Content documents are fetched by name from a content root, which is
//! either a local directory or an HTTP base URL. Any failure is logged and
//! reported to callers as an absent document.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a content document could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {name}: {source}")]
    Http {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {name}: HTTP error! status: {status}")]
    Status { name: String, status: u16 },

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Name of the document that failed
    pub fn name(&self) -> &str {
        match self {
            LoadError::Io { name, .. }
            | LoadError::Http { name, .. }
            | LoadError::Status { name, .. }
            | LoadError::Parse { name, .. } => name,
            LoadError::NotFound(name) => name,
        }
    }
}

/// A place content documents are read from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the raw bytes of the named document
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, for logs and reports
    fn describe(&self) -> String;
}

/// Reads documents from a local directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(name);
        tokio::fs::read(&path).await.map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(name.to_string()),
            _ => LoadError::Io {
                name: name.to_string(),
                source,
            },
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches documents over HTTP relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), name)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        let http_err = |source: reqwest::Error| LoadError::Http {
            name: name.to_string(),
            source,
        };

        let resp = self.client.get(self.url(name)).send().await.map_err(http_err)?;
        if !resp.status().is_success() {
            return Err(LoadError::Status {
                name: name.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(http_err)?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base.clone()
    }
}

/// In-memory documents keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous one with the same name
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.documents.insert(name.into(), body.into());
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(name, body);
        self
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, LoadError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(name.to_string()))
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}

/// Picks the source matching a content root: HTTP for URLs, else a directory
pub fn source_for_root(root: &str) -> Arc<dyn ContentSource> {
    if root.starts_with("http://") || root.starts_with("https://") {
        Arc::new(HttpSource::new(root))
    } else {
        Arc::new(DirSource::new(root))
    }
}

/// Loads and parses content documents
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Creates a loader for a content root path or URL
    pub fn for_root(root: &str) -> Self {
        Self::new(source_for_root(root))
    }

    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    /// Loads and parses a document, returning the failure
    pub async fn try_load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        tracing::debug!(name, source = %self.source.describe(), "loading content");
        let bytes = self.source.fetch(name).await?;
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Loads and parses a document.
    ///
    /// Returns `None` on any failure after logging it; callers skip their
    /// work when the document is absent.
    pub async fn load_json<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        match self.try_load_json(name).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(name, error = %err, "Error loading {}", name);
                None
            }
        }
    }
}

impl std::fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentLoader")
            .field("source", &self.source.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use tempfile::TempDir;

    /// Answers `requests` HTTP requests with a fixed response; returns the base URL
    fn serve(requests: usize, status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming().take(requests) {
                let mut stream = stream.unwrap();
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        format!("http://{}/content", addr)
    }

    fn http_loader(base: String) -> ContentLoader {
        ContentLoader::new(Arc::new(HttpSource {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            base,
        }))
    }

    #[tokio::test]
    async fn loads_from_memory() {
        let loader = ContentLoader::new(Arc::new(
            MemorySource::new().with("contact.json", r#"{"email":"a@b.c"}"#),
        ));

        let value: Value = loader.load_json("contact.json").await.unwrap();
        assert_eq!(value["email"], "a@b.c");
    }

    #[tokio::test]
    async fn missing_document_is_absent() {
        let loader = ContentLoader::new(Arc::new(MemorySource::new()));

        let value: Option<Value> = loader.load_json("intro.json").await;
        assert!(value.is_none());

        let err = loader.try_load_json::<Value>("intro.json").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert_eq!(err.name(), "intro.json");
    }

    #[tokio::test]
    async fn malformed_json_is_absent() {
        let loader = ContentLoader::new(Arc::new(
            MemorySource::new().with("config.json", "{ not json"),
        ));

        assert!(loader.load_json::<Value>("config.json").await.is_none());
        let err = loader.try_load_json::<Value>("config.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_parse_failure() {
        let loader = ContentLoader::new(Arc::new(
            MemorySource::new().with("contact.json", r#"{"email":"a@b.c"}"#),
        ));

        let contact: Option<crate::domain::ContactData> = loader.load_json("contact.json").await;
        assert!(contact.is_none());
    }

    #[tokio::test]
    async fn loads_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("interests.json"), r#"[{"icon":"x","title":"t","description":"d"}]"#)
            .unwrap();

        let loader = ContentLoader::for_root(dir.path().to_str().unwrap());
        let interests: Vec<crate::domain::InterestEntry> =
            loader.load_json("interests.json").await.unwrap();

        assert_eq!(interests.len(), 1);
        assert!(loader.load_json::<Value>("missing.json").await.is_none());
    }

    #[tokio::test]
    async fn http_error_status_is_absent() {
        let loader = http_loader(serve(2, "404 Not Found", "{}"));

        let err = loader.try_load_json::<Value>("intro.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert_eq!(err.name(), "intro.json");

        assert!(loader.load_json::<Value>("intro.json").await.is_none());
    }

    #[tokio::test]
    async fn http_success_is_parsed() {
        let loader = http_loader(serve(1, "200 OK", r#"{"a":1}"#));

        let value: Value = loader.load_json("intro.json").await.unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn url_roots_use_http() {
        let source = source_for_root("https://example.com/assets/content/");
        assert_eq!(source.describe(), "https://example.com/assets/content/");

        let http = HttpSource::new("https://example.com/content/");
        assert_eq!(http.url("intro.json"), "https://example.com/content/intro.json");
    }
}
