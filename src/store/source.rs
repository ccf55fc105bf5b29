use std::fs;
use std::io;
use std::path::PathBuf;

/// A pluggable retrieval strategy producing the text of one data source.
///
/// The store never branches on environment; the host picks a strategy and
/// injects it.
pub trait TextSource: Send + Sync {
    /// Fetch the full text of the source.
    fn fetch_text(&self) -> Result<String, SourceError>;

    /// Identifier for log and error messages (path, URL, ...).
    fn origin(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Local-filesystem read.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn fetch_text(&self) -> Result<String, SourceError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// HTTP GET fetch.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl TextSource for HttpSource {
    fn fetch_text(&self) -> Result<String, SourceError> {
        ureq::get(&self.url)
            .call()
            .map_err(|e| SourceError::Http(format!("{}: {e}", self.url)))?
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::Http(format!("{}: {e}", self.url)))
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}

/// Text already in memory — embedded data (`include_str!`) or content the
/// host fetched through its own channels.
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for InlineSource {
    fn fetch_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }

    fn origin(&self) -> String {
        "inline".to_string()
    }
}
