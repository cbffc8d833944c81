// source.rs
use crate::loader::LoadError;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("covid-india-dashboard/", env!("CARGO_PKG_VERSION"));

/// Where a data source lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(Url),
    File(PathBuf),
}

impl SourceLocation {
    /// `http(s)://` and `file://` URLs are taken as such; anything that does
    /// not parse as a URL is a filesystem path.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(SourceLocation::Http(url)),
                "file" => url.to_file_path().map(SourceLocation::File).map_err(|_| {
                    LoadError::UnexpectedShape(format!("file URL has no local path: {raw}"))
                }),
                other => Err(LoadError::UnexpectedShape(format!(
                    "unsupported source scheme '{other}' in {raw}"
                ))),
            },
            Err(_) => Ok(SourceLocation::File(PathBuf::from(raw))),
        }
    }
}

pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Read the whole resource. No retries: a failure here aborts startup.
    pub fn fetch_bytes(&self, raw: &str) -> Result<Vec<u8>, LoadError> {
        let start = Instant::now();

        let bytes = match SourceLocation::parse(raw)? {
            SourceLocation::Http(url) => self.fetch_http(url)?,
            SourceLocation::File(path) => std::fs::read(&path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?,
        };

        tracing::info!(
            source = raw,
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched data source"
        );
        Ok(bytes)
    }

    fn fetch_http(&self, url: Url) -> Result<Vec<u8>, LoadError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Network(format!("HTTP {status} from {url}")));
        }

        let body = resp
            .bytes()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(body.to_vec())
    }
}
