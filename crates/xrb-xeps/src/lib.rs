//! Extension document archive: cached download of the published index plus
//! lookup by number.
//!
//! The index is refetched only when the published entity tag changes; when
//! the upstream server is unreachable the copy on disk answers lookups
//! instead.

use std::{
    fs,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use xrb_core::errors::RemoteQueryError;
use xrb_core::ports::{ExtensionDocsPort, XepDocument};

mod parse;

pub use parse::parse_xeplist;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Freshness state stored beside the cached index document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheState {
    etag: String,
    fetched_at: String,
}

/// HTTP-cached view of the extension document index.
pub struct XepArchive {
    url: String,
    cache_dir: PathBuf,
    http: reqwest::Client,
}

impl XepArchive {
    pub fn new(url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            cache_dir: cache_dir.into(),
            http: reqwest::Client::new(),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.cache_dir.join("xeplist.xml")
    }

    fn state_path(&self) -> PathBuf {
        self.cache_dir.join("state.json")
    }

    fn load_state(&self) -> CacheState {
        read_state(&self.state_path())
    }

    fn store(&self, xml: &str, etag: &str) -> Result<(), ArchiveError> {
        fs::create_dir_all(&self.cache_dir)?;
        fs::write(self.index_path(), xml)?;

        let state = CacheState {
            etag: etag.to_string(),
            fetched_at: Utc::now().to_rfc3339(),
        };
        fs::write(self.state_path(), serde_json::to_string_pretty(&state)?)?;
        Ok(())
    }

    /// The accepted documents of the current index, refreshing the cached
    /// copy when the upstream entity tag changed.
    pub async fn documents(&self) -> Result<Vec<XepDocument>, ArchiveError> {
        let xml = self.refresh().await?;
        parse::parse_xeplist(&xml).map_err(ArchiveError::Parse)
    }

    async fn refresh(&self) -> Result<String, ArchiveError> {
        let state = self.load_state();
        let cached = fs::read_to_string(self.index_path()).ok();

        // Cheap freshness probe before pulling the whole document.
        let probe = self.http.head(&self.url).send().await;
        let reachable = matches!(&probe, Ok(resp) if resp.status().is_success());
        let etag = probe
            .ok()
            .filter(|resp| resp.status().is_success())
            .and_then(|resp| {
                resp.headers()
                    .get(reqwest::header::ETAG)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string())
            });

        if let (Some(cached_xml), Some(tag)) = (&cached, &etag) {
            if !state.etag.is_empty() && *tag == state.etag {
                return Ok(cached_xml.clone());
            }
        }

        if !reachable {
            if let Some(cached_xml) = cached {
                warn!("index probe failed, serving the cached copy");
                return Ok(cached_xml);
            }
        }

        let resp = self.http.get(&self.url).send().await?.error_for_status()?;
        let etag = etag
            .or_else(|| {
                resp.headers()
                    .get(reqwest::header::ETAG)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string())
            })
            .unwrap_or_default();
        let xml = resp.text().await?;
        self.store(&xml, &etag)?;
        debug!(bytes = xml.len(), "refreshed extension document index");
        Ok(xml)
    }
}

fn read_state(path: &Path) -> CacheState {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

#[async_trait]
impl ExtensionDocsPort for XepArchive {
    async fn lookup(&self, number: &str) -> Result<Option<XepDocument>, RemoteQueryError> {
        let number: u32 = number.parse().map_err(|_| {
            RemoteQueryError::new("bad-request", "the requested document id is not a number")
        })?;

        let documents = self
            .documents()
            .await
            .map_err(|e| RemoteQueryError::new("service-unavailable", e.to_string()))?;

        Ok(documents.into_iter().find(|doc| doc.number == number))
    }
}
