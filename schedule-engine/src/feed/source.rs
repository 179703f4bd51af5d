//! Sources of raw GTFS table text.
//!
//! The engine does not care where tables come from, only that each arrives as
//! the full text of its file. A source fails fast: any error fetching a table
//! becomes [`FeedError::DataUnavailable`] and no retry happens here.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use super::error::FeedError;

/// Default request timeout for HTTP sources.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The four tables the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Stops,
    Routes,
    Trips,
    StopTimes,
}

impl TableName {
    /// All tables, in load order.
    pub const ALL: [TableName; 4] = [
        TableName::Stops,
        TableName::Routes,
        TableName::Trips,
        TableName::StopTimes,
    ];

    /// Table name without extension, e.g. "stop_times".
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Stops => "stops",
            TableName::Routes => "routes",
            TableName::Trips => "trips",
            TableName::StopTimes => "stop_times",
        }
    }

    /// File name within a GTFS feed, e.g. "stop_times.txt".
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can supply the raw text of a GTFS table.
pub trait TableSource {
    /// Fetch the complete text of one table.
    fn fetch(&self, table: TableName) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Reads tables from `<dir>/<table>.txt`.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a source reading from the given feed directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TableSource for DirSource {
    async fn fetch(&self, table: TableName) -> Result<String, FeedError> {
        let path = self.dir.join(table.file_name());
        debug!(path = %path.display(), "Reading GTFS table");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FeedError::unavailable(table, format!("{}: {}", path.display(), e)))
    }
}

/// Configuration for an HTTP table source.
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL; tables are fetched from `<base_url>/<table>.txt`
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl HttpSourceConfig {
    /// Create a config for the given base URL with the default timeout (30 seconds).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches tables over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a new HTTP source.
    pub fn new(config: HttpSourceConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedError::InvalidSource(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL a table is fetched from.
    pub fn table_url(&self, table: TableName) -> String {
        format!("{}/{}", self.base_url, table.file_name())
    }
}

impl TableSource for HttpSource {
    async fn fetch(&self, table: TableName) -> Result<String, FeedError> {
        let url = self.table_url(table);
        debug!(%url, "Fetching GTFS table");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::unavailable(table, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::unavailable(
                table,
                format!("HTTP {} from {}", status.as_u16(), url),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| FeedError::unavailable(table, e))
    }
}
