/// Catalog snapshot loading
mod error;
mod types;

pub use error::CatalogError;
pub use types::*;

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};
use url::Url;

/// Where a catalog snapshot is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(Url),
}

impl FromStr for CatalogSource {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CatalogError::UnsupportedSource {
                source_str: s.to_string(),
            });
        }

        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(CatalogSource::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(CatalogSource::File)
                .map_err(|_| CatalogError::UnsupportedSource {
                    source_str: s.to_string(),
                }),
            // Windows drive letters parse as a one-letter scheme
            Ok(url) if url.scheme().len() > 1 => Err(CatalogError::UnsupportedSource {
                source_str: s.to_string(),
            }),
            _ => Ok(CatalogSource::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// Read-only catalog snapshot for one session
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    /// Records dropped because they were malformed or had no sections
    pub skipped: usize,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Finds a course by its departmental and numeric codes (case-insensitive)
    pub fn find(&self, departmental: &str, numeric: &str) -> Option<&Course> {
        self.courses.iter().find(|c| {
            c.code.departmental.eq_ignore_ascii_case(departmental)
                && c.code.numeric.eq_ignore_ascii_case(numeric)
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Parses a catalog document.
///
/// Each record is decoded on its own so one bad course does not take the
/// whole catalog down. Records that fail to decode, and courses without any
/// section, are skipped.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(text)?;
    let total = records.len();

    let mut courses = Vec::with_capacity(total);
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Course>(record) {
            Ok(course) if course.sections.is_empty() => {
                warn!(
                    "Skipping course {} {} (record {}): no sections",
                    course.code.departmental, course.code.numeric, position
                );
            }
            Ok(course) => courses.push(course),
            Err(e) => warn!("Skipping malformed course record {}: {}", position, e),
        }
    }

    let skipped = total - courses.len();
    info!("Parsed {} courses ({} skipped)", courses.len(), skipped);

    Ok(Catalog {
        courses,
        skipped,
        loaded_at: Utc::now(),
    })
}

/// Loads a catalog snapshot from a file or an http(s) URL
pub async fn load_catalog(source: &CatalogSource, client: &Client) -> Result<Catalog, CatalogError> {
    info!("Loading catalog from {}", source);

    let text = match source {
        CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
        CatalogSource::Remote(url) => {
            let response = client.get(url.clone()).send().await?;
            if !response.status().is_success() {
                return Err(CatalogError::UnexpectedResponse {
                    status: response.status().as_u16(),
                });
            }
            response.text().await?
        }
    };

    parse_catalog(&text)
}
