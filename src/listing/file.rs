//! Listing read from a local JSON file with the endpoint's response shape.

use super::{ListingFailure, ListingOutcome, ListingSource, parse_listing};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileListingSource {
    path: PathBuf,
}

impl FileListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for FileListingSource {
    async fn fetch(&self) -> ListingOutcome {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ListingFailure::error(format!("{}: {}", self.path.display(), e)))?;
        parse_listing(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listing.json");
        std::fs::write(&path, r#"{"values": ["x.cc"]}"#).unwrap();

        let outcome = FileListingSource::new(&path).fetch().await;
        assert_eq!(outcome, Ok(vec!["x.cc".to_string()]));
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let failure = FileListingSource::new(dir.path().join("absent.json"))
            .fetch()
            .await
            .unwrap_err();
        assert_eq!(failure.status, "error");
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listing.json");
        std::fs::write(&path, "values: [x.cc]").unwrap();

        let failure = FileListingSource::new(&path).fetch().await.unwrap_err();
        assert_eq!(failure.status, "parsererror");
    }
}
