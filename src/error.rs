use thiserror::Error;

/// Custom error types for the harvesting pipeline
#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Error fetching the document {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("Listing is missing its {field}")]
    MissingField { field: &'static str },
    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
