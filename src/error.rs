use thiserror::Error;

/// Errors that can occur while fetching pages from the site.
///
/// Extraction itself never fails: a page without the expected structure
/// produces records with empty fields instead of an error.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to fetch a page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
