use thiserror::Error;

/// Message returned to callers for every failed summarize request.
pub const PROCESSING_FAILED_DETAIL: &str =
    "Failed to process article. Please check the URL and try again.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The single failure surfaced by the summarize pipeline.
///
/// The underlying [`Error`] is logged where it is caught and never carried
/// out to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to process article. Please check the URL and try again.")]
pub struct ProcessingError;

impl ProcessingError {
    pub fn detail(&self) -> &'static str {
        PROCESSING_FAILED_DETAIL
    }
}
