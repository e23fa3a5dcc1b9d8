use reqwest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid video url: {0}")]
    InvalidUrl(String),
    #[error("HTTP request failed with status: {0}")]
    RequestFailed(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    UnexpectedBody(#[from] serde_json::Error),
    #[error("download response contained no url")]
    MissingDownloadUrl,
    #[error("RAPIDAPI_KEY is not set")]
    MissingApiKey,
}
