use std::env;

use once_cell::sync::Lazy;

use crate::{errors::FetchError, CLIENT};

/// RapidAPI application key, read once from the environment. The key is a
/// secret; requests fail with [`FetchError::MissingApiKey`] when it is not
/// set.
pub static API_KEY: Lazy<Option<String>> = Lazy::new(|| env::var("RAPIDAPI_KEY").ok());

/// RapidAPI host. Overridable because the provider has renamed endpoints
/// between revisions; the header must always match the request host.
pub static API_HOST: Lazy<String> = Lazy::new(|| {
    env::var("RAPIDAPI_HOST")
        .unwrap_or_else(|_| "youtube-video-fast-downloader-24-7.p.rapidapi.com".to_string())
});

/// GET `https://{host}/{path}` with the RapidAPI auth headers. Non-2xx
/// statuses are surfaced as [`FetchError::RequestFailed`] before the body
/// is touched.
pub(crate) async fn api_get(path: &str) -> Result<reqwest::Response, FetchError> {
    let key = API_KEY.as_deref().ok_or(FetchError::MissingApiKey)?;
    let url = format!("https://{}/{}", API_HOST.as_str(), path);
    let response = CLIENT
        .get(&url)
        .header("x-rapidapi-key", key)
        .header("x-rapidapi-host", API_HOST.as_str())
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(FetchError::RequestFailed(response.status()));
    }
    Ok(response)
}
