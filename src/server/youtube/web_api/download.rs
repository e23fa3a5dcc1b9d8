use serde::Deserialize;

use crate::{data::interface::quality::MediaKind, errors::FetchError};

use super::request::api_get;

/// The download endpoints have served two body shapes: a JSON object
/// carrying the link under `file` or `downloadUrl`, and the bare link as
/// plain text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DownloadResponse {
    Object {
        #[serde(default)]
        file: Option<String>,
        #[serde(default, alias = "downloadUrl")]
        download_url: Option<String>,
    },
    Link(String),
}

/// Resolve the actual file URL for one chosen entry. Audio goes through
/// `download_audio`; video goes through `download_short` or
/// `download_video` depending on the shorts flag.
pub(crate) async fn resolve_download_url(
    video_id: &str,
    quality_id: i64,
    kind: MediaKind,
    is_short: bool,
) -> Result<String, FetchError> {
    let endpoint = match kind {
        MediaKind::Audio => "download_audio",
        MediaKind::Video if is_short => "download_short",
        MediaKind::Video => "download_video",
    };
    let path = format!(
        "{}/{}?quality={}",
        endpoint,
        urlencoding::encode(video_id),
        quality_id
    );
    let body = api_get(&path).await?.text().await?;
    extract_url(&body).ok_or(FetchError::MissingDownloadUrl)
}

fn extract_url(body: &str) -> Option<String> {
    match serde_json::from_str::<DownloadResponse>(body) {
        Ok(DownloadResponse::Object { file, download_url }) => file
            .filter(|url| !url.is_empty())
            .or_else(|| download_url.filter(|url| !url.is_empty())),
        Ok(DownloadResponse::Link(link)) => Some(link).filter(|url| !url.is_empty()),
        // Not JSON at all: the body itself is the link.
        Err(_) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}
