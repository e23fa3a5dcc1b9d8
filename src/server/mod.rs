pub mod youtube;

use crate::data::interface::quality::Quality;
use crate::data::interface::video::{VideoInfo, VideoSource};
use crate::errors::FetchError;

impl VideoInfo {
    /// Fetch metadata and the quality list for one video id.
    ///
    /// The two requests are independent and run concurrently; both must
    /// finish before anything is returned, and either failure fails the
    /// whole lookup.
    pub async fn fetch(video_id: &str) -> Result<(VideoInfo, Vec<Quality>), FetchError> {
        let (info, qualities) = tokio::join!(
            youtube::web_api::video_info::get_video_info(video_id),
            youtube::web_api::quality::get_available_qualities(video_id),
        );
        let info = info.inspect_err(|e| log::error!("Failed to fetch video info: {}", e))?;
        let qualities =
            qualities.inspect_err(|e| log::error!("Failed to fetch qualities: {}", e))?;
        Ok((info, qualities))
    }

    /// Entry point for a user-pasted URL. `watch?v=`, `youtu.be/` and
    /// `shorts/` forms are accepted; anything else is
    /// [`FetchError::InvalidUrl`].
    pub async fn fetch_from_url(url: &str) -> Result<(VideoInfo, Vec<Quality>), FetchError> {
        let source =
            VideoSource::from_url(url).ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;
        let (mut info, qualities) = VideoInfo::fetch(&source.video_id).await?;
        // A `shorts/` URL marks the video even when the metadata payload
        // doesn't carry the flag.
        info.is_short = info.is_short || source.is_short;
        Ok((info, qualities))
    }
}

impl Quality {
    /// Resolve the actual file URL for this entry. Deliberately not done
    /// during listing: resolution is the heavier, rate-limited call on the
    /// remote side, so it runs once per user selection.
    pub async fn resolve_download_url(
        &self,
        video_id: &str,
        is_short: bool,
    ) -> Result<String, FetchError> {
        youtube::web_api::download::resolve_download_url(video_id, self.id, self.kind, is_short)
            .await
    }
}

#[cfg(test)]
mod test {
    use crate::data::interface::video::VideoInfo;
    use crate::errors::FetchError;

    #[tokio::test]
    async fn test_fetch_from_url_rejects_unrecognized_urls() {
        let err = VideoInfo::fetch_from_url("https://example.com/clip/123")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    #[ignore = "requires network and RAPIDAPI_KEY"]
    async fn test_fetch_from_url() {
        let (info, qualities) =
            VideoInfo::fetch_from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
                .await
                .unwrap();
        println!("{:?}", info);
        println!("length:{}", qualities.len());
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
        assert!(!qualities.is_empty());
    }
}
