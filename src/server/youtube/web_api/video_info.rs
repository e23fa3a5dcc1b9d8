use crate::{
    data::interface::video::{format_duration, format_views, VideoInfo},
    errors::FetchError,
    server::youtube::model::{CountField, DurationField, RawVideoInfo},
};

use super::request::api_get;

pub(crate) async fn get_video_info(video_id: &str) -> Result<VideoInfo, FetchError> {
    let path = format!("get-video-info/{}", urlencoding::encode(video_id));
    let text = api_get(&path).await?.text().await?;
    let raw: RawVideoInfo = serde_json::from_str(&text)?;
    Ok(into_video_info(raw, video_id))
}

/// Every field falls back instead of failing; the provider has reshaped
/// this payload more than once.
pub(crate) fn into_video_info(raw: RawVideoInfo, video_id: &str) -> VideoInfo {
    let title = raw
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Unknown Title".to_string());

    let thumbnail = raw
        .thumbnail
        .as_ref()
        .and_then(|t| t.best_url())
        .unwrap_or_else(|| format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id));

    let duration = match raw.duration {
        Some(DurationField::Seconds(seconds)) => format_duration(seconds as u64),
        Some(DurationField::Text(text)) if !text.is_empty() => text,
        _ => "0:00".to_string(),
    };

    let views = match raw.view_count.as_ref().and_then(CountField::as_u64) {
        Some(count) => format!("{} views", format_views(count)),
        None => "0 views".to_string(),
    };

    VideoInfo {
        title,
        thumbnail,
        duration,
        views,
        video_id: video_id.to_string(),
        is_short: raw.is_short.unwrap_or(false),
    }
}
