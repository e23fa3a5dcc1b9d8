use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Human-readable metadata for one video. Fetched independently of the
/// quality list; the two only share `video_id`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub views: String,
    pub video_id: String,
    pub is_short: bool,
}

/// Video reference extracted from a user-pasted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub video_id: String,
    pub is_short: bool,
}

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([^&\n?#/]+)").unwrap()
});

impl VideoSource {
    /// Accepts the `watch?v=`, `youtu.be/` and `shorts/` URL forms. The
    /// shorts form marks the source as a short, which selects a different
    /// download endpoint later.
    pub fn from_url(url: &str) -> Option<VideoSource> {
        let captures = VIDEO_ID.captures(url)?;
        let video_id = captures.get(1)?.as_str().to_string();
        let is_short = captures.get(0)?.as_str().contains("/shorts/");
        Some(VideoSource { video_id, is_short })
    }
}

pub(crate) fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

pub(crate) fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::{format_duration, format_views, VideoSource};

    #[test]
    fn test_from_url_watch_form() {
        let source = VideoSource::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(source.video_id, "dQw4w9WgXcQ");
        assert!(!source.is_short);
    }

    #[test]
    fn test_from_url_keeps_id_only() {
        let source =
            VideoSource::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(source.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_from_url_short_link() {
        let source = VideoSource::from_url("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap();
        assert_eq!(source.video_id, "dQw4w9WgXcQ");
        assert!(!source.is_short);
    }

    #[test]
    fn test_from_url_shorts_form() {
        let source = VideoSource::from_url("https://www.youtube.com/shorts/AbCdEf12345").unwrap();
        assert_eq!(source.video_id, "AbCdEf12345");
        assert!(source.is_short);
    }

    #[test]
    fn test_from_url_rejects_other_urls() {
        assert!(VideoSource::from_url("https://example.com/watch?v=dQw4w9WgXcQ").is_none());
        assert!(VideoSource::from_url("not a url").is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(225), "3:45");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_200), "1.2K");
        assert_eq!(format_views(1_234_567), "1.2M");
    }
}
