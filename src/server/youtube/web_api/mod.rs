pub mod download;
pub mod quality;
pub mod request;
pub mod video_info;

#[cfg(test)]
mod youtube_web_api_test {
    use crate::data::interface::quality::MediaKind;

    use super::{download, quality, video_info};

    // These hit the live RapidAPI host and need RAPIDAPI_KEY exported:
    // cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires network and RAPIDAPI_KEY"]
    async fn test_get_available_qualities() {
        let _ = env_logger::builder().is_test(true).try_init();
        let qualities = quality::get_available_qualities("dQw4w9WgXcQ").await.unwrap();
        println!("length:{}", qualities.len());
        for quality in qualities {
            println!("{:?}", quality);
        }
    }

    #[tokio::test]
    #[ignore = "requires network and RAPIDAPI_KEY"]
    async fn test_get_video_info() {
        let info = video_info::get_video_info("dQw4w9WgXcQ").await.unwrap();
        println!("{:?}", info);
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
    }

    #[tokio::test]
    #[ignore = "requires network and RAPIDAPI_KEY"]
    async fn test_resolve_download_url() {
        let qualities = quality::get_available_qualities("dQw4w9WgXcQ").await.unwrap();
        let first = qualities.first().unwrap();
        let url = download::resolve_download_url("dQw4w9WgXcQ", first.id, MediaKind::Video, false)
            .await
            .unwrap();
        println!("{}", url);
        assert!(!url.is_empty());
    }
}
