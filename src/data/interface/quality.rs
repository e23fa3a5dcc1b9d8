use std::fmt;

use serde::{Deserialize, Serialize};

/// One presentation-ready download option.
///
/// `download_url` stays empty after listing; resolving it is a separate,
/// heavier remote call made only when the user commits to an entry.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    pub id: i64,
    pub kind: MediaKind,
    pub quality: String,
    pub format: FormatTag,
    pub size: String,
    pub bitrate: u64,
    pub download_url: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Video,
    Audio,
}

/// Short container tag derived from a MIME string.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormatTag {
    #[default]
    Mp4,
    M4a,
    Webm,
    Opus,
    Mp3,
}

impl FormatTag {
    /// Ordered substring rules, first match wins. The audio-mp4 rule runs
    /// before the generic mp4 rule: `audio/mp4; codecs=mp4a.40.2` must
    /// label as M4A, not MP4. Absent or unrecognized MIME falls back to
    /// MP4.
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("mp4a") || mime.contains("audio/mp4") {
            FormatTag::M4a
        } else if mime.contains("mp4") {
            FormatTag::Mp4
        } else if mime.contains("webm") {
            FormatTag::Webm
        } else if mime.contains("opus") {
            FormatTag::Opus
        } else if mime.contains("mp3") {
            FormatTag::Mp3
        } else {
            FormatTag::Mp4
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Mp4 => "MP4",
            FormatTag::M4a => "M4A",
            FormatTag::Webm => "WEBM",
            FormatTag::Opus => "OPUS",
            FormatTag::Mp3 => "MP3",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::FormatTag;

    #[test]
    fn test_from_mime_precedence() {
        assert_eq!(
            FormatTag::from_mime("audio/mp4; codecs=mp4a.40.2"),
            FormatTag::M4a
        );
        assert_eq!(
            FormatTag::from_mime("video/mp4; codecs=avc1.640028"),
            FormatTag::Mp4
        );
        assert_eq!(FormatTag::from_mime("video/webm; codecs=vp9"), FormatTag::Webm);
        assert_eq!(FormatTag::from_mime("audio/webm; codecs=opus"), FormatTag::Webm);
        assert_eq!(FormatTag::from_mime("audio/opus"), FormatTag::Opus);
        assert_eq!(FormatTag::from_mime("audio/mp3"), FormatTag::Mp3);
    }

    #[test]
    fn test_from_mime_defaults_to_mp4() {
        assert_eq!(FormatTag::from_mime(""), FormatTag::Mp4);
        assert_eq!(FormatTag::from_mime("application/x-mystery"), FormatTag::Mp4);
    }
}
