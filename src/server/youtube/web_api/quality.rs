use std::cmp::Reverse;
use std::collections::HashMap;

use serde_json::Value;

use crate::{
    data::interface::quality::{FormatTag, MediaKind, Quality},
    errors::FetchError,
    server::youtube::model::RawFormat,
};

use super::request::api_get;

/// Advertised bitrate ceiling for the synthesized compressed-audio entry.
const COMPRESSED_AUDIO_BITRATE_CAP: u64 = 320_000;

/// Estimated size of the compressed rendition relative to its source.
const COMPRESSED_AUDIO_SIZE_RATIO: f64 = 0.8;

/// Quality label of the synthesized entry. Never produced by the remote
/// API, so it cannot collide with a native entry in dedup.
const COMPRESSED_AUDIO_LABEL: &str = "High Quality";

pub(crate) async fn get_available_qualities(video_id: &str) -> Result<Vec<Quality>, FetchError> {
    let path = format!("get_available_quality/{}", urlencoding::encode(video_id));
    let text = api_get(&path).await?.text().await?;
    let items: Vec<Value> = serde_json::from_str(&text)?;
    Ok(process_qualities(RawFormat::parse_list(items)))
}

/// Deduplicate, synthesize the compressed-audio entry, and rank raw
/// records into presentation order. Pure and total: malformed fields
/// degrade to defaults, never to an error. An empty input yields an empty
/// output.
pub(crate) fn process_qualities(raw: Vec<RawFormat>) -> Vec<Quality> {
    // One survivor per (kind, quality label); the highest bitrate wins and
    // equal bitrates keep the record seen first.
    let mut survivors: Vec<RawFormat> = Vec::with_capacity(raw.len());
    let mut by_key: HashMap<(MediaKind, String), usize> = HashMap::new();
    for record in raw {
        let key = (record.kind, record.quality_label());
        match by_key.get(&key) {
            Some(&at) if record.bitrate_bps() > survivors[at].bitrate_bps() => {
                survivors[at] = record;
            }
            Some(_) => {}
            None => {
                by_key.insert(key, survivors.len());
                survivors.push(record);
            }
        }
    }

    let compressed = synthesize_compressed_audio(&survivors);

    let mut qualities: Vec<Quality> = survivors.into_iter().map(into_quality).collect();
    qualities.extend(compressed);

    // Video block before audio block; within video, resolution rank then
    // bitrate, both descending; within audio (rank 0 across the board),
    // bitrate descending. The sort is stable, so full ties keep first-seen
    // order.
    qualities.sort_by_key(|q| {
        let kind_rank: u8 = match q.kind {
            MediaKind::Video => 0,
            MediaKind::Audio => 1,
        };
        (kind_rank, Reverse(resolution_rank(&q.quality)), Reverse(q.bitrate))
    });
    qualities
}

/// One extra entry derived from the loudest native audio survivor: same
/// id (it resolves through the same download path), sentinel quality
/// label, MP3 tag, bitrate capped, size estimated from the source.
fn synthesize_compressed_audio(survivors: &[RawFormat]) -> Option<Quality> {
    let mut source: Option<&RawFormat> = None;
    for record in survivors.iter().filter(|r| r.kind == MediaKind::Audio) {
        match source {
            Some(best) if record.bitrate_bps() <= best.bitrate_bps() => {}
            _ => source = Some(record),
        }
    }
    let source = source?;

    let size = match source.size_bytes() {
        Some(bytes) => size_label(Some((bytes * COMPRESSED_AUDIO_SIZE_RATIO).round())),
        None => "Unknown".to_string(),
    };

    Some(Quality {
        id: source.id,
        kind: MediaKind::Audio,
        quality: COMPRESSED_AUDIO_LABEL.to_string(),
        format: FormatTag::Mp3,
        size,
        bitrate: source.bitrate_bps().min(COMPRESSED_AUDIO_BITRATE_CAP),
        download_url: String::new(),
    })
}

fn into_quality(record: RawFormat) -> Quality {
    let format = FormatTag::from_mime(record.mime.as_deref().unwrap_or(""));
    Quality {
        id: record.id,
        kind: record.kind,
        quality: record.quality_label(),
        format,
        size: size_label(record.size_bytes()),
        bitrate: record.bitrate_bps(),
        download_url: String::new(),
    }
}

fn size_label(bytes: Option<f64>) -> String {
    match bytes {
        Some(bytes) => format!("{} MB", (bytes / 1024.0 / 1024.0).round() as i64),
        None => "Unknown".to_string(),
    }
}

fn resolution_rank(quality: &str) -> u32 {
    match quality {
        "144p" => 144,
        "240p" => 240,
        "360p" => 360,
        "480p" => 480,
        "720p" => 720,
        "1080p" => 1080,
        "1440p" => 1440,
        "2160p" => 2160,
        "4320p" => 4320,
        _ => 0,
    }
}
