//! Core data types for the Y2Mate client
//!
//! Plain value records built fresh from each response. Strings are kept
//! exactly as the service sent them (sizes like "10MB", qualities like
//! "720p" or "128kbps" are not normalized).

use serde::{Deserialize, Serialize};

use crate::url::{thumbnail_url, watch_url};

/// A video as listed in search results or related videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// YouTube video ID (e.g., "mpWnhkMLIu4")
    pub video_id: String,

    /// Video title
    pub title: String,
}

impl VideoInfo {
    /// Thumbnail image URL for this video
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(&self.video_id)
    }

    /// YouTube watch page URL for this video
    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

/// Result of a free-text search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query as passed to `search`
    pub query: String,

    /// Matching videos in the order the service returned them
    pub videos: Vec<VideoInfo>,
}

/// One downloadable encoding of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    /// Human-readable size (e.g., "10.5 MB")
    pub size: String,

    /// Container format (e.g., "mp4", "mp3")
    pub format: String,

    /// Quality label (e.g., "720p", "128kbps")
    pub quality: String,

    /// Opaque token to pass back unmodified to `get_download_info`
    pub key: String,
}

/// Full metadata of a single video with its download candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub video_links: Vec<LinkInfo>,
    pub audio_links: Vec<LinkInfo>,
    pub other_links: Vec<LinkInfo>,

    /// `None` when the service omitted the related section
    pub related_videos: Option<Vec<VideoInfo>>,
}

impl VideoMetadata {
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(&self.video_id)
    }

    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }

    /// All link candidates: video, then audio, then other
    pub fn links(&self) -> impl Iterator<Item = &LinkInfo> {
        self.video_links
            .iter()
            .chain(&self.audio_links)
            .chain(&self.other_links)
    }
}

/// Resolved download link for one encoding of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDownloadInfo {
    pub video_id: String,
    pub title: String,
    pub format: String,
    pub quality: String,

    /// Direct URL of the converted file
    pub download_link: String,
}

impl VideoDownloadInfo {
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(&self.video_id)
    }

    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(quality: &str, key: &str) -> LinkInfo {
        LinkInfo {
            size: "10MB".to_string(),
            format: "mp4".to_string(),
            quality: quality.to_string(),
            key: key.to_string(),
        }
    }

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            video_id: "abc".to_string(),
            title: "T".to_string(),
            video_links: vec![link("720p", "k1"), link("360p", "k2")],
            audio_links: vec![link("128kbps", "k3")],
            other_links: vec![link("1080p", "k4")],
            related_videos: None,
        }
    }

    #[test]
    fn test_thumbnail_url_on_every_record() {
        let expected = "https://i.ytimg.com/vi/abc/0.jpg";

        let video = VideoInfo {
            video_id: "abc".to_string(),
            title: "Title A".to_string(),
        };
        assert_eq!(video.thumbnail_url(), expected);
        assert_eq!(metadata().thumbnail_url(), expected);

        let download = VideoDownloadInfo {
            video_id: "abc".to_string(),
            title: "T".to_string(),
            format: "mp4".to_string(),
            quality: "720p".to_string(),
            download_link: "https://x/y.mp4".to_string(),
        };
        assert_eq!(download.thumbnail_url(), expected);
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(metadata().watch_url(), "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_links_order() {
        let metadata = metadata();
        let keys: Vec<&str> = metadata.links().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["k1", "k2", "k3", "k4"]);
    }

    #[test]
    fn test_video_metadata_serialization() {
        let mut metadata = metadata();
        metadata.related_videos = Some(vec![VideoInfo {
            video_id: "xyz".to_string(),
            title: "Related".to_string(),
        }]);

        let json = serde_json::to_string(&metadata).expect("Serialization should succeed");
        let deserialized: VideoMetadata =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(metadata, deserialized);
    }

    #[test]
    fn test_video_metadata_without_related() {
        let json = serde_json::to_value(metadata()).expect("Serialization should succeed");
        assert!(json["related_videos"].is_null());
    }
}
