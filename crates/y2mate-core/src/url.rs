//! URL helper functions for Y2Mate and YouTube
//!
//! Provides the default endpoints and functions for building thumbnail
//! and watch URLs or pulling a video ID out of a YouTube link.

use std::sync::LazyLock;

use regex::Regex;

/// Default endpoint accepting search queries and video URLs
pub const ANALYZE_URL: &str = "https://www.y2mate.com/mates/analyzeV2/ajax";

/// Default endpoint resolving a video ID and link key into a download link
pub const CONVERT_URL: &str = "https://www.y2mate.com/mates/convertV2/index";

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:[\w-]+\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
    )
    .expect("video ID regex is valid")
});

/// Builds the thumbnail URL for a video ID
///
/// # Example
/// ```
/// use y2mate_core::url::thumbnail_url;
/// assert_eq!(thumbnail_url("abc"), "https://i.ytimg.com/vi/abc/0.jpg");
/// ```
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/0.jpg", video_id)
}

/// Builds the canonical YouTube watch URL for a video ID
///
/// # Example
/// ```
/// use y2mate_core::url::watch_url;
/// assert_eq!(watch_url("mpWnhkMLIu4"), "https://www.youtube.com/watch?v=mpWnhkMLIu4");
/// ```
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Extracts the 11-character video ID from a YouTube URL
///
/// Accepts `watch?v=`, `youtu.be/`, `embed/`, `shorts/`, `live/` and `v/`
/// forms on `youtube.com` (optionally with one subdomain such as `www.` or
/// `m.`) and `youtu.be`, with or without scheme and extra query parameters.
/// The ID must be exactly 11 characters.
///
/// # Returns
/// `Some(video_id)` if the URL points at a single video, `None` otherwise
///
/// # Example
/// ```
/// use y2mate_core::url::extract_video_id;
/// let id = extract_video_id("https://youtu.be/mpWnhkMLIu4?feature=shared");
/// assert_eq!(id, Some("mpWnhkMLIu4".to_string()));
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
