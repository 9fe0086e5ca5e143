//! Video metadata parser for Y2Mate
//!
//! Parses the analyze endpoint's answer to a video URL: title, link
//! candidates grouped by kind, and related videos.

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::parser::decode;
use crate::parser::search::RawVideo;
use crate::types::{LinkInfo, VideoInfo, VideoMetadata};

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    vid: String,
    title: String,
    links: RawLinks,
    #[serde(default)]
    related: Option<Vec<RelatedGroup>>,
}

#[derive(Debug, Deserialize)]
struct RawLinks {
    #[serde(default)]
    mp4: LinkGroup,
    #[serde(default)]
    mp3: LinkGroup,
    #[serde(default)]
    other: LinkGroup,
}

/// Links of one kind, in the order the service sent them
///
/// Normally an object keyed by an arbitrary service-side identifier; an
/// empty group is sometimes sent as `[]` instead of `{}`.
#[derive(Debug, Default)]
struct LinkGroup(Vec<RawLink>);

impl LinkGroup {
    fn into_links(self) -> Vec<LinkInfo> {
        self.0.into_iter().map(LinkInfo::from).collect()
    }
}

impl<'de> Deserialize<'de> for LinkGroup {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LinkGroupVisitor)
    }
}

struct LinkGroupVisitor;

impl<'de> Visitor<'de> for LinkGroupVisitor {
    type Value = LinkGroup;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object or array of links")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<LinkGroup, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut links = Vec::new();
        while let Some((_, link)) = map.next_entry::<IgnoredAny, RawLink>()? {
            links.push(link);
        }
        Ok(LinkGroup(links))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<LinkGroup, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut links = Vec::new();
        while let Some(link) = seq.next_element::<RawLink>()? {
            links.push(link);
        }
        Ok(LinkGroup(links))
    }
}

#[derive(Debug, Deserialize)]
struct RawLink {
    size: String,
    f: String,
    q: String,
    k: String,
}

impl From<RawLink> for LinkInfo {
    fn from(raw: RawLink) -> Self {
        LinkInfo {
            size: raw.size,
            format: raw.f,
            quality: raw.q,
            key: raw.k,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelatedGroup {
    contents: Vec<RawVideo>,
}

/// Parses a video analysis response body into [`VideoMetadata`]
///
/// Link lists keep the order the service sent them in. `related_videos` is
/// `None` when `related` is absent or null and empty when `related` holds
/// no groups; only the first group is used.
///
/// # Errors
/// - `Service` if the response carries a non-empty `mess`
/// - `ParseError` if the body is not JSON or lacks `vid`, `title` or `links`,
///   or a link or related entry is malformed
pub fn parse_video_metadata(body: &str) -> Result<VideoMetadata> {
    let response: AnalyzeResponse = decode(body)?;

    let related_videos = response.related.map(|groups| {
        groups
            .into_iter()
            .next()
            .map(|group| group.contents.into_iter().map(VideoInfo::from).collect())
            .unwrap_or_default()
    });

    let metadata = VideoMetadata {
        video_id: response.vid,
        title: response.title,
        video_links: response.links.mp4.into_links(),
        audio_links: response.links.mp3.into_links(),
        other_links: response.links.other.into_links(),
        related_videos,
    };

    tracing::debug!(
        video_id = %metadata.video_id,
        video_links = metadata.video_links.len(),
        audio_links = metadata.audio_links.len(),
        other_links = metadata.other_links.len(),
        "Parsed video metadata"
    );

    Ok(metadata)
}
