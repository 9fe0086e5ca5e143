//! Download info parser for Y2Mate
//!
//! Parses the convert endpoint's answer carrying the final download link.

use serde::Deserialize;

use crate::error::Result;
use crate::parser::decode;
use crate::types::VideoDownloadInfo;

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    vid: String,
    title: String,
    ftype: String,
    fquality: String,
    dlink: String,
}

/// Parses a convert response body into [`VideoDownloadInfo`]
///
/// # Errors
/// - `Service` if the response carries a non-empty `mess`
/// - `ParseError` if the body is not JSON or any of `vid`, `title`,
///   `ftype`, `fquality`, `dlink` is missing
pub fn parse_download_info(body: &str) -> Result<VideoDownloadInfo> {
    let response: ConvertResponse = decode(body)?;

    let info = VideoDownloadInfo {
        video_id: response.vid,
        title: response.title,
        format: response.ftype,
        quality: response.fquality,
        download_link: response.dlink,
    };

    tracing::debug!(
        video_id = %info.video_id,
        format = %info.format,
        quality = %info.quality,
        "Parsed download info"
    );

    Ok(info)
}
