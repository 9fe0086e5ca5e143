//! Y2Mate Client Core Library
//!
//! Provides an unofficial async API wrapper for Y2Mate.com: searching videos,
//! looking up video metadata with download candidates, and resolving a
//! candidate into a download link.
//!
//! # Overview
//!
//! This crate consists of:
//! - An HTTP client sending form-encoded requests to the analyze and convert endpoints
//! - JSON parsers mapping the service's loosely-shaped responses into typed records
//! - URL helpers for thumbnails, watch pages and video IDs
//!
//! # Example
//!
//! ```no_run
//! use y2mate_core::{Result, Y2MateClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Y2MateClient::new()?;
//!
//!     // Search for videos
//!     let result = client.search("The Girl I Like Forgot Her Glasses OP").await?;
//!     println!("{} videos for {:?}", result.videos.len(), result.query);
//!
//!     // Get video metadata from a URL
//!     let metadata = client.from_url("https://youtu.be/mpWnhkMLIu4?feature=shared").await?;
//!
//!     // Resolve the first video link into a download link
//!     if let Some(link) = metadata.video_links.first() {
//!         let info = client.get_download_info(&metadata.video_id, &link.key).await?;
//!         println!("{} {}: {}", info.format, info.quality, info.download_link);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Service-reported failures (the `mess` field) surface as
//! [`Y2MateError::Service`] carrying the message verbatim, distinct from
//! transport failures ([`Y2MateError::HttpError`], [`Y2MateError::Status`])
//! and unexpected response shapes ([`Y2MateError::ParseError`]).
//!
//! **Note:** download links and link keys are issued by the service and
//! expire; do not cache them long-term.

mod client;
mod error;
pub mod parser;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, Y2MateClient};

// Re-export error types
pub use error::{Result, Y2MateError};

// Re-export parser functions
pub use parser::{parse_download_info, parse_search_results, parse_video_metadata};

// Re-export data types
pub use types::{LinkInfo, SearchResult, VideoDownloadInfo, VideoInfo, VideoMetadata};

// Re-export URL helper functions for convenience
pub use url::{extract_video_id, thumbnail_url, watch_url};
