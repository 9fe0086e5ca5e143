//! Async client for the Y2Mate web API
//!
//! Sends form-encoded requests to the analyze and convert endpoints and
//! hands the bodies to the parsers.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Result, Y2MateError};
use crate::parser::{parse_download_info, parse_search_results, parse_video_metadata};
use crate::types::{SearchResult, VideoDownloadInfo, VideoMetadata};
use crate::url::{ANALYZE_URL, CONVERT_URL};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the Y2Mate client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint for search queries and video URLs
    pub analyze_url: String,
    /// Endpoint resolving link keys into download links
    pub convert_url: String,
    /// Language code sent as `hl` (default: "en")
    pub language_code: String,
    /// Request timeout in seconds (default: 60)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analyze_url: ANALYZE_URL.to_string(),
            convert_url: CONVERT_URL.to_string(),
            language_code: "en".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Unofficial API client for Y2Mate.com
///
/// Every method is a single independent POST request. The client is cheap
/// to clone and can be shared between tasks; clones reuse the same
/// connection pool.
#[derive(Debug, Clone)]
pub struct Y2MateClient {
    client: reqwest::Client,
    analyze_url: String,
    convert_url: String,
    language_code: String,
}

impl Y2MateClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns `HttpError` if the HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns `HttpError` if the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(Y2MateError::HttpError)?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url,
            convert_url: config.convert_url,
            language_code: config.language_code,
        })
    }

    /// Search for videos
    ///
    /// # Arguments
    /// * `query` - Free-text search query
    ///
    /// # Returns
    /// The query together with matching videos in service order
    ///
    /// # Errors
    /// - `HttpError` if the request fails or times out
    /// - `Status` if the server answers with a non-success status
    /// - `Service` if Y2Mate reports an error message
    /// - `ParseError` if the response is not the expected JSON
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> y2mate_core::Result<()> {
    /// use y2mate_core::Y2MateClient;
    /// let client = Y2MateClient::new()?;
    /// let result = client.search("The Girl I Like Forgot Her Glasses OP").await?;
    /// for video in &result.videos {
    ///     println!("{}: {}", video.video_id, video.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        tracing::debug!(endpoint = %self.analyze_url, "Searching videos");
        tracing::trace!(query, "Search query");

        let body = self.analyze(query).await?;
        parse_search_results(&body, query)
    }

    /// Get video metadata and download candidates from a video URL
    ///
    /// # Arguments
    /// * `url` - YouTube video URL (e.g., "https://youtu.be/mpWnhkMLIu4")
    ///
    /// # Returns
    /// Title, video/audio/other link candidates and related videos
    ///
    /// # Errors
    /// Same as [`search`](Self::search)
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> y2mate_core::Result<()> {
    /// use y2mate_core::Y2MateClient;
    /// let client = Y2MateClient::new()?;
    /// let metadata = client.from_url("https://youtu.be/mpWnhkMLIu4").await?;
    /// for link in &metadata.video_links {
    ///     println!("{} {} ({})", link.format, link.quality, link.size);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_url(&self, url: &str) -> Result<VideoMetadata> {
        tracing::debug!(endpoint = %self.analyze_url, "Analyzing video");
        tracing::trace!(url, "Video URL");

        let body = self.analyze(url).await?;
        parse_video_metadata(&body)
    }

    /// Resolve a link key into a download link
    ///
    /// # Arguments
    /// * `video_id` - ID of the video (from [`VideoMetadata::video_id`])
    /// * `key` - Link key from [`LinkInfo::key`](crate::LinkInfo::key), passed unmodified
    ///
    /// # Errors
    /// Same as [`search`](Self::search)
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> y2mate_core::Result<()> {
    /// use y2mate_core::Y2MateClient;
    /// let client = Y2MateClient::new()?;
    /// let metadata = client.from_url("https://youtu.be/mpWnhkMLIu4").await?;
    /// if let Some(link) = metadata.video_links.first() {
    ///     let info = client.get_download_info(&metadata.video_id, &link.key).await?;
    ///     println!("{}", info.download_link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_download_info(&self, video_id: &str, key: &str) -> Result<VideoDownloadInfo> {
        tracing::debug!(endpoint = %self.convert_url, video_id, "Resolving download link");

        let form = [("vid", video_id), ("k", key)];
        let body = self.post_form(&self.convert_url, &form).await?;
        parse_download_info(&body)
    }

    /// Analyze endpoint URL in use
    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Convert endpoint URL in use
    pub fn convert_url(&self) -> &str {
        &self.convert_url
    }

    /// Language code sent with analyze requests
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Query the analyze endpoint with a search term or a video URL
    async fn analyze(&self, k_query: &str) -> Result<String> {
        let form = [
            ("k_query", k_query),
            ("k_page", "home"),
            ("hl", self.language_code.as_str()),
            ("q_auto", "false"),
        ];
        self.post_form(&self.analyze_url, &form).await
    }

    /// Send a form-encoded POST and return the body of a successful response
    ///
    /// Non-success statuses are turned into `Status` before the body is
    /// looked at as JSON.
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(Y2MateError::HttpError)?;

        let status = response.status();

        if !status.is_success() {
            let body = error_body(response.text().await);
            tracing::warn!(%status, endpoint = url, "Y2Mate request failed");
            return Err(Y2MateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(Y2MateError::HttpError)
    }
}

/// Body of a non-success response; a failed read leaves it empty
fn error_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Failed to read error response body");
        String::new()
    })
}
