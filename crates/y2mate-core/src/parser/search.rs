//! Search response parser for Y2Mate
//!
//! Parses the analyze endpoint's answer to a free-text query.

use serde::Deserialize;

use crate::error::Result;
use crate::parser::decode;
use crate::types::{SearchResult, VideoInfo};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    vitems: Vec<RawVideo>,
}

/// Video entry as sent by the service (`{v, t}`)
#[derive(Debug, Deserialize)]
pub(crate) struct RawVideo {
    v: String,
    t: String,
}

impl From<RawVideo> for VideoInfo {
    fn from(raw: RawVideo) -> Self {
        VideoInfo {
            video_id: raw.v,
            title: raw.t,
        }
    }
}

/// Parses a search response body into a [`SearchResult`]
///
/// # Arguments
/// * `body` - Raw JSON body from the analyze endpoint
/// * `query` - The query that produced it, stored in the result
///
/// # Errors
/// - `Service` if the response carries a non-empty `mess`
/// - `ParseError` if the body is not JSON or lacks `vitems`
pub fn parse_search_results(body: &str, query: &str) -> Result<SearchResult> {
    let response: SearchResponse = decode(body)?;

    let videos: Vec<VideoInfo> = response.vitems.into_iter().map(VideoInfo::from).collect();
    tracing::debug!(count = videos.len(), "Parsed search results");

    Ok(SearchResult {
        query: query.to_string(),
        videos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Y2MateError;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_search_results_preserves_order() {
        let body = r#"{"vitems":[{"v":"abc","t":"Title A"},{"v":"xyz","t":"Title B"}]}"#;
        let result = parse_search_results(body, "foo").unwrap();

        assert_eq!(
            result,
            SearchResult {
                query: "foo".to_string(),
                videos: vec![
                    VideoInfo {
                        video_id: "abc".to_string(),
                        title: "Title A".to_string(),
                    },
                    VideoInfo {
                        video_id: "xyz".to_string(),
                        title: "Title B".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_parse_search_results_full_envelope() {
        let body = r#"{
            "status": "ok",
            "mess": "",
            "page": "search",
            "keyword": "glasses op",
            "vitems": [{"v": "mpWnhkMLIu4", "t": "The Girl I Like Forgot Her Glasses OP"}]
        }"#;
        let result = parse_search_results(body, "glasses op").unwrap();
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.videos[0].video_id, "mpWnhkMLIu4");
    }

    #[test]
    fn test_parse_search_results_empty() {
        let result = parse_search_results(r#"{"vitems":[]}"#, "nothing").unwrap();
        assert!(result.videos.is_empty());
        assert_eq!(result.query, "nothing");
    }

    #[test]
    fn test_parse_search_results_missing_vitems() {
        let result = parse_search_results(r#"{"status":"ok","mess":""}"#, "foo");
        match result {
            Err(Y2MateError::ParseError(msg)) => assert!(msg.contains("vitems")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_results_service_error() {
        let result = parse_search_results(r#"{"mess":"Keyword is too short"}"#, "a");
        match result {
            Err(Y2MateError::Service(msg)) => assert_eq!(msg, "Keyword is too short"),
            other => panic!("Expected Service error, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_service_message_is_verbatim(message in ".+") {
            let body = json!({ "mess": message, "vitems": [] }).to_string();
            let error = parse_search_results(&body, "q").unwrap_err();
            prop_assert_eq!(error.service_message(), Some(message.as_str()));
        }

        #[test]
        fn prop_search_mapping_is_lossless(
            items in proptest::collection::vec(("[A-Za-z0-9_-]{11}", ".*"), 0..8)
        ) {
            let vitems: Vec<_> = items.iter().map(|(v, t)| json!({ "v": v, "t": t })).collect();
            let body = json!({ "vitems": vitems }).to_string();

            let result = parse_search_results(&body, "q").unwrap();
            let fields: Vec<(String, String)> = result
                .videos
                .into_iter()
                .map(|video| (video.video_id, video.title))
                .collect();
            prop_assert_eq!(fields, items);
        }
    }
}
