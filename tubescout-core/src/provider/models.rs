// ============================================================================
// tubescout-core/src/provider/models.rs
// ============================================================================
//
// API MODELS: Response payloads of the YouTube Data API v3
//
// Only the fields the enrichment reads are modelled. Statistics counts are
// kept as the provider's decimal strings; metrics parse them.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Accepts a count sent either as a JSON string or a JSON number.
pub mod opt_count_string {
    use serde::{Deserializer, de};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Option<String>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a count as string or number")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Some(v.to_string()))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Some(v.to_string()))
            }

            // Kept in float notation so it never parses as a whole count.
            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Some(format!("{v:?}")))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(v.to_string()))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

// --- Search ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSnippet {
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    pub title: Option<String>,
}

/// A search hit reduced to the identifiers enrichment needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub video_id: String,
    pub channel_id: String,
}

impl SearchResult {
    /// Extracts the video and channel identifiers, rejecting incomplete hits.
    pub fn into_match(self) -> CoreResult<SearchMatch> {
        let video_id = self
            .id
            .video_id
            .ok_or_else(|| CoreError::MalformedResponse("search result without id.videoId".to_string()))?;
        let channel_id = self
            .snippet
            .and_then(|snippet| snippet.channel_id)
            .ok_or_else(|| {
                CoreError::MalformedResponse(format!("search result {video_id} without snippet.channelId"))
            })?;
        Ok(SearchMatch { video_id, channel_id })
    }
}

// --- Videos ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoResource {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
    #[serde(rename = "contentDetails", default)]
    pub content_details: VideoContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount", default, deserialize_with = "opt_count_string::deserialize")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount", default, deserialize_with = "opt_count_string::deserialize")]
    pub like_count: Option<String>,
    #[serde(rename = "commentCount", default, deserialize_with = "opt_count_string::deserialize")]
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoContentDetails {
    /// ISO 8601, e.g. PT1M30S
    pub duration: Option<String>,
}

// --- Channels ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount", default, deserialize_with = "opt_count_string::deserialize")]
    pub subscriber_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
}

// --- Video categories ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoCategoryListResponse {
    #[serde(default)]
    pub items: Vec<VideoCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoCategory {
    pub id: String,
    pub snippet: VideoCategorySnippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoCategorySnippet {
    pub title: String,
}

// --- Errors ---

/// Body of a non-2xx provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    pub message: String,
}
