//! Blocking client for the YouTube Data API v3.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use super::VideoProvider;
use super::models::{
    ApiErrorResponse, ChannelListResponse, ChannelResource, SearchListResponse, SearchMatch, SearchResult,
    VideoCategoryListResponse, VideoListResponse, VideoResource,
};
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};

/// Base URL of the Data API.
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

const USER_AGENT: &str = concat!("tubescout/", env!("CARGO_PKG_VERSION"));

/// YouTube Data API client holding the credential and one HTTP connection pool.
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Creates a client with the given credential and per-request timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> CoreResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: YOUTUBE_API_BASE.to_string(),
        })
    }

    /// Creates a client from a validated configuration.
    pub fn from_config(config: &CoreConfig) -> CoreResult<Self> {
        Self::new(config.api_key.clone(), config.request_timeout)
    }

    /// Points the client at a different API root (e.g. a local stub server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> CoreResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {url} {params:?}");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().map_err(redact_url)?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!("Undecodable {endpoint} response: {body}");
            CoreError::Json(e)
        })
    }
}

/// Transport errors carry the request URL, which holds the credential.
fn redact_url(error: reqwest::Error) -> CoreError {
    CoreError::Http(error.without_url())
}

/// Builds an API error from a non-2xx response, preferring the message in the
/// provider's JSON error body.
pub fn api_error(status: StatusCode, body: &str) -> CoreError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                trimmed.to_string()
            }
        });
    CoreError::Api {
        status: status.as_u16(),
        message,
    }
}

impl VideoProvider for YouTubeClient {
    fn search_videos(&self, keyword: &str, max_results: u32, region_code: &str) -> CoreResult<Vec<SearchMatch>> {
        let max_results = max_results.to_string();
        let response: SearchListResponse = self.get(
            "search",
            &[
                ("q", keyword),
                ("part", "id,snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("order", "viewCount"),
                ("regionCode", region_code),
            ],
        )?;

        debug!("Search for '{keyword}' returned {} item(s)", response.items.len());
        response.items.into_iter().map(SearchResult::into_match).collect()
    }

    fn video_details(&self, video_id: &str) -> CoreResult<VideoResource> {
        let response: VideoListResponse = self.get(
            "videos",
            &[("part", "snippet,statistics,contentDetails"), ("id", video_id)],
        )?;
        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::MalformedResponse(format!("no video item returned for id {video_id}")))
    }

    fn channel_details(&self, channel_id: &str) -> CoreResult<ChannelResource> {
        let response: ChannelListResponse = self.get(
            "channels",
            &[("part", "snippet,statistics"), ("id", channel_id)],
        )?;
        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::MalformedResponse(format!("no channel item returned for id {channel_id}")))
    }

    fn category_name(&self, category_id: &str) -> CoreResult<Option<String>> {
        let response: VideoCategoryListResponse = self.get(
            "videoCategories",
            &[("part", "snippet"), ("id", category_id)],
        )?;
        Ok(response.items.into_iter().next().map(|category| category.snippet.title))
    }
}
