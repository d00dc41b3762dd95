// tubescout-core/tests/common/mod.rs
//
// In-memory VideoProvider used by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::json;
use tubescout_core::provider::models::{ChannelResource, SearchMatch, VideoResource};
use tubescout_core::{CoreError, CoreResult, VideoProvider};

/// Provider backed by maps, recording every call it receives.
#[derive(Default)]
pub struct MockProvider {
    pub matches: Vec<SearchMatch>,
    pub videos: HashMap<String, VideoResource>,
    pub channels: HashMap<String, ChannelResource>,
    pub categories: HashMap<String, String>,
    pub fail_search: bool,
    calls: RefCell<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_video(mut self, video_id: &str, channel_id: &str, video: VideoResource) -> Self {
        self.matches.push(SearchMatch {
            video_id: video_id.to_string(),
            channel_id: channel_id.to_string(),
        });
        self.videos.insert(video_id.to_string(), video);
        self
    }

    pub fn with_channel(mut self, channel_id: &str, channel: ChannelResource) -> Self {
        self.channels.insert(channel_id.to_string(), channel);
        self
    }

    pub fn with_category(mut self, category_id: &str, title: &str) -> Self {
        self.categories.insert(category_id.to_string(), title.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

impl VideoProvider for MockProvider {
    fn search_videos(&self, keyword: &str, max_results: u32, region_code: &str) -> CoreResult<Vec<SearchMatch>> {
        self.calls
            .borrow_mut()
            .push(format!("search:{keyword}:{max_results}:{region_code}"));
        if self.fail_search {
            return Err(CoreError::Api {
                status: 403,
                message: "quotaExceeded".to_string(),
            });
        }
        Ok(self.matches.iter().take(max_results as usize).cloned().collect())
    }

    fn video_details(&self, video_id: &str) -> CoreResult<VideoResource> {
        self.calls.borrow_mut().push(format!("video:{video_id}"));
        self.videos
            .get(video_id)
            .cloned()
            .ok_or_else(|| CoreError::MalformedResponse(format!("no video item returned for id {video_id}")))
    }

    fn channel_details(&self, channel_id: &str) -> CoreResult<ChannelResource> {
        self.calls.borrow_mut().push(format!("channel:{channel_id}"));
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| CoreError::MalformedResponse(format!("no channel item returned for id {channel_id}")))
    }

    fn category_name(&self, category_id: &str) -> CoreResult<Option<String>> {
        self.calls.borrow_mut().push(format!("category:{category_id}"));
        Ok(self.categories.get(category_id).cloned())
    }
}

/// Video resource as the provider would return it.
pub fn video(id: &str, title: &str, views: &str, likes: &str, comments: &str, published_at: &str) -> VideoResource {
    serde_json::from_value(json!({
        "id": id,
        "snippet": {
            "title": title,
            "description": format!("About {title}"),
            "publishedAt": published_at,
            "categoryId": "27",
            "tags": ["fun", "#coding", "#Python3"]
        },
        "statistics": {
            "viewCount": views,
            "likeCount": likes,
            "commentCount": comments
        },
        "contentDetails": { "duration": "PT1H2M3S" }
    }))
    .expect("valid video fixture")
}

/// Channel resource; `subscribers: None` omits the count.
pub fn channel(id: &str, title: &str, subscribers: Option<&str>) -> ChannelResource {
    let statistics = match subscribers {
        Some(count) => json!({ "subscriberCount": count, "hiddenSubscriberCount": false }),
        None => json!({ "hiddenSubscriberCount": true }),
    };
    serde_json::from_value(json!({
        "id": id,
        "snippet": { "title": title },
        "statistics": statistics
    }))
    .expect("valid channel fixture")
}
