// ============================================================================
// tubescout-core/src/provider/mod.rs
// ============================================================================
//
// VIDEO PROVIDER: Abstraction over the video-hosting API
//
// The enrichment loop only talks to the `VideoProvider` trait, so tests can
// substitute an in-memory provider for the HTTP client.
//
// KEY COMPONENTS:
// - VideoProvider: The four remote operations a run needs
// - YouTubeClient: Blocking reqwest implementation against the Data API v3
// - models: serde payloads for the API responses

pub mod models;
pub mod youtube;

pub use models::{ChannelResource, SearchMatch, VideoResource};
pub use youtube::YouTubeClient;

use crate::error::CoreResult;

/// Remote operations against the video-hosting provider.
///
/// Every call blocks until the response arrives. Failures are returned
/// untouched; there is no retry at this layer.
pub trait VideoProvider {
    /// Searches for videos matching `keyword`, ranked by view count.
    fn search_videos(&self, keyword: &str, max_results: u32, region_code: &str) -> CoreResult<Vec<SearchMatch>>;

    /// Fetches snippet, statistics, and content details for one video.
    fn video_details(&self, video_id: &str) -> CoreResult<VideoResource>;

    /// Fetches snippet and statistics for one channel.
    fn channel_details(&self, channel_id: &str) -> CoreResult<ChannelResource>;

    /// Looks up the display name of a category; `None` when the provider
    /// returns no match.
    fn category_name(&self, category_id: &str) -> CoreResult<Option<String>>;
}

impl<P: VideoProvider + ?Sized> VideoProvider for &P {
    fn search_videos(&self, keyword: &str, max_results: u32, region_code: &str) -> CoreResult<Vec<SearchMatch>> {
        (**self).search_videos(keyword, max_results, region_code)
    }

    fn video_details(&self, video_id: &str) -> CoreResult<VideoResource> {
        (**self).video_details(video_id)
    }

    fn channel_details(&self, channel_id: &str) -> CoreResult<ChannelResource> {
        (**self).channel_details(channel_id)
    }

    fn category_name(&self, category_id: &str) -> CoreResult<Option<String>> {
        (**self).category_name(category_id)
    }
}
