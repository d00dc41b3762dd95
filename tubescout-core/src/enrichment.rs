//! Turns search matches into fully populated [`VideoRecord`]s.
//!
//! Each match costs one video-detail call. Channel details and category names
//! are memoized for the lifetime of the [`Enricher`], so a channel or category
//! shared by several results is fetched once per run.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::duration::humanize_duration;
use crate::error::CoreResult;
use crate::metrics::{engagement_rate, extract_hashtags, parse_count, views_per_day};
use crate::provider::{SearchMatch, VideoProvider};
use crate::record::{SubscriberCount, VideoRecord, video_url};

/// Label used when a category cannot be resolved.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone)]
struct ChannelInfo {
    title: String,
    subscribers: SubscriberCount,
}

/// Enriches search matches against a provider, caching channel and category
/// lookups.
pub struct Enricher<P> {
    provider: P,
    now: DateTime<Utc>,
    channels: HashMap<String, ChannelInfo>,
    categories: HashMap<String, String>,
}

impl<P: VideoProvider> Enricher<P> {
    /// Creates an enricher that measures video age against the current time.
    pub fn new(provider: P) -> Self {
        Self::with_now(provider, Utc::now())
    }

    /// Creates an enricher with a fixed "now" for views-per-day.
    pub fn with_now(provider: P, now: DateTime<Utc>) -> Self {
        Self {
            provider,
            now,
            channels: HashMap::new(),
            categories: HashMap::new(),
        }
    }

    /// The provider the enricher calls.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Builds the record for one search match.
    pub fn enrich(&mut self, search_match: &SearchMatch) -> CoreResult<VideoRecord> {
        let video = self.provider.video_details(&search_match.video_id)?;
        let snippet = video.snippet;
        let stats = video.statistics;

        let raw_views = parse_count(stats.view_count.as_deref());
        let raw_likes = parse_count(stats.like_count.as_deref());
        let raw_comments = parse_count(stats.comment_count.as_deref());
        if raw_views.is_none() || raw_likes.is_none() || raw_comments.is_none() {
            warn!(
                "Video {} has non-numeric statistics; derived metrics default to 0",
                search_match.video_id
            );
        }

        let duration = humanize_duration(video.content_details.duration.as_deref())?;
        let category = self.category_label(snippet.category_id.as_deref())?;
        let engagement = engagement_rate(raw_likes, raw_comments, raw_views);
        let per_day = views_per_day(raw_views, &snippet.published_at, self.now);

        let channel = self.channel_info(&search_match.channel_id)?;

        Ok(VideoRecord {
            channel: channel.title,
            subscribers: channel.subscribers,
            title: snippet.title,
            url: video_url(&search_match.video_id),
            views: raw_views.unwrap_or(0),
            likes: raw_likes.unwrap_or(0),
            comments: raw_comments.unwrap_or(0),
            engagement_rate: engagement,
            views_per_day: per_day,
            published_at: snippet.published_at,
            duration,
            category,
            hashtags: extract_hashtags(&snippet.tags),
            description: snippet.description,
        })
    }

    fn category_label(&mut self, category_id: Option<&str>) -> CoreResult<String> {
        let Some(category_id) = category_id.filter(|id| !id.is_empty()) else {
            return Ok(UNKNOWN_CATEGORY.to_string());
        };
        if let Some(label) = self.categories.get(category_id) {
            return Ok(label.clone());
        }

        let label = self
            .provider
            .category_name(category_id)?
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        debug!("Category {category_id} -> {label}");
        self.categories.insert(category_id.to_string(), label.clone());
        Ok(label)
    }

    fn channel_info(&mut self, channel_id: &str) -> CoreResult<ChannelInfo> {
        if let Some(info) = self.channels.get(channel_id) {
            return Ok(info.clone());
        }

        let channel = self.provider.channel_details(channel_id)?;
        let info = ChannelInfo {
            title: channel.snippet.title,
            subscribers: SubscriberCount::from_statistics(
                channel.statistics.subscriber_count.as_deref(),
                channel.statistics.hidden_subscriber_count,
            ),
        };
        debug!("Channel {channel_id} -> {} ({})", info.title, info.subscribers);
        self.channels.insert(channel_id.to_string(), info.clone());
        Ok(info)
    }
}
