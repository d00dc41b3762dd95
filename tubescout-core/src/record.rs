//! The enriched video record and its fixed column layout.

use std::fmt;

/// Column headers, in export order.
pub const COLUMNS: [&str; 14] = [
    "Channel",
    "Subscribers",
    "Video Title",
    "Video Link",
    "Views",
    "Likes",
    "Comments",
    "Engagement Rate",
    "Views per Day",
    "Published At",
    "Duration",
    "Category",
    "Hashtags",
    "Description",
];

/// Sentinel shown for channels that hide their subscriber count.
pub const HIDDEN_SUBSCRIBERS: &str = "Hidden";

/// Watch-page URL for a video identifier.
#[must_use]
pub fn video_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Subscriber count as reported by the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriberCount {
    Count(u64),
    Hidden,
    /// A value that is not a whole number, passed through as sent.
    Raw(String),
}

impl SubscriberCount {
    /// Resolves the provider's optional count and hidden flag.
    #[must_use]
    pub fn from_statistics(raw: Option<&str>, hidden: bool) -> Self {
        if hidden {
            return Self::Hidden;
        }
        match raw {
            None => Self::Hidden,
            Some(text) => match text.trim().parse::<u64>() {
                Ok(count) => Self::Count(count),
                Err(_) => {
                    log::warn!("Non-numeric subscriber count '{text}', exporting it unchanged");
                    Self::Raw(text.to_string())
                }
            },
        }
    }
}

impl fmt::Display for SubscriberCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Hidden => f.write_str(HIDDEN_SUBSCRIBERS),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

/// One row of the output table. Built once per search result and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub channel: String,
    pub subscribers: SubscriberCount,
    pub title: String,
    pub url: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub engagement_rate: f64,
    pub views_per_day: f64,
    pub published_at: String,
    pub duration: String,
    pub category: String,
    pub hashtags: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_count_resolution() {
        assert_eq!(SubscriberCount::from_statistics(Some("1200"), false), SubscriberCount::Count(1200));
        assert_eq!(SubscriberCount::from_statistics(None, false), SubscriberCount::Hidden);
        assert_eq!(SubscriberCount::from_statistics(Some("1200"), true), SubscriberCount::Hidden);
        assert_eq!(
            SubscriberCount::from_statistics(Some("lots"), false),
            SubscriberCount::Raw("lots".to_string())
        );
        assert_eq!(SubscriberCount::from_statistics(Some("lots"), true), SubscriberCount::Hidden);
    }

    #[test]
    fn test_hidden_displays_sentinel() {
        assert_eq!(SubscriberCount::Hidden.to_string(), "Hidden");
        assert_eq!(SubscriberCount::Count(42).to_string(), "42");
        assert_eq!(SubscriberCount::Raw("1.2K".to_string()).to_string(), "1.2K");
    }

    #[test]
    fn test_video_url() {
        assert_eq!(video_url("abc123"), "https://www.youtube.com/watch?v=abc123");
    }
}
