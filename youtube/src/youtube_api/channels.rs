//! YouTube Channels API types.

use crate::youtube_api::types::{PageInfo, lenient_count};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// A list of channels that match the request criteria.
    ///
    /// The API omits the field entirely when none of the requested ids exist.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `channel` resource, restricted to the parts requested by this crate.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Channel statistics.
///
/// `subscriberCount` is absent when the channel hides it.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "viewCount", default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    #[serde(rename = "subscriberCount", default, deserialize_with = "lenient_count")]
    pub subscriber_count: Option<u64>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
    #[serde(rename = "videoCount", default, deserialize_with = "lenient_count")]
    pub video_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists associated with the channel.
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist of all videos uploaded to the channel.
    pub uploads: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_channel_with_hidden_subscribers() {
        let body = r#"{
            "kind": "youtube#channelListResponse",
            "pageInfo": {"totalResults": 1, "resultsPerPage": 5},
            "items": [{
                "kind": "youtube#channel",
                "id": "UC123",
                "snippet": {"title": "Rust Talks", "description": "talks"},
                "contentDetails": {"relatedPlaylists": {"likes": "", "uploads": "UU123"}},
                "statistics": {"viewCount": "9001", "hiddenSubscriberCount": true, "videoCount": "42"}
            }]
        }"#;
        let response: ChannelListResponse = serde_json::from_str(body).unwrap();
        let channel = &response.items[0];
        assert_eq!(channel.snippet.title, "Rust Talks");
        assert_eq!(channel.content_details.related_playlists.uploads, "UU123");
        assert_eq!(channel.statistics.view_count, Some(9001));
        assert_eq!(channel.statistics.subscriber_count, None);
        assert!(channel.statistics.hidden_subscriber_count);
        assert_eq!(channel.statistics.video_count, Some(42));
    }

    #[test]
    fn missing_items_means_no_channels() {
        let body = r#"{"kind": "youtube#channelListResponse", "pageInfo": {"totalResults": 0, "resultsPerPage": 5}}"#;
        let response: ChannelListResponse = serde_json::from_str(body).unwrap();
        assert!(response.items.is_empty());
    }
}
