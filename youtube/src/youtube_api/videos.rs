//! YouTube Videos API types.
//!
//! Every part and every field inside a part is optional. The API drops fields it does not
//! populate (e.g. `dislikeCount` for non-owners, `tags` on untagged videos) and readers of
//! these types are expected to treat absence as "unknown" rather than as an error.

use crate::youtube_api::types::{PageInfo, lenient, lenient_count};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Videos that match the request. Ids that do not resolve to a video are silently left out.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `video` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    pub snippet: Option<VideoSnippet>,
    pub statistics: Option<VideoStatistics>,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoSnippet {
    #[serde(rename = "publishedAt", default, deserialize_with = "lenient")]
    pub published_at: Option<Timestamp>,
    #[serde(rename = "channelId", default, deserialize_with = "lenient")]
    pub channel_id: Option<String>,
    #[serde(rename = "channelTitle", default, deserialize_with = "lenient")]
    pub channel_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<String>>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount", default, deserialize_with = "lenient_count")]
    pub view_count: Option<u64>,
    /// Absent when the owner hides likes.
    #[serde(rename = "likeCount", default, deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
    /// Only visible to the video owner.
    #[serde(rename = "dislikeCount", default, deserialize_with = "lenient_count")]
    pub dislike_count: Option<u64>,
    /// Deprecated; always 0 when present.
    #[serde(rename = "favoriteCount", default, deserialize_with = "lenient_count")]
    pub favorite_count: Option<u64>,
    /// Absent when comments are disabled.
    #[serde(rename = "commentCount", default, deserialize_with = "lenient_count")]
    pub comment_count: Option<u64>,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// ISO 8601 duration, e.g. `PT15M33S`.
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<String>,
    /// `hd` or `sd`.
    #[serde(default, deserialize_with = "lenient")]
    pub definition: Option<String>,
    /// `"true"` or `"false"`, as a string.
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
}
