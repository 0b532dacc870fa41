//! YouTube PlaylistItems API types.

use crate::youtube_api::types::{PageInfo, lenient};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token for the next page; absent on the last page.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource identifies a video included in a playlist.
///
/// Only `contentDetails` is requested, so that is all this type carries.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    /// The ID that YouTube uses to uniquely identify the video.
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Absent for private or deleted videos that are still listed in the playlist.
    #[serde(
        rename = "videoPublishedAt",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_published_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_with_private_video() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNESQ",
            "pageInfo": {"totalResults": 3, "resultsPerPage": 2},
            "items": [
                {"id": "pi1", "contentDetails": {"videoId": "v1", "videoPublishedAt": "2021-03-04T05:06:07Z"}},
                {"id": "pi2", "contentDetails": {"videoId": "v2"}}
            ]
        }"#;
        let page: PlaylistItemListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("EAAaBlBUOkNESQ"));
        assert_eq!(page.page_info.total_results, 3);
        let ids: Vec<_> = page
            .items
            .iter()
            .map(|item| item.content_details.video_id.as_str())
            .collect();
        assert_eq!(ids, ["v1", "v2"]);
        assert!(page.items[1].content_details.video_published_at.is_none());
    }
}
