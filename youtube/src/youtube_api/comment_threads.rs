//! YouTube CommentThreads API types.

use crate::youtube_api::types::{PageInfo, lenient_count};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: VecDeque<CommentThread>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `commentThread`: a top-level comment and, if requested, some of its replies.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
    /// Requested with the `replies` part, but frequently omitted by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<CommentReplies>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
    #[serde(rename = "totalReplyCount", default, deserialize_with = "lenient_count")]
    pub total_reply_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentReplies {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A single `comment` resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    /// The comment's text as originally posted.
    #[serde(rename = "textOriginal")]
    pub text_original: String,
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
    #[serde(rename = "likeCount", default, deserialize_with = "lenient_count")]
    pub like_count: Option<u64>,
}
