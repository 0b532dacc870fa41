//! YouTube Data API v3 client library.
//!
//! Covers the four read-only list endpoints the fetchers in [`crate::fetch`] need:
//! `channels`, `playlistItems`, `videos` and `commentThreads`. Responses are decoded once
//! into the typed structs below; fields the API may leave out are `Option`s.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_harvest::youtube_api::{YouTubeApi, YouTubeClient};
//! use youtube_harvest::Credentials;
//!
//! # async fn example() -> eyre::Result<()> {
//! let yt = YouTubeClient::new(Credentials::ApiKey("AIza...".into()), reqwest::Client::new());
//! let page = yt
//!     .list_playlist_items("contentDetails", "UU_x5XG1OV2P6uZZ5FSM9Ttw", 50, None)
//!     .await?;
//! for item in &page.items {
//!     println!("{}", item.content_details.video_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod comment_threads;
pub mod error;
pub mod playlist_items;
pub mod types;
pub mod videos;

pub use client::{YouTubeApi, YouTubeClient};
pub use error::ApiError;
pub use types::{Page, PageInfo, PagedStream};

pub use channels::{
    Channel, ChannelContentDetails, ChannelListResponse, ChannelSnippet, ChannelStatistics,
    RelatedPlaylists,
};
pub use comment_threads::{
    Comment, CommentReplies, CommentSnippet, CommentThread, CommentThreadListResponse,
    CommentThreadSnippet,
};
pub use playlist_items::{PlaylistItem, PlaylistItemContentDetails, PlaylistItemListResponse};
pub use videos::{Video, VideoContentDetails, VideoListResponse, VideoSnippet, VideoStatistics};
