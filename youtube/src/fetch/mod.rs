//! Fetch-and-flatten operations over a [`YouTubeApi`].
//!
//! Each operation turns one or more list calls into a [`Table`](crate::table::Table) (or, for
//! playlists, a list of ids). They are independent of one another; a typical pipeline is
//! [`channel_stats`] → [`collect_playlist_video_ids`] on the uploads playlist →
//! [`video_details`] and [`video_comments`] on the resulting ids.
//!
//! All calls are issued sequentially.
//!
//! [`YouTubeApi`]: crate::youtube_api::YouTubeApi

mod channels;
mod comments;
mod playlists;
mod videos;

#[cfg(test)]
pub(crate) mod testing;

pub use channels::{ChannelRecord, channel_stats};
pub use comments::{
    CommentsOutcome, MAX_COMMENTS_PER_VIDEO, SkipReason, VideoCommentsRecord,
    fetch_video_comments, video_comment_outcomes, video_comments,
};
pub use playlists::{channel_uploads, collect_playlist_video_ids, playlist_video_ids};
pub use videos::{VIDEO_BATCH_SIZE, VideoRecord, video_details};
