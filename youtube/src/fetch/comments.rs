use crate::table::{Row, Table};
use crate::youtube_api::{ApiError, YouTubeApi};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

const COMMENT_THREAD_PARTS: &str = "snippet,replies";

/// Most top-level comments kept per video.
pub const MAX_COMMENTS_PER_VIDEO: usize = 10;

/// The first few top-level comments of one video, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCommentsRecord {
    pub video_id: String,
    pub comments: Vec<String>,
}

impl Row for VideoCommentsRecord {
    const COLUMNS: &'static [&'static str] = &["video_id", "comments"];
}

/// Why a video's comments could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The owner turned comments off.
    CommentsDisabled,
    /// The video does not exist or is private.
    NotFound,
    /// Anything else: quota, network, malformed response.
    Other(String),
}

impl SkipReason {
    fn classify(error: &eyre::Report) -> Self {
        match error.downcast_ref::<ApiError>() {
            Some(api) if api.is_comments_disabled() => Self::CommentsDisabled,
            Some(api) if api.is_not_found() => Self::NotFound,
            _ => Self::Other(format!("{error:#}")),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentsDisabled => f.write_str("comments are disabled"),
            Self::NotFound => f.write_str("video not found"),
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

/// What happened when fetching comments for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsOutcome {
    Fetched(VideoCommentsRecord),
    Skipped { video_id: String, reason: SkipReason },
}

/// Fetches comments for one video; never fails, a failure becomes [`CommentsOutcome::Skipped`].
#[instrument(skip(api))]
pub async fn fetch_video_comments<A>(api: &A, video_id: &str) -> CommentsOutcome
where
    A: YouTubeApi,
{
    match api.list_comment_threads(COMMENT_THREAD_PARTS, video_id).await {
        Ok(response) => {
            let comments: Vec<String> = response
                .items
                .into_iter()
                .take(MAX_COMMENTS_PER_VIDEO)
                .map(|thread| thread.snippet.top_level_comment.snippet.text_original)
                .collect();
            tracing::trace!(comments = comments.len(), "fetched comments");
            CommentsOutcome::Fetched(VideoCommentsRecord {
                video_id: video_id.to_string(),
                comments,
            })
        }
        Err(e) => {
            let reason = SkipReason::classify(&e);
            tracing::warn!(video_id, %reason, "could not get comments for video");
            CommentsOutcome::Skipped {
                video_id: video_id.to_string(),
                reason,
            }
        }
    }
}

/// Fetches comments for each video in turn, reporting per-video outcomes in input order.
#[instrument(skip_all, fields(videos = video_ids.len()))]
pub async fn video_comment_outcomes<A, S>(api: &A, video_ids: &[S]) -> Vec<CommentsOutcome>
where
    A: YouTubeApi,
    S: AsRef<str>,
{
    let mut outcomes = Vec::with_capacity(video_ids.len());
    for video_id in video_ids {
        outcomes.push(fetch_video_comments(api, video_id.as_ref()).await);
    }
    outcomes
}

/// Up to [`MAX_COMMENTS_PER_VIDEO`] top-level comments for each video.
///
/// One `commentThreads.list` call per video, one after another, with the `snippet` and
/// `replies` parts and plain-text formatting. Only the first page of threads is read.
///
/// # Arguments
///
/// * `api` - The client to issue the calls with
/// * `video_ids` - The videos to read comments from
///
/// # Returns
///
/// One [`VideoCommentsRecord`] per video whose comments could be read, in input order. A
/// video with comments enabled but none posted yields a row with no comments.
///
/// This never fails. A video whose call or decoding fails, most often because its comments
/// are disabled, is logged at `warn` and left out; the remaining videos are still processed.
/// Use [`video_comment_outcomes`] to see which videos were skipped and why.
///
/// # API Reference
///
/// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
pub async fn video_comments<A, S>(api: &A, video_ids: &[S]) -> Table<VideoCommentsRecord>
where
    A: YouTubeApi,
    S: AsRef<str>,
{
    let outcomes = video_comment_outcomes(api, video_ids).await;
    let mut skipped = 0;
    let table: Table<_> = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            CommentsOutcome::Fetched(record) => Some(record),
            CommentsOutcome::Skipped { .. } => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        tracing::info!(
            fetched = table.len(),
            skipped,
            "some videos had no retrievable comments"
        );
    }
    table
}
