use crate::fetch::channels::join_ids;
use crate::table::{Row, Table};
use crate::youtube_api::{Video, YouTubeApi};
use eyre::Context;
use jiff::{Span, SpanRelativeTo, Timestamp, Unit};
use serde::Serialize;
use tracing::instrument;

const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

/// Most ids `videos.list` accepts in one call.
pub const VIDEO_BATCH_SIZE: usize = 50;

/// Flattened snippet, statistics and content details of one video.
///
/// Every field other than `video_id` is `None` when the API left it out, whether because the
/// whole part was missing or just that field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    // snippet
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
    // statistics
    #[serde(rename = "viewCount")]
    pub view_count: Option<u64>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: Option<u64>,
    #[serde(rename = "favouriteCount")]
    pub favourite_count: Option<u64>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<u64>,
    // contentDetails
    pub duration: Option<String>,
    pub definition: Option<String>,
    pub caption: Option<String>,
}

impl Row for VideoRecord {
    const COLUMNS: &'static [&'static str] = &[
        "video_id",
        "channelTitle",
        "title",
        "description",
        "tags",
        "publishedAt",
        "viewCount",
        "likeCount",
        "dislikeCount",
        "favouriteCount",
        "commentCount",
        "duration",
        "definition",
        "caption",
    ];
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        let snippet = video.snippet.unwrap_or_default();
        let statistics = video.statistics.unwrap_or_default();
        let details = video.content_details.unwrap_or_default();
        Self {
            video_id: video.id,
            channel_title: snippet.channel_title,
            title: snippet.title,
            description: snippet.description,
            tags: snippet.tags,
            published_at: snippet.published_at,
            view_count: statistics.view_count,
            like_count: statistics.like_count,
            dislike_count: statistics.dislike_count,
            favourite_count: statistics.favorite_count,
            comment_count: statistics.comment_count,
            duration: details.duration,
            definition: details.definition,
            caption: details.caption,
        }
    }
}

impl VideoRecord {
    /// The ISO 8601 `duration`, parsed. `None` if absent or unparseable.
    pub fn duration_span(&self) -> Option<Span> {
        let raw = self.duration.as_deref()?;
        match raw.parse::<Span>() {
            Ok(span) => Some(span),
            Err(e) => {
                tracing::trace!(video_id = %self.video_id, duration = raw, "unparseable duration: {e}");
                None
            }
        }
    }

    /// Length of the video in whole seconds.
    ///
    /// Days in a duration are taken as 24 hours.
    pub fn duration_seconds(&self) -> Option<i64> {
        let span = self.duration_span()?;
        let seconds = span
            .total((Unit::Second, SpanRelativeTo::days_are_24_hours()))
            .ok()?;
        Some(seconds as i64)
    }

    /// Whether captions are available, from the API's `"true"`/`"false"` string.
    pub fn has_captions(&self) -> Option<bool> {
        self.caption.as_deref()?.parse().ok()
    }
}

/// Fetches details for any number of videos.
///
/// Ids are sent in consecutive batches of [`VIDEO_BATCH_SIZE`], one `videos.list` call per
/// batch, with the `snippet`, `contentDetails` and `statistics` parts. Batches are requested one
/// after another.
///
/// # Arguments
///
/// * `api` - The client to issue the calls with
/// * `video_ids` - Video ids of any length; an empty slice makes no call at all
///
/// # Returns
///
/// One [`VideoRecord`] per video the API returned, in batch order and, within a batch, in
/// response order. Ids the API does not return (deleted or private videos) produce no row.
/// A field that is absent or comes back in an unexpected shape is `None` on that row only.
///
/// # Errors
///
/// The first failing call aborts the whole fetch; rows from earlier batches are discarded.
/// The error names the batch and keeps its [`ApiError`](crate::youtube_api::ApiError).
///
/// # API Reference
///
/// <https://developers.google.com/youtube/v3/docs/videos/list>
#[instrument(skip_all, fields(videos = video_ids.len()))]
pub async fn video_details<A, S>(api: &A, video_ids: &[S]) -> eyre::Result<Table<VideoRecord>>
where
    A: YouTubeApi,
    S: AsRef<str>,
{
    let mut table = Table::new();
    for (batch, chunk) in video_ids.chunks(VIDEO_BATCH_SIZE).enumerate() {
        let ids = join_ids(chunk);
        let response = api
            .list_videos(VIDEO_PARTS, &ids)
            .await
            .with_context(|| format!("list videos of batch {batch}"))?;

        tracing::trace!(
            batch,
            requested = chunk.len(),
            returned = response.items.len(),
            "fetched video batch"
        );
        table.extend(response.items.into_iter().map(VideoRecord::from));
    }
    Ok(table)
}
