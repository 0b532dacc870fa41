use crate::table::{Row, Table};
use crate::youtube_api::{Channel, YouTubeApi};
use eyre::Context;
use serde::Serialize;
use tracing::instrument;

const CHANNEL_PARTS: &str = "snippet,contentDetails,statistics";

/// Headline statistics for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRecord {
    #[serde(rename = "channelName")]
    pub channel_name: String,
    /// `None` when the channel hides its subscriber count.
    pub subscribers: Option<u64>,
    pub views: Option<u64>,
    #[serde(rename = "totalVideos")]
    pub total_videos: Option<u64>,
    /// The channel's uploads playlist, suitable for [`super::playlist_video_ids`].
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
}

impl Row for ChannelRecord {
    const COLUMNS: &'static [&'static str] = &[
        "channelName",
        "subscribers",
        "views",
        "totalVideos",
        "playlistId",
    ];
}

impl From<Channel> for ChannelRecord {
    fn from(channel: Channel) -> Self {
        Self {
            channel_name: channel.snippet.title,
            subscribers: channel.statistics.subscriber_count,
            views: channel.statistics.view_count,
            total_videos: channel.statistics.video_count,
            playlist_id: channel.content_details.related_playlists.uploads,
        }
    }
}

/// Fetches statistics for a batch of channels with a single `channels.list` call.
///
/// Rows follow the order of the API response, and channels the API does not know are simply
/// absent. The API accepts at most 50 ids per call; splitting larger batches is up to the
/// caller.
///
/// # Arguments
///
/// * `api` - The client to issue the call with
/// * `channel_ids` - Channel ids (`UC...`), at least one
///
/// # Returns
///
/// One [`ChannelRecord`] per channel the API returned. Its `playlist_id` is the uploads
/// playlist, ready for [`collect_playlist_video_ids`](super::collect_playlist_video_ids).
///
/// # Errors
///
/// Fails without calling the API if `channel_ids` is empty. An error from the call is returned
/// with its [`ApiError`](crate::youtube_api::ApiError) intact.
///
/// # API Reference
///
/// <https://developers.google.com/youtube/v3/docs/channels/list>
#[instrument(skip_all, fields(channels = channel_ids.len()))]
pub async fn channel_stats<A, S>(api: &A, channel_ids: &[S]) -> eyre::Result<Table<ChannelRecord>>
where
    A: YouTubeApi,
    S: AsRef<str>,
{
    if channel_ids.is_empty() {
        eyre::bail!("no channel ids given");
    }

    let ids = join_ids(channel_ids);
    let response = api
        .list_channels(CHANNEL_PARTS, &ids)
        .await
        .with_context(|| format!("list channels {ids}"))?;

    let table: Table<ChannelRecord> = response.items.into_iter().map(ChannelRecord::from).collect();
    if table.len() < channel_ids.len() {
        tracing::debug!(
            requested = channel_ids.len(),
            returned = table.len(),
            "some channels were not found"
        );
    }
    Ok(table)
}

pub(crate) fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::{Call, FakeApi};
    use crate::youtube_api::ApiError;
    use http::StatusCode;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn one_call_for_all_ids() {
        let api = FakeApi::new()
            .with_channel("A", "Alpha", "UUA")
            .with_channel("B", "Beta", "UUB");

        let table = channel_stats(&api, &["A", "B"]).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Channels {
                part: "snippet,contentDetails,statistics".into(),
                ids: "A,B".into(),
            }]
        );
        assert_eq!(
            table.rows(),
            &[
                ChannelRecord {
                    channel_name: "Alpha".into(),
                    subscribers: Some(1000),
                    views: Some(50000),
                    total_videos: Some(25),
                    playlist_id: "UUA".into(),
                },
                ChannelRecord {
                    channel_name: "Beta".into(),
                    subscribers: Some(1000),
                    views: Some(50000),
                    total_videos: Some(25),
                    playlist_id: "UUB".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn unknown_channel_is_left_out() {
        let api = FakeApi::new().with_channel("A", "Alpha", "UUA");

        let table = channel_stats(&api, &["A", "B"]).await.unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].channel_name, "Alpha");
    }

    #[tokio::test]
    async fn empty_input_makes_no_call() {
        let api = FakeApi::new();
        let none: &[&str] = &[];

        assert!(channel_stats(&api, none).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        struct Failing;
        impl YouTubeApi for Failing {
            async fn list_channels(
                &self,
                _: &str,
                _: &str,
            ) -> eyre::Result<crate::youtube_api::ChannelListResponse> {
                Err(ApiError::new(StatusCode::FORBIDDEN, Some("quotaExceeded"), "quota").into())
            }
            async fn list_playlist_items(
                &self,
                _: &str,
                _: &str,
                _: u32,
                _: Option<&str>,
            ) -> eyre::Result<crate::youtube_api::PlaylistItemListResponse> {
                unreachable!()
            }
            async fn list_videos(
                &self,
                _: &str,
                _: &str,
            ) -> eyre::Result<crate::youtube_api::VideoListResponse> {
                unreachable!()
            }
            async fn list_comment_threads(
                &self,
                _: &str,
                _: &str,
            ) -> eyre::Result<crate::youtube_api::CommentThreadListResponse> {
                unreachable!()
            }
        }

        let err = channel_stats(&Failing, &["A"]).await.unwrap_err();
        assert!(err.downcast_ref::<ApiError>().unwrap().is_quota_exceeded());
    }

    #[test]
    fn columns_match_serialized_fields() {
        let record = ChannelRecord {
            channel_name: "Alpha".into(),
            subscribers: None,
            views: Some(1),
            total_videos: Some(2),
            playlist_id: "UUA".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let mut expected: Vec<_> = ChannelRecord::COLUMNS.iter().map(|c| c.to_string()).collect();
        keys.sort();
        expected.sort();
        assert_eq!(keys, expected);
    }
}
