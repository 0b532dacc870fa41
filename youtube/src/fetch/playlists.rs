use crate::fetch::channels::channel_stats;
use crate::youtube_api::{Page, PagedStream, YouTubeApi};
use eyre::Context;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

const PLAYLIST_ITEM_PARTS: &str = "contentDetails";
const PLAYLIST_PAGE_SIZE: u32 = 50;

/// Lazily yields the video ids of a playlist in playlist order.
///
/// Pages of up to 50 items are requested as the stream is consumed, and the stream ends
/// after the first response without a `nextPageToken`. Nothing bounds the number of pages;
/// use [`StreamExt::take`] to cap it. Duplicates in the playlist are yielded as-is. An error
/// from any page is yielded once and ends the stream.
///
/// # Arguments
///
/// * `api` - The client to issue the calls with
/// * `playlist_id` - The playlist to enumerate, e.g. a channel's uploads playlist (`UU...`)
///
/// # API Reference
///
/// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
pub fn playlist_video_ids<'a, A>(
    api: &'a A,
    playlist_id: &'a str,
) -> impl Stream<Item = eyre::Result<String>> + 'a
where
    A: YouTubeApi,
{
    PagedStream::new(move |page_token: Option<String>| async move {
        let response = api
            .list_playlist_items(
                PLAYLIST_ITEM_PARTS,
                playlist_id,
                PLAYLIST_PAGE_SIZE,
                page_token.as_deref(),
            )
            .await
            .with_context(|| format!("list items of playlist {playlist_id}"))?;
        Ok(Page {
            items: response
                .items
                .into_iter()
                .map(|item| item.content_details.video_id)
                .collect(),
            next_page_token: response.next_page_token,
        })
    })
}

/// Collects every video id of a playlist, following pagination to the end.
#[instrument(skip(api))]
pub async fn collect_playlist_video_ids<A>(api: &A, playlist_id: &str) -> eyre::Result<Vec<String>>
where
    A: YouTubeApi,
{
    let stream = playlist_video_ids(api, playlist_id);
    let mut stream = std::pin::pin!(stream);
    let mut video_ids = Vec::new();
    while let Some(video_id) = stream.next().await {
        video_ids.push(video_id?);
    }
    tracing::debug!(videos = video_ids.len(), "enumerated playlist");
    Ok(video_ids)
}

/// All video ids uploaded by a channel, via the channel's uploads playlist.
#[instrument(skip(api))]
pub async fn channel_uploads<A>(api: &A, channel_id: &str) -> eyre::Result<Vec<String>>
where
    A: YouTubeApi,
{
    let channels = channel_stats(api, &[channel_id]).await?;
    let Some(channel) = channels.rows().first() else {
        eyre::bail!("channel not found: {}", channel_id);
    };
    collect_playlist_video_ids(api, &channel.playlist_id).await
}
