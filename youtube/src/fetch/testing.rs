//! In-memory [`YouTubeApi`] for exercising the fetchers without a network.

use crate::youtube_api::{
    ApiError, Channel, ChannelListResponse, CommentThread, CommentThreadListResponse,
    PlaylistItem, PlaylistItemListResponse, Video, VideoListResponse, YouTubeApi,
};
use eyre::Context;
use http::StatusCode;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

/// One call as the fetchers issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Channels {
        part: String,
        ids: String,
    },
    PlaylistItems {
        part: String,
        playlist_id: String,
        max_results: u32,
        page_token: Option<String>,
    },
    Videos {
        part: String,
        ids: String,
    },
    CommentThreads {
        part: String,
        video_id: String,
    },
}

#[derive(Default)]
pub(crate) struct FakeApi {
    channels: Vec<serde_json::Value>,
    playlists: HashMap<String, Vec<Vec<String>>>,
    videos: HashMap<String, serde_json::Value>,
    comments: HashMap<String, Result<Vec<serde_json::Value>, ApiError>>,
    failing_video_batch: Option<(usize, ApiError)>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_channel(mut self, id: &str, title: &str, uploads: &str) -> Self {
        let channel = json!({
            "id": id,
            "snippet": {"title": title},
            "statistics": {"subscriberCount": "1000", "viewCount": "50000", "videoCount": "25"},
            "contentDetails": {"relatedPlaylists": {"uploads": uploads}}
        });
        self.channels.push(channel);
        self
    }

    /// Registers a playlist served as the given pages, in order.
    pub(crate) fn with_playlist(mut self, playlist_id: &str, pages: Vec<Vec<String>>) -> Self {
        self.playlists.insert(playlist_id.to_string(), pages);
        self
    }

    /// Registers a video resource given as raw API JSON (without the `id`).
    pub(crate) fn with_video_json(mut self, id: &str, mut resource: serde_json::Value) -> Self {
        resource["id"] = json!(id);
        self.videos.insert(id.to_string(), resource);
        self
    }

    /// Registers a fully populated video.
    pub(crate) fn with_video(self, id: &str) -> Self {
        self.with_video_json(id, full_video(id))
    }

    /// Makes the `batch`-th `videos.list` call (counting from 0) fail with `error`.
    pub(crate) fn with_failing_video_batch(mut self, batch: usize, error: ApiError) -> Self {
        self.failing_video_batch = Some((batch, error));
        self
    }

    /// Registers one top-level comment thread per text.
    pub(crate) fn with_comments(self, video_id: &str, texts: Vec<String>) -> Self {
        let threads = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                json!({
                    "id": format!("{video_id}-t{i}"),
                    "snippet": {
                        "videoId": video_id,
                        "topLevelComment": {"id": format!("{video_id}-c{i}"), "snippet": {"textOriginal": text}},
                        "totalReplyCount": 0
                    }
                })
            })
            .collect();
        self.with_comment_threads_json(video_id, threads)
    }

    /// Registers comment threads given as raw API JSON.
    pub(crate) fn with_comment_threads_json(
        mut self,
        video_id: &str,
        threads: Vec<serde_json::Value>,
    ) -> Self {
        self.comments.insert(video_id.to_string(), Ok(threads));
        self
    }

    pub(crate) fn with_comments_error(mut self, video_id: &str, error: ApiError) -> Self {
        self.comments.insert(video_id.to_string(), Err(error));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

pub(crate) fn full_video(id: &str) -> serde_json::Value {
    json!({
        "snippet": {
            "publishedAt": "2022-06-01T12:00:00Z",
            "channelTitle": "Rust Talks",
            "title": format!("Video {id}"),
            "description": "a talk",
            "tags": ["rust", "talk"]
        },
        "statistics": {
            "viewCount": "1200",
            "likeCount": "80",
            "favoriteCount": "0",
            "commentCount": "7"
        },
        "contentDetails": {"duration": "PT1H2M3S", "definition": "hd", "caption": "false"}
    })
}

pub(crate) fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

impl YouTubeApi for FakeApi {
    async fn list_channels(&self, part: &str, ids: &str) -> eyre::Result<ChannelListResponse> {
        self.record(Call::Channels {
            part: part.to_string(),
            ids: ids.to_string(),
        });
        let wanted: Vec<&str> = ids.split(',').collect();
        let items = self
            .channels
            .iter()
            .filter(|channel| wanted.contains(&channel["id"].as_str().unwrap_or_default()))
            .map(|channel| serde_json::from_value::<Channel>(channel.clone()))
            .collect::<Result<_, _>>()?;
        Ok(ChannelListResponse {
            items,
            ..Default::default()
        })
    }

    async fn list_playlist_items(
        &self,
        part: &str,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        self.record(Call::PlaylistItems {
            part: part.to_string(),
            playlist_id: playlist_id.to_string(),
            max_results,
            page_token: page_token.map(str::to_owned),
        });
        let Some(pages) = self.playlists.get(playlist_id) else {
            return Err(ApiError::new(
                StatusCode::NOT_FOUND,
                Some("playlistNotFound"),
                "playlist not found",
            )
            .into());
        };
        let index = match page_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| eyre::eyre!("bad page token {token}"))?,
        };
        let page = pages.get(index).cloned().unwrap_or_default();
        let items = page
            .into_iter()
            .enumerate()
            .map(|(i, video_id)| PlaylistItem {
                id: format!("{playlist_id}-{index}-{i}"),
                content_details: crate::youtube_api::PlaylistItemContentDetails {
                    video_id,
                    video_published_at: None,
                },
            })
            .collect();
        let next_page_token = (index + 1 < pages.len()).then(|| format!("page-{}", index + 1));
        Ok(PlaylistItemListResponse {
            items,
            next_page_token,
            ..Default::default()
        })
    }

    async fn list_videos(&self, part: &str, ids: &str) -> eyre::Result<VideoListResponse> {
        let batch = self
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::Videos { .. }))
            .count();
        self.record(Call::Videos {
            part: part.to_string(),
            ids: ids.to_string(),
        });
        if let Some((_, error)) = self
            .failing_video_batch
            .as_ref()
            .filter(|(failing, _)| *failing == batch)
        {
            return Err(error.clone().into());
        }
        let items = ids
            .split(',')
            .filter_map(|id| self.videos.get(id))
            .map(|resource| serde_json::from_value::<Video>(resource.clone()))
            .collect::<Result<_, _>>()?;
        Ok(VideoListResponse {
            items,
            ..Default::default()
        })
    }

    async fn list_comment_threads(
        &self,
        part: &str,
        video_id: &str,
    ) -> eyre::Result<CommentThreadListResponse> {
        self.record(Call::CommentThreads {
            part: part.to_string(),
            video_id: video_id.to_string(),
        });
        let threads = match self.comments.get(video_id) {
            Some(Ok(threads)) => threads,
            Some(Err(e)) => return Err(e.clone().into()),
            None => {
                return Err(ApiError::new(
                    StatusCode::NOT_FOUND,
                    Some("videoNotFound"),
                    "video not found",
                )
                .into());
            }
        };
        let items = threads
            .iter()
            .map(|thread| serde_json::from_value::<CommentThread>(thread.clone()))
            .collect::<Result<_, _>>()
            .context("decode comment threads")?;
        Ok(CommentThreadListResponse {
            items,
            ..Default::default()
        })
    }
}
