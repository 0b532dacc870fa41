//! Core YouTube API client functionality.

use crate::config::{ClientConfig, Credentials, DEFAULT_BASE_URL};
use crate::youtube_api::{
    channels::ChannelListResponse, comment_threads::CommentThreadListResponse,
    error::ApiError, playlist_items::PlaylistItemListResponse, videos::VideoListResponse,
};
use eyre::Context;
use http::Method;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::instrument;

/// The read-only list calls the fetchers are built on.
///
/// Every method issues exactly one request and decodes the response; pagination and
/// batching are the caller's job. `ids` arguments are comma-joined identifier lists.
///
/// [`YouTubeClient`] implements this over HTTPS. Anything else that can answer these four
/// calls (a recording, a test fake) can be handed to the fetchers in its place.
pub trait YouTubeApi: Sync {
    /// `channels.list` filtered by `id`.
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    fn list_channels(
        &self,
        part: &str,
        ids: &str,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send;

    /// `playlistItems.list` for one playlist.
    ///
    /// `page_token` is the `nextPageToken` of the previous page, or `None` for the first page.
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    fn list_playlist_items(
        &self,
        part: &str,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<PlaylistItemListResponse>> + Send;

    /// `videos.list` filtered by `id`. At most 50 ids per call.
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    fn list_videos(
        &self,
        part: &str,
        ids: &str,
    ) -> impl Future<Output = eyre::Result<VideoListResponse>> + Send;

    /// `commentThreads.list` for one video, default page size, plain-text comment bodies.
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    fn list_comment_threads(
        &self,
        part: &str,
        video_id: &str,
    ) -> impl Future<Output = eyre::Result<CommentThreadListResponse>> + Send;
}

/// Client for the YouTube Data API v3.
///
/// Holds the credentials and a shared [`reqwest::Client`]. Cloning is cheap; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    base_url: String,
    credentials: Credentials,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client against the public API endpoint.
    pub fn new(credentials: Credentials, client: reqwest::Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            client,
        }
    }

    /// Builds the HTTP client (timeout, user agent) and the API client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> eyre::Result<Self> {
        let Some(credentials) = config.credentials.clone() else {
            eyre::bail!("no YouTube API credentials configured");
        };

        let mut builder = reqwest::ClientBuilder::new()
            .timeout(config.timeout())
            // API calls never legitimately redirect
            .redirect(reqwest::redirect::Policy::none());
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().context("build HTTP client")?;

        Ok(Self::new(credentials, client).with_base_url(&config.base_url))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an authorized request to one API resource and decodes the JSON response.
    ///
    /// Non-success statuses are turned into an [`ApiError`] built from the response body.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        let mut request = self.client.request(method.clone(), &url).query(query_params);
        request = match &self.credentials {
            Credentials::ApiKey(key) => request.query(&[("key", key.as_str())]),
            Credentials::BearerToken(token) => {
                request.header("Authorization", format!("Bearer {}", token))
            }
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::from_body(status, &body).into());
        }

        response
            .json()
            .await
            .with_context(|| format!("parse YouTube {} API response as JSON", resource))
    }
}

impl YouTubeApi for YouTubeClient {
    /// See: <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn list_channels(&self, part: &str, ids: &str) -> eyre::Result<ChannelListResponse> {
        let channels: ChannelListResponse = self
            .request_json(Method::GET, "channels", &[("part", part), ("id", ids)])
            .await?;

        tracing::debug!(
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels)
    }

    /// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        part: &str,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", part),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];
        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let items: PlaylistItemListResponse = self
            .request_json(Method::GET, "playlistItems", &query_params)
            .await?;

        tracing::debug!(
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// See: <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, ids))]
    async fn list_videos(&self, part: &str, ids: &str) -> eyre::Result<VideoListResponse> {
        let videos: VideoListResponse = self
            .request_json(Method::GET, "videos", &[("part", part), ("id", ids)])
            .await?;

        tracing::debug!(returned_items = videos.items.len(), "fetched videos");

        Ok(videos)
    }

    /// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    async fn list_comment_threads(
        &self,
        part: &str,
        video_id: &str,
    ) -> eyre::Result<CommentThreadListResponse> {
        let query_params = [
            ("part", part),
            ("videoId", video_id),
            ("textFormat", "plainText"),
        ];

        let threads: CommentThreadListResponse = self
            .request_json(Method::GET, "commentThreads", &query_params)
            .await?;

        tracing::debug!(
            returned_items = threads.items.len(),
            "fetched comment threads"
        );

        Ok(threads)
    }
}
