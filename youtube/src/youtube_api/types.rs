//! Shared types and pagination infrastructure for the YouTube API client.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

/// One page of a list response: the items in response order and the token for the next page.
#[derive(Debug)]
pub struct Page<T> {
    pub items: VecDeque<T>,
    pub next_page_token: Option<String>,
}

type PendingPage<'a, F, T> = Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + 'a + Send>>;

/// A paginated stream over a YouTube API list endpoint.
///
/// Items are yielded one at a time. When the buffered page runs dry, the fetcher is called
/// again with the `nextPageToken` of the previous response. The stream ends after the first
/// page that carries no token. There is no upper bound on the number of pages; callers that
/// need one should cap the stream themselves (e.g. with [`tokio_stream::StreamExt::take`]).
///
/// A fetch error is yielded once and ends the stream.
pub struct PagedStream<'a, T, F> {
    buffered: VecDeque<T>,
    pending: Option<PendingPage<'a, F, T>>,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Creates a stream whose first request is issued with no page token.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        let first_page = async move {
            let page = fetcher(None).await?;
            Ok((fetcher, page))
        };
        Self {
            buffered: VecDeque::new(),
            pending: Some(Box::pin(first_page)),
            pages_fetched: 0,
            exhausted: false,
        }
    }

    /// Number of pages received so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.exhausted {
                return Poll::Ready(None);
            }

            let Some(pending) = self.pending.as_mut() else {
                self.exhausted = true;
                return Poll::Ready(None);
            };

            match pending.as_mut().poll(cx) {
                Poll::Ready(Ok((fetcher, page))) => {
                    self.pages_fetched += 1;
                    tracing::trace!(
                        page = self.pages_fetched,
                        items = page.items.len(),
                        has_next = page.next_page_token.is_some(),
                        "received page"
                    );
                    self.buffered.extend(page.items);

                    if let Some(token) = page.next_page_token {
                        // queued, but only polled once the buffer is drained
                        self.pending = Some(Box::pin(async move {
                            let page = fetcher(Some(token)).await?;
                            Ok((fetcher, page))
                        }));
                    } else {
                        self.pending = None;
                        self.exhausted = true;
                    }
                }
                Poll::Ready(Err(e)) => {
                    self.pending = None;
                    self.exhausted = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// Decodes a count that the API sends as a decimal string (and occasionally as a number).
///
/// Anything that is absent, `null`, or not a non-negative integer becomes `None`; a malformed
/// count never fails the surrounding response.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        _ => None,
    })
}

/// Decodes a field that may come back in an unexpected shape.
///
/// A value that does not decode as `T` (a timestamp without an offset, `tags` that is not a
/// list of strings, ...) becomes `None` instead of failing the whole response.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}
