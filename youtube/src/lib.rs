//! Pull channel statistics, playlist contents, video metadata and top-level comments out of
//! the YouTube Data API v3 and flatten them into tables.
//!
//! The crate is split in three layers:
//!
//! - [`youtube_api`]: typed responses for the four list endpoints, the [`YouTubeApi`] trait
//!   describing them, and [`YouTubeClient`], its HTTPS implementation.
//! - [`fetch`]: the fetch-and-flatten operations, generic over any [`YouTubeApi`].
//! - [`table`]: the row/column result type those operations return.
//!
//! ```rust,no_run
//! use youtube_harvest::{ClientConfig, Credentials, YouTubeClient, fetch};
//!
//! # async fn example() -> eyre::Result<()> {
//! let config = ClientConfig::default().with_credentials(Credentials::ApiKey("AIza...".into()));
//! let yt = YouTubeClient::from_config(&config)?;
//!
//! let channels = fetch::channel_stats(&yt, &["UC_x5XG1OV2P6uZZ5FSM9Ttw"]).await?;
//! for channel in &channels {
//!     let video_ids = fetch::collect_playlist_video_ids(&yt, &channel.playlist_id).await?;
//!     let details = fetch::video_details(&yt, &video_ids).await?;
//!     let comments = fetch::video_comments(&yt, &video_ids).await;
//!     println!("{}: {} videos, {} with comments", channel.channel_name, details.len(), comments.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetch;
pub mod table;
pub mod youtube_api;

pub use config::{ClientConfig, Credentials};
pub use table::{Row, Table};
pub use youtube_api::{ApiError, YouTubeApi, YouTubeClient};
