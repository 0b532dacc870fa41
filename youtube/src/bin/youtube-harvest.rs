use clap::{Parser, Subcommand};
use eyre::Context;
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio_stream::StreamExt;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_harvest::table::{Row, Table};
use youtube_harvest::{ClientConfig, Credentials, YouTubeClient, fetch};

/// Fetch YouTube channel, playlist, video and comment data as JSON tables.
#[derive(Parser, Debug)]
#[command(name = "youtube-harvest", version)]
struct Cli {
    /// JSON config file (base_url, credentials, timeout_secs, user_agent).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit one JSON object per line instead of a JSON array.
    #[arg(long, global = true)]
    jsonl: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Statistics and uploads playlist of up to 50 channels.
    Channels {
        #[arg(required = true)]
        channel_ids: Vec<String>,
    },
    /// Video ids of a playlist, in playlist order.
    Playlist {
        playlist_id: String,
        /// Stop after this many ids.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Snippet, statistics and content details of videos.
    Videos {
        #[arg(required = true)]
        video_ids: Vec<String>,
    },
    /// First top-level comments of videos; videos without comments are skipped.
    Comments {
        #[arg(required = true)]
        video_ids: Vec<String>,
    },
    /// Every upload of a channel, as ids or (with --details) as video details.
    Uploads {
        channel_id: String,
        #[arg(long)]
        details: bool,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path).await?,
        None => ClientConfig::default(),
    };
    // the environment wins over the config file
    if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
        config.credentials = Some(Credentials::ApiKey(key));
    } else if let Ok(token) = std::env::var("YOUTUBE_BEARER_TOKEN") {
        config.credentials = Some(Credentials::BearerToken(token));
    }
    let yt = YouTubeClient::from_config(&config)
        .context("set up YouTube client (set YOUTUBE_API_KEY or pass --config)")?;

    match cli.command {
        Command::Channels { channel_ids } => {
            let table = fetch::channel_stats(&yt, &channel_ids).await?;
            emit(&table, cli.jsonl)
        }
        Command::Playlist { playlist_id, limit } => {
            let stream = fetch::playlist_video_ids(&yt, &playlist_id).take(limit.unwrap_or(usize::MAX));
            let mut stream = std::pin::pin!(stream);
            let mut video_ids = Vec::new();
            while let Some(video_id) = stream.next().await {
                video_ids.push(video_id.context("enumerate playlist")?);
            }
            emit_ids(&video_ids, cli.jsonl)
        }
        Command::Videos { video_ids } => {
            let table = fetch::video_details(&yt, &video_ids).await?;
            emit(&table, cli.jsonl)
        }
        Command::Comments { video_ids } => {
            let table = fetch::video_comments(&yt, &video_ids).await;
            emit(&table, cli.jsonl)
        }
        Command::Uploads {
            channel_id,
            details,
        } => {
            let video_ids = fetch::channel_uploads(&yt, &channel_id).await?;
            tracing::info!(videos = video_ids.len(), "found uploads");
            if details {
                let table = fetch::video_details(&yt, &video_ids).await?;
                emit(&table, cli.jsonl)
            } else {
                emit_ids(&video_ids, cli.jsonl)
            }
        }
    }
}

fn emit<R: Row>(table: &Table<R>, jsonl: bool) -> eyre::Result<()> {
    let stdout = std::io::stdout().lock();
    if jsonl {
        table.write_json_lines(stdout)
    } else {
        serde_json::to_writer_pretty(stdout, table).context("write table to stdout")?;
        println!();
        Ok(())
    }
}

fn emit_ids(video_ids: &[String], jsonl: bool) -> eyre::Result<()> {
    if jsonl {
        for video_id in video_ids {
            println!("{}", serde_json::to_string(video_id).context("encode video id")?);
        }
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(video_ids).context("encode video ids")?
        );
    }
    Ok(())
}
