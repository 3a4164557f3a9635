use std::sync::Arc;

use tokio::runtime::Builder;

use crate::client::YtApiClient;
use crate::errors::{ChannelError, ExportError};
use crate::models::{Playlist, VideoRow};
use crate::table::finalize_rows;

#[derive(Debug, Clone)]
pub struct RetrieveProgress {
    /// Playlists fully processed so far.
    pub current: u64,
    /// Total playlists in the channel.
    pub total: u64,
}

pub type ProgressCallback = Arc<dyn Fn(RetrieveProgress) + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct RetrieveResult {
    pub rows: Vec<VideoRow>,
    pub playlist_count: usize,
    pub video_count: usize,
}

/// Retrieves every video of every playlist in `channel_id` and returns
/// the normalized result table. Playlists are fetched strictly one after
/// another; any transport or API failure abandons the whole run.
pub async fn retrieve_channel_videos(
    client: &YtApiClient,
    channel_id: &str,
    progress_callback: Option<ProgressCallback>,
) -> Result<RetrieveResult, ExportError> {
    let playlists = client
        .list_playlists(channel_id)
        .await
        .map_err(ExportError::from)?;
    let playlist_count = playlists.len();
    let total = playlist_count as u64;

    if let Some(callback) = progress_callback.as_ref() {
        callback(RetrieveProgress { current: 0, total });
    }

    let mut rows = Vec::new();
    for (index, playlist) in playlists.iter().enumerate() {
        let batch = client
            .list_videos(channel_id, &playlist.id)
            .await
            .map_err(ExportError::from)?;
        rows.extend(batch);
        if let Some(callback) = progress_callback.as_ref() {
            callback(RetrieveProgress {
                current: (index + 1) as u64,
                total,
            });
        }
    }

    let rows = finalize_rows(rows);
    let video_count = rows.len();
    Ok(RetrieveResult {
        rows,
        playlist_count,
        video_count,
    })
}

/// Blocking wrapper for synchronous callers such as the interactive
/// helper binary.
pub fn retrieve_channel_videos_blocking(
    client: &YtApiClient,
    channel_id: &str,
    progress_callback: Option<ProgressCallback>,
) -> Result<RetrieveResult, ExportError> {
    let rt = build_runtime()?;
    rt.block_on(retrieve_channel_videos(client, channel_id, progress_callback))
}

/// Blocking playlist listing, used by the interactive flow to validate a
/// channel identifier before committing to the full retrieval.
pub fn list_playlists_blocking(
    client: &YtApiClient,
    channel_id: &str,
) -> Result<Vec<Playlist>, ChannelError> {
    let rt = build_runtime()?;
    rt.block_on(client.list_playlists(channel_id))
}

fn build_runtime() -> Result<tokio::runtime::Runtime, ChannelError> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| ChannelError::Other(format!("tokio runtime setup failed: {err}")))
}
