use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::ChannelError;
use crate::models::{ErrorEnvelope, Page, Playlist, PlaylistItemResource, PlaylistResource, VideoRow};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";
pub const PLAYLISTS_ENDPOINT: &str = "/youtube/v3/playlists";
pub const PLAYLIST_ITEMS_ENDPOINT: &str = "/youtube/v3/playlistItems";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub timeout: Duration,
    pub page_size: u32,
    pub base_url: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout: Duration::from_secs(10),
            page_size: 50,
            base_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct YtApiClient {
    client: Client,
    options: ClientOptions,
}

impl YtApiClient {
    /// Builds a client handle. A syntactically unusable key (empty or
    /// containing non-printable characters) is rejected here, before any
    /// network traffic.
    pub fn new(options: ClientOptions) -> Result<Self, ChannelError> {
        let key = options.api_key.trim();
        if key.is_empty() {
            return Err(ChannelError::InvalidKey("key is empty".to_string()));
        }
        if !key.chars().all(|ch| ch.is_ascii_graphic()) {
            return Err(ChannelError::InvalidKey(
                "key contains non-printable characters".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(ChannelError::Request)?;

        Ok(Self { client, options })
    }

    /// Returns the full ordered set of playlists owned by `channel_id`,
    /// following `nextPageToken` pagination to the last page.
    pub async fn list_playlists(&self, channel_id: &str) -> Result<Vec<Playlist>, ChannelError> {
        let pages: Vec<Page<PlaylistResource>> = self
            .collect_pages(
                PLAYLISTS_ENDPOINT,
                &[("part", "snippet".to_string()), ("channelId", channel_id.to_string())],
            )
            .await?;
        Ok(pages
            .into_iter()
            .flat_map(|page| page.items)
            .map(PlaylistResource::into_playlist)
            .collect())
    }

    /// Returns every video title in `playlist_id`, each joined with the
    /// playlist's display name. The name is resolved by re-listing the
    /// channel's playlists and picking the matching entry; if the id is
    /// absent from that listing the call fails with `PlaylistNotFound`
    /// (the playlist does not belong to the channel, or the channel's
    /// playlist set changed between calls).
    pub async fn list_videos(
        &self,
        channel_id: &str,
        playlist_id: &str,
    ) -> Result<Vec<VideoRow>, ChannelError> {
        let pages: Vec<Page<PlaylistItemResource>> = self
            .collect_pages(
                PLAYLIST_ITEMS_ENDPOINT,
                &[("part", "snippet".to_string()), ("playlistId", playlist_id.to_string())],
            )
            .await?;

        let playlists = self.list_playlists(channel_id).await?;
        let playlist_name = playlists
            .into_iter()
            .find(|playlist| playlist.id == playlist_id)
            .map(|playlist| playlist.name)
            .ok_or_else(|| ChannelError::PlaylistNotFound(playlist_id.to_string()))?;

        Ok(pages
            .into_iter()
            .flat_map(|page| page.items)
            .map(|item| VideoRow {
                playlist_name: playlist_name.clone(),
                video_title: item.snippet.title,
            })
            .collect())
    }

    /// Fetches every page of a list endpoint: request the first page,
    /// then keep requesting with `pageToken` while the previous response
    /// carried `nextPageToken`. A response without the token field ends
    /// the sequence.
    async fn collect_pages<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Page<T>>, ChannelError> {
        let mut pages = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query: Vec<(&str, String)> = params.to_vec();
            query.push(("maxResults", self.options.page_size.to_string()));
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }
            let page: Page<T> = self.request(endpoint, &query).await?;
            page_token = page.next_page_token.clone();
            pages.push(page);
            if page_token.is_none() {
                break;
            }
        }
        Ok(pages)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ChannelError> {
        let base = self
            .options
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        let mut req = self
            .client
            .get(format!("{base}{endpoint}"))
            .query(&[("key", self.options.api_key.trim())]);
        for (k, v) in params {
            req = req.query(&[(k, v.as_str())]);
        }
        let response = req.send().await.map_err(ChannelError::Request)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ChannelError::Request)?;
        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                return Err(ChannelError::Api {
                    code: envelope.error.code,
                    message: envelope.error.message,
                });
            }
            return Err(ChannelError::Api {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request rejected")
                    .to_string(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|err| ChannelError::InvalidJson(err.to_string()))
    }
}
