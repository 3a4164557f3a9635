use serde::{Deserialize, Serialize};

/// A playlist owned by a channel, as surfaced to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub id: String,
}

/// One row of the flattened result table. The playlist name is
/// denormalized and repeated per video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VideoRow {
    pub playlist_name: String,
    pub video_title: String,
}

/// One page of a paginated list response. Absence of `nextPageToken`
/// means this is the final page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemResource {
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
}

/// Google API error envelope carried in non-2xx response bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl PlaylistResource {
    pub fn into_playlist(self) -> Playlist {
        Playlist {
            name: self.snippet.title,
            id: self.id,
        }
    }
}
