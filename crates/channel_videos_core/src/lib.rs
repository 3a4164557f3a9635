pub mod channel;
pub mod client;
pub mod csv_utils;
pub mod errors;
pub mod export;
pub mod models;
pub mod table;

pub use channel::parse_channel_id;
pub use client::{ClientOptions, YtApiClient, DEFAULT_BASE_URL};
pub use csv_utils::{read_rows, write_rows, FIELDNAMES};
pub use errors::{ChannelError, ExportError};
pub use export::{
    list_playlists_blocking,
    retrieve_channel_videos,
    retrieve_channel_videos_blocking,
    ProgressCallback,
    RetrieveProgress,
    RetrieveResult,
};
pub use models::{Playlist, VideoRow};
pub use table::finalize_rows;
