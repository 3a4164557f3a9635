use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("invalid API key: {0}")]
    InvalidKey(String),
    #[error("invalid channel identifier: {0}")]
    InvalidChannel(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error (code={code}, message={message})")]
    Api { code: u16, message: String },
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("playlist {0} not found in the channel's playlist listing")]
    PlaylistNotFound(String),
    #[error("file access failed: {0}")]
    Io(#[from] io::Error),
    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("unexpected error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("channel export failed: {0}")]
    Core(#[from] ChannelError),
    #[error("export flow failed: {0}")]
    Context(String),
}

impl ExportError {
    pub fn context<T: Into<String>>(self, message: T) -> Self {
        let message = message.into();
        match self {
            ExportError::Core(err) => ExportError::Context(format!("{message}: {err}")),
            ExportError::Context(existing) => {
                ExportError::Context(format!("{message}: {existing}"))
            }
        }
    }
}
