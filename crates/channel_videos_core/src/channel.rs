use url::Url;

use crate::errors::ChannelError;

/// Accepts either a bare channel id or a channel URL of the form
/// `https://www.youtube.com/channel/<id>` and returns the id.
pub fn parse_channel_id(input: &str) -> Result<String, ChannelError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChannelError::InvalidChannel(
            "channel identifier is empty".to_string(),
        ));
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            let mut segments = url
                .path_segments()
                .map(|segments| segments.collect::<Vec<_>>())
                .unwrap_or_default();
            segments.retain(|segment| !segment.is_empty());
            if let ["channel", id] = segments.as_slice() {
                return Ok((*id).to_string());
            }
            return Err(ChannelError::InvalidChannel(format!(
                "no /channel/<id> segment in URL: {trimmed}"
            )));
        }
    }

    if trimmed.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
        Ok(trimmed.to_string())
    } else {
        Err(ChannelError::InvalidChannel(format!(
            "identifier contains unexpected characters: {trimmed}"
        )))
    }
}
