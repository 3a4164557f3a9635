use std::fs::File;
use std::path::Path;

use crate::errors::ChannelError;
use crate::models::VideoRow;

pub const FIELDNAMES: [&str; 2] = ["Playlist Name", "Video Title"];

/// Writes the result table as UTF-8 CSV: header row, one record per
/// video, no index column. Overwrites any existing file at `path`.
pub fn write_rows(path: &Path, rows: &[VideoRow]) -> Result<usize, ChannelError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(FIELDNAMES)?;
    for row in rows {
        writer.write_record([row.playlist_name.as_str(), row.video_title.as_str()])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Re-parses an exported file back into rows. A missing file reads as an
/// empty table.
pub fn read_rows(path: &Path) -> Result<Vec<VideoRow>, ChannelError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let name_index = headers
        .iter()
        .position(|header| header == FIELDNAMES[0])
        .ok_or_else(|| ChannelError::Other(format!("missing column: {}", FIELDNAMES[0])))?;
    let title_index = headers
        .iter()
        .position(|header| header == FIELDNAMES[1])
        .ok_or_else(|| ChannelError::Other(format!("missing column: {}", FIELDNAMES[1])))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(VideoRow {
            playlist_name: record.get(name_index).unwrap_or_default().to_string(),
            video_title: record.get(title_index).unwrap_or_default().to_string(),
        });
    }
    Ok(rows)
}
