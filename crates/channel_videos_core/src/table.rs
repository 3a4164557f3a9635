use std::collections::HashSet;

use crate::models::VideoRow;

/// Normalizes the concatenated per-playlist batches into the final
/// result table: stable sort by playlist name ascending (retrieval order
/// within a playlist is preserved), then drop exact-duplicate rows
/// keeping the first occurrence.
pub fn finalize_rows(mut rows: Vec<VideoRow>) -> Vec<VideoRow> {
    rows.sort_by(|a, b| a.playlist_name.cmp(&b.playlist_name));

    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.clone()));
    rows
}
