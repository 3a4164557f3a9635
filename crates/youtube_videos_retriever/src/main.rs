mod prompts;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use channel_videos_core::{
    list_playlists_blocking, parse_channel_id, retrieve_channel_videos_blocking, write_rows,
    ClientOptions, ProgressCallback, RetrieveResult, YtApiClient,
};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use prompts::{prompt_input, prompt_yes_no};

const REGISTRATION_URL: &str = "https://developers.google.com/youtube/registering_an_application";
const OUTPUT_FILE: &str = "my_youtube_videos.csv";
const PREVIEW_LIMIT: usize = 10;

fn main() -> Result<()> {
    println!("YouTube Videos Retriever");
    println!("Exports the video titles of every playlist in a channel.\n");

    confirm_api_key_available()?;
    let client = prompt_api_key()?;
    let channel_id = prompt_channel_id(&client)?;

    println!("\nDownloading videos...");
    let result = retrieve_with_progress(&client, &channel_id)?;

    print_preview(&result);
    println!("\nDownload complete!");

    if prompt_yes_no("Would you like to download the result as a .csv file? [yes/no]")? {
        let path = Path::new(OUTPUT_FILE);
        write_rows(path, &result.rows)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("File downloaded! ({})", style(path.display()).green());
    }

    Ok(())
}

fn confirm_api_key_available() -> Result<()> {
    loop {
        let input = prompt_input("Do you have a YouTube API key? [yes/no]", None)?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(()),
            "n" | "no" => {
                println!(
                    "\nYou will need to get an API key. This is a very quick process.\n\
                     Please follow the instructions here:\n{REGISTRATION_URL}\n"
                );
            }
            _ => {}
        }
    }
}

fn prompt_api_key() -> Result<YtApiClient> {
    loop {
        let api_key = prompt_input("Please enter your API key", None)?;
        let options = ClientOptions {
            api_key,
            ..ClientOptions::default()
        };
        match YtApiClient::new(options) {
            Ok(client) => return Ok(client),
            Err(err) => println!("Key invalid. ({err})"),
        }
    }
}

/// Prompts until a channel identifier passes its first playlist listing.
/// Failures after this point are fatal to the run.
fn prompt_channel_id(client: &YtApiClient) -> Result<String> {
    loop {
        let input = prompt_input(
            "Please enter your Channel ID. This can be found by signing in to YouTube and \
             looking at the URL of the 'Your channel' page",
            None,
        )?;
        let channel_id = match parse_channel_id(&input) {
            Ok(id) => id,
            Err(err) => {
                println!("Channel ID invalid. ({err})");
                continue;
            }
        };
        match list_playlists_blocking(client, &channel_id) {
            Ok(_) => return Ok(channel_id),
            Err(err) => println!("Channel ID invalid. ({err})"),
        }
    }
}

fn retrieve_with_progress(client: &YtApiClient, channel_id: &str) -> Result<RetrieveResult> {
    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30}] {pos}/{len} playlists")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let bar = progress_bar.clone();
    let callback: ProgressCallback = Arc::new(move |progress| {
        bar.set_length(progress.total);
        bar.set_position(progress.current);
    });

    let result = retrieve_channel_videos_blocking(client, channel_id, Some(callback))
        .map_err(|err| anyhow::Error::from(err.context("video retrieval failed")))?;
    progress_bar.finish_and_clear();
    Ok(result)
}

fn print_preview(result: &RetrieveResult) {
    println!(
        "\nRetrieved {} videos across {} playlists.",
        style(result.video_count).green(),
        style(result.playlist_count).green()
    );
    for row in result.rows.iter().take(PREVIEW_LIMIT) {
        println!("  {} | {}", style(&row.playlist_name).cyan(), row.video_title);
    }
    if result.rows.len() > PREVIEW_LIMIT {
        println!("  ... and {} more rows", result.rows.len() - PREVIEW_LIMIT);
    }
}
