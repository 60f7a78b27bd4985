//! This module writes fetched album data to local export files.
//!
//! CSV output projects each album through the default-substitution rules
//! below; JSON output keeps the raw records exactly as the API returned
//! them, extra nested fields included.

use crate::configuration::Settings;
use anyhow::Context;
use csv::{Terminator, WriterBuilder};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Album name, or "Unknown Album" when the field is absent.
pub fn album_name(album: &Value) -> &str {
    album["name"].as_str().unwrap_or("Unknown Album")
}

/// Nested artist name, or "Unknown Artist" when absent.
pub fn artist_name(album: &Value) -> &str {
    album["artist"]["name"].as_str().unwrap_or("Unknown Artist")
}

/// Playcount as a string, or "0" when absent.
///
/// The API reports playcounts as strings, but a bare number is kept
/// verbatim too.
pub fn playcount(album: &Value) -> String {
    match &album["playcount"] {
        Value::String(count) => count.clone(),
        Value::Number(count) => count.to_string(),
        _ => "0".to_string(),
    }
}

/// Writes the albums to `top_albums.csv` or `top_albums.json` under the
/// configured export location, creating the directory if needed.
///
/// An unrecognized format is reported on the console and writes nothing;
/// it does not abort the run.
pub fn export_albums(albums: &[Value], config: &Settings) -> anyhow::Result<()> {
    let export_location = Path::new(&config.export_location);
    fs::create_dir_all(export_location)
        .with_context(|| format!("Failed to create {}", export_location.display()))?;

    match config.export_format.as_str() {
        "CSV" => write_csv(albums, export_location),
        "JSON" => write_json(albums, export_location),
        _ => {
            println!("Invalid export format specified in configuration.");
            Ok(())
        }
    }
}

fn write_csv(albums: &[Value], export_location: &Path) -> anyhow::Result<()> {
    let filepath = export_location.join("top_albums.csv");

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(&filepath)?;

    writer.write_record(["Album Name", "Artist", "Playcount"])?;
    for album in albums {
        let plays = playcount(album);
        writer.write_record([album_name(album), artist_name(album), plays.as_str()])?;
    }
    writer.flush()?;

    println!(
        "\x1b[32mData exported successfully to {}\x1b[0m",
        filepath.display()
    );
    Ok(())
}

fn write_json(albums: &[Value], export_location: &Path) -> anyhow::Result<()> {
    let filepath = export_location.join("top_albums.json");

    let serialized = serde_json::to_string_pretty(albums)?;
    fs::write(&filepath, serialized)
        .with_context(|| format!("Failed to write {}", filepath.display()))?;

    println!(
        "\x1b[32mData exported successfully to {}\x1b[0m",
        filepath.display()
    );
    Ok(())
}
