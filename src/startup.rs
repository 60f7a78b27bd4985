/// # The Main Entry Point of the Export Run
///
/// This function drives the whole pipeline, from configuration loading to
/// the export file on disk.
///
/// # Steps:
/// 1. Loads (or interactively creates) the configuration
/// 2. Fetches the user's top albums from Last.fm
/// 3. Prints one line per album
/// 4. Exports the data in the configured format
///
use crate::api_client::{fetch_top_albums, AlbumsApi};
use crate::configuration::{load_configuration, Prompt};
use crate::export;
use std::path::Path;

pub async fn run(
    config_file: &Path,
    prompt: &mut dyn Prompt,
    api: &dyn AlbumsApi,
) -> anyhow::Result<()> {
    let config = load_configuration(config_file, prompt)?;

    let albums = fetch_top_albums(api, &config.lastfm_api_key, &config.lastfm_username).await?;

    if albums.is_empty() {
        println!("\x1b[33mNo albums found.\x1b[0m");
        return Ok(());
    }

    println!("\x1b[1m\x1b[34mFound {} top albums:\x1b[0m", albums.len());
    for album in &albums {
        println!(
            "{} by {} (Plays: {})",
            export::album_name(album),
            export::artist_name(album),
            export::playcount(album)
        );
    }

    export::export_albums(&albums, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::MockAlbumsApi;
    use crate::configuration::MockPrompt;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, format: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        let exports = dir.path().join("exports");
        fs::write(
            &path,
            format!(
                r#"{{
                    "lastfm_api_key": "mock_api_key",
                    "lastfm_username": "mock_username",
                    "export_format": "{format}",
                    "export_location": "{}"
                }}"#,
                exports.display()
            ),
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_exports_fetched_albums() {
        let dir = TempDir::new().unwrap();
        let config_file = write_config(&dir, "CSV");

        let mut api = MockAlbumsApi::new();
        api.expect_get().returning(|_| {
            Ok((
                200,
                r#"{"topalbums":{"album":[
                    {"name":"Album1","artist":{"name":"Artist1"},"playcount":"100"},
                    {"name":"Album2","artist":{"name":"Artist2"},"playcount":"200"}
                ]}}"#
                    .to_string(),
            ))
        });
        let mut prompt = MockPrompt::new();

        run(&config_file, &mut prompt, &api).await.unwrap();

        let content = fs::read_to_string(dir.path().join("exports/top_albums.csv")).unwrap();
        assert_eq!(
            content,
            "Album Name,Artist,Playcount\r\n\
             Album1,Artist1,100\r\n\
             Album2,Artist2,200\r\n"
        );
    }

    #[tokio::test]
    async fn test_run_without_albums_writes_no_export() {
        let dir = TempDir::new().unwrap();
        let config_file = write_config(&dir, "CSV");

        let mut api = MockAlbumsApi::new();
        api.expect_get()
            .returning(|_| Ok((500, "server error".to_string())));
        let mut prompt = MockPrompt::new();

        run(&config_file, &mut prompt, &api).await.unwrap();

        assert!(!dir.path().join("exports").exists());
    }
}
