/// This module fetches a user's top albums from the Last.fm web API.
///
/// Album entries are kept as raw JSON values so the exporter can decide
/// later how much of the structure to project.
use crate::api_client::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Fixed endpoint of the Last.fm web API.
pub const LASTFM_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Transport over the Last.fm web API, returning the raw status code and
/// body text. Injected so tests can serve canned responses.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlbumsApi {
    async fn get(&self, url: &str) -> Result<(u16, String), FetchError>;
}

/// The real transport, backed by a reqwest client.
///
/// No timeout is configured; a stalled connection blocks the run.
pub struct LastfmApi {
    client: Client,
}

impl LastfmApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for LastfmApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlbumsApi for LastfmApi {
    async fn get(&self, url: &str) -> Result<(u16, String), FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Fetches the user's top albums (first page, at most 10 entries).
///
/// Transport failures and non-200 statuses are soft: a diagnostic is
/// printed and an empty sequence returned, with no retry and no
/// inspection of the error body. Only an unparseable 200 body is a
/// hard error.
///
/// # Arguments
///
/// * `api` - The transport used to reach the API.
/// * `api_key` - The user's Last.fm API key.
/// * `username` - The Last.fm account to query.
///
pub async fn fetch_top_albums(
    api: &dyn AlbumsApi,
    api_key: &str,
    username: &str,
) -> Result<Vec<Value>, FetchError> {
    let url = format!(
        "{LASTFM_BASE_URL}?method=user.getTopAlbums&user={username}&api_key={api_key}&format=json&limit=10"
    );

    let (status, body) = match api.get(&url).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("\x1b[31mFailed to fetch data from Last.fm: {}\x1b[0m", e);
            return Ok(Vec::new());
        }
    };

    if status != 200 {
        eprintln!(
            "\x1b[31mFailed to fetch data from Last.fm. Check your API key or username.\x1b[0m"
        );
        return Ok(Vec::new());
    }

    let response: Value = serde_json::from_str(&body)?;

    // Missing keys mean an empty result, never an error.
    Ok(response["topalbums"]["album"]
        .as_array()
        .cloned()
        .unwrap_or_default())
}
