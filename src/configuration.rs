use anyhow::Context;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Fixed relative path of the configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// Directory used when the operator leaves the export location blank.
pub const DEFAULT_EXPORT_LOCATION: &str = "./exports";

/// The persisted configuration record.
///
/// The fields default to empty strings so that an older or hand-edited
/// file missing some of them still loads; only the API credentials are
/// checked on the load path, the export fields are validated at export
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub lastfm_api_key: String,
    #[serde(default)]
    pub lastfm_username: String,
    #[serde(default)]
    pub export_format: String,
    #[serde(default)]
    pub export_location: String,
}

impl Settings {
    /// Only the API key and username are required up front.
    fn has_credentials(&self) -> bool {
        !self.lastfm_api_key.is_empty() && !self.lastfm_username.is_empty()
    }
}

/// Source of operator answers during interactive setup.
///
/// Injected so tests can substitute canned answers without touching
/// real console I/O.
#[cfg_attr(test, automock)]
pub trait Prompt {
    fn ask(&mut self, message: &str) -> io::Result<String>;
}

/// Prints the question and reads one line from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Parses the configuration file as JSON into [`Settings`].
pub fn get_configuration(cfg_file: &str) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::new(cfg_file, config::FileFormat::Json))
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// Loads the configuration, falling back to interactive setup when the
/// file is missing or lacks the API credentials.
///
/// A malformed file is a fatal error; nothing in this layer tries to
/// recover from unparseable content.
pub fn load_configuration(
    config_file: &Path,
    prompt: &mut dyn Prompt,
) -> anyhow::Result<Settings> {
    if !config_file.exists() {
        return setup_configuration(config_file, prompt);
    }

    let cfg_path = config_file
        .to_str()
        .context("Configuration path is not valid UTF-8")?;
    let config = get_configuration(cfg_path).with_context(|| {
        format!(
            "Unable to parse configuration file {}",
            config_file.display()
        )
    })?;

    if !config.has_credentials() {
        println!("Configuration incomplete. Starting setup.");
        return setup_configuration(config_file, prompt);
    }

    Ok(config)
}

/// Collects the four configuration values from the operator and persists
/// them as pretty-printed JSON.
pub fn setup_configuration(
    config_file: &Path,
    prompt: &mut dyn Prompt,
) -> anyhow::Result<Settings> {
    let config = Settings {
        lastfm_api_key: prompt.ask("Enter your Last.fm API key: ")?,
        lastfm_username: prompt.ask("Enter your Last.fm username: ")?,
        export_format: prompt
            .ask("Choose export format (CSV/JSON): ")?
            .to_uppercase(),
        export_location: match prompt.ask("Enter export directory (default is ./exports): ")? {
            location if location.is_empty() => DEFAULT_EXPORT_LOCATION.to_string(),
            location => location,
        },
    };

    let serialized = serde_json::to_string_pretty(&config)?;
    fs::write(config_file, serialized)
        .with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!("\x1b[32mConfiguration saved. You're all set!\x1b[0m");
    Ok(config)
}
