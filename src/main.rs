use clap::Command;
use lastex::api_client::LastfmApi;
use lastex::configuration::{setup_configuration, StdinPrompt, CONFIG_FILE};
use lastex::startup::run;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Command::new("lastex")
        .about("🎧 Export your Last.fm top albums to CSV or JSON 🎧")
        .subcommand(
            Command::new("config").about("🛠️ Create or update the lastex configuration file"),
        )
        .get_matches();

    let mut prompt = StdinPrompt;

    match args.subcommand() {
        Some(("config", _)) => {
            println!("\x1b[1m\x1b[34mConfiguring lastex...\x1b[0m");
            setup_configuration(Path::new(CONFIG_FILE), &mut prompt)?;
            Ok(())
        }
        _ => {
            let api = LastfmApi::new();
            run(Path::new(CONFIG_FILE), &mut prompt, &api).await
        }
    }
}
