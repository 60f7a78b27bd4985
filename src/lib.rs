pub mod api_client;
pub mod configuration;
pub mod export;
pub mod startup;

pub use api_client::{fetch_top_albums, AlbumsApi, FetchError, LastfmApi};
pub use configuration::*;
pub use export::export_albums;
