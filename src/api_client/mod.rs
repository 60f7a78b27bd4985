mod fetch;
mod fetch_error;

pub use fetch::*;
pub use fetch_error::FetchError;
