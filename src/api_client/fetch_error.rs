use reqwest::Error as ReqwestError;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    JsonParseError(serde_json::Error),
    RequestError(ReqwestError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::JsonParseError(e) => write!(f, "JSON parse error: {}", e),
            FetchError::RequestError(e) => write!(f, "Request error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::JsonParseError(error)
    }
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        FetchError::RequestError(error)
    }
}
