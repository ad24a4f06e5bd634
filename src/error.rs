/// Error types for the video form controller

use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum ClientError {
    /// browser window is not available
    NoWindow,
    /// invalid endpoint url: {0}
    Url(#[from] url::ParseError),
    /// request failed: {0}
    Request(#[from] reqwest::Error),
    /// {0}
    Backend(String),
    /// unexpected response body: {0}
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for a toast, without the technical prefix for backend errors
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Backend(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
