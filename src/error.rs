use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("user service error (status {status}, code {code:?})")]
    Api { status: u16, code: Option<String> },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProfileError {
    /// Structured (status, code) pair of a user service error, when the
    /// response carried one. The sync handler matches on this to pick
    /// the alert to show.
    pub fn status_and_code(&self) -> Option<(u16, &str)> {
        match self {
            ProfileError::Api {
                status,
                code: Some(code),
            } => Some((*status, code.as_str())),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
