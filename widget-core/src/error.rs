use thiserror::Error;

/// Shown when the provider rejects the API key.
pub const AUTH_FAILURE_MESSAGE: &str =
    "API Key Invalid or Not Active (Status 401). Please check your key or wait a few hours.";

/// Anything that can go wrong during a single weather lookup.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Weather API failed. Status: {0}")]
    Status(u16),

    /// The URL is stripped on conversion; it carries the API key.
    #[error("Request to weather provider failed: {0}")]
    Network(reqwest::Error),

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Weather provider response is missing {0}")]
    Incomplete(&'static str),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

/// The two failure kinds a user can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    AuthFailure,
    UnexpectedFailure,
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self.status() {
            Some(401) => FailureKind::AuthFailure,
            _ => FailureKind::UnexpectedFailure,
        }
    }

    /// Text for the error region.
    pub fn user_message(&self) -> String {
        match self.kind() {
            FailureKind::AuthFailure => AUTH_FAILURE_MESSAGE.to_string(),
            FailureKind::UnexpectedFailure => {
                format!("An unexpected error occurred: {self}. Check your network.")
            }
        }
    }
}
