use thiserror::Error;

/// Failures surfaced by [`RemoteClient`](crate::client::RemoteClient) operations.
///
/// Every request-level variant carries the action name that triggered it, so
/// callers can report which remote operation failed without threading extra
/// context themselves.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("action '{action}' failed with HTTP status {status}")]
    Http { action: String, status: u16 },

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("action '{action}' could not reach the endpoint")]
    Transport {
        action: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered, but the body is not valid JSON.
    #[error("action '{action}' returned a non-JSON body")]
    Parse {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client itself could not be constructed.
    #[error("client configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// HTTP status code, when the failure was a status-level rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The action that triggered this failure, if it arose from a request.
    pub fn action(&self) -> Option<&str> {
        match self {
            ApiError::Http { action, .. }
            | ApiError::Transport { action, .. }
            | ApiError::Parse { action, .. } => Some(action),
            ApiError::Configuration(_) => None,
        }
    }
}
