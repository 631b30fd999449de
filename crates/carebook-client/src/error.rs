use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connect, timeout, DNS).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server's `{"error": ...}` body when present, otherwise the canonical
    /// reason for the status.
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response arrived but its body was not the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// Transport-level failures are the only ones worth retrying; a domain
    /// error will fail the same way twice.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
