use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

/// Everything that can go wrong talking to the chat endpoint, plus the
/// usual startup failures.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never completed (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The request completed but the server answered with a non-success
    /// status code.
    #[error("server returned status {status}")]
    Server { status: u16 },

    /// A success status whose body could not be read as JSON.
    #[error("malformed reply body: {0}")]
    MalformedReply(String),

    #[error("config error: {0}")]
    Config(String),
}

impl ChatError {
    pub fn network(msg: impl Into<String>) -> Self {
        ChatError::Network(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        ChatError::MalformedReply(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}
