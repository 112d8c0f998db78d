/// Core error type.
///
/// Adapter crates map their specific errors into this type so the bot core
/// can handle failures consistently (configuration vs transport vs local
/// i/o).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("send error: {0}")]
    Send(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single remote query, as reported by the peer or by the layer
/// talking to it.
///
/// Mirrors a protocol error stanza: `condition` is the machine-readable
/// condition ("item-not-found", "remote-server-not-found", ...), `text` the
/// free-form part. Both end up in the user-visible report line; a
/// `RemoteQueryError` is never fatal to a handling cycle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{condition}: {text}")]
pub struct RemoteQueryError {
    pub condition: String,
    pub text: String,
}

impl RemoteQueryError {
    pub fn new(condition: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            text: text.into(),
        }
    }
}
