use thiserror::Error;

/// Failure of an outbound augmentation call.
///
/// The responder never surfaces these to the user; they are logged and
/// replaced by a fixed apology.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Upstream {
        status: String,
        message: Option<String>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("assistant error: {0}")]
    Assistant(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
