use thiserror::Error;

/// Errors produced by the calculation engine, branchable by kind.
///
/// The CLI layer wraps these in `anyhow` for display; library callers can
/// match on the variant instead of inspecting message text.
#[derive(Debug, Error)]
pub enum Error {
    /// User input the engine cannot work with: an unrecognizable playlist
    /// reference, an empty playlist, an out-of-range selection, or a
    /// selection with no watchable duration at all.
    #[error("{0}")]
    Validation(String),

    /// The YouTube Data API answered with a non-success status.
    #[error("YouTube API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure, including response body decoding.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A duration token that does not follow the PT[nH][nM][nS] shape.
    #[error("malformed duration {token:?}: {reason}")]
    Format { token: String, reason: String },

    /// Invalid calculation parameter, e.g. a playback speed of zero.
    #[error("{0}")]
    Domain(String),
}

impl Error {
    pub(crate) fn format(token: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
