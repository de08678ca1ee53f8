//! Error taxonomy for the tracker core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A non-empty score entry that is not an integer in `[0, 999]`.
    #[error("invalid score input: {0:?}")]
    InvalidScoreInput(String),

    /// Both score entries were empty on submit.
    #[error("no score provided")]
    NoScoreProvided,

    /// A hand token that could not be decoded. Only produced inside
    /// `decode_hand`; match-blob decoding drops such segments silently.
    #[error("malformed hand token: {0:?}")]
    MalformedHandToken(String),

    /// The underlying match store failed; in-memory state is untouched and
    /// the caller may retry.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}
