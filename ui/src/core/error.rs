//! Failure taxonomy for acquiring a snapshot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot request failed: {0}")]
    Transport(String),
    #[error("snapshot request returned HTTP {0}")]
    Status(u16),
    #[error("couldn't read snapshot file: {0}")]
    Read(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("snapshot document is not a JSON object")]
    NotAnObject,
}

/// Coarse classification used for logging and recovery decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
}

impl SnapshotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Status(_) | Self::Read(_) => ErrorKind::Fetch,
            Self::Parse(_) | Self::NotAnObject => ErrorKind::Parse,
        }
    }
}

impl From<reqwest::Error> for SnapshotError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Transport(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(SnapshotError::Status(503).kind(), ErrorKind::Fetch);
        assert_eq!(
            SnapshotError::Transport("offline".into()).kind(),
            ErrorKind::Fetch
        );
        assert_eq!(SnapshotError::NotAnObject.kind(), ErrorKind::Parse);
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(SnapshotError::from(parse).kind(), ErrorKind::Parse);
    }

    #[test]
    fn status_message_mentions_code() {
        assert_eq!(
            SnapshotError::Status(404).to_string(),
            "snapshot request returned HTTP 404"
        );
    }
}
