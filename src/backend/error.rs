use std::fmt;
use thiserror::Error;

/// What went wrong while talking to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The request could not be sent or the connection failed.
    Network,
    /// The backend answered with a non-success status code.
    Status(u16),
    /// The body was not JSON or had no `response` string.
    MalformedResponse,
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network error"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::MalformedResponse => f.write_str("malformed response"),
        }
    }
}

/// The backend could not produce a reply.
///
/// This is the only error kind a backend reports. The cause is kept for
/// diagnostics; callers treat every cause the same way.
#[derive(Debug, Error)]
#[error("backend unavailable ({cause}): {detail}")]
pub struct BackendUnavailable {
    cause: FailureCause,
    detail: String,
}

impl BackendUnavailable {
    pub fn new(cause: FailureCause, detail: impl Into<String>) -> Self {
        Self {
            cause,
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(FailureCause::Network, detail)
    }

    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::new(FailureCause::Status(code), body)
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(FailureCause::MalformedResponse, detail)
    }

    pub const fn cause(&self) -> FailureCause {
        self.cause
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
