//! Error taxonomy for observation validation and submission.
//!
//! Every validation failure is terminal: construction of the enclosing
//! value aborts immediately and the error is returned to the caller.
//! Callers branch on the variant, not on a hierarchy.

use std::fmt;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KlabNifiError>;

/// Which end of a time interval a timestamp error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEndpoint {
    Start,
    End,
}

impl fmt::Display for TimeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeEndpoint::Start => write!(f, "start"),
            TimeEndpoint::End => write!(f, "end"),
        }
    }
}

/// All failure modes of payload construction and submission.
#[derive(Error, Debug)]
pub enum KlabNifiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("{which} timestamp is invalid: {reason}")]
    InvalidTimestamp { which: TimeEndpoint, reason: String },

    #[error("unsupported time unit '{0}'")]
    InvalidTimeUnit(String),

    #[error("incomplete geometry: {0}")]
    MissingDimension(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for KlabNifiError {
    fn from(err: reqwest::Error) -> Self {
        KlabNifiError::Submission(err.to_string())
    }
}
