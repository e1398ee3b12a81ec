//! Candidate load failure types.

use thiserror::Error;

/// Reasons a candidate failed to load.
///
/// Every variant consumes exactly one fallback step; none is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("server answered {status} for {location}")]
    HttpStatus { location: String, status: u16 },

    #[error("network error while fetching {location}: {message}")]
    Network { location: String, message: String },

    #[error("could not decode {location}: {message}")]
    Decode { location: String, message: String },

    #[error("{location} exceeds the {limit} byte limit")]
    TooLarge { location: String, limit: u64 },

    #[error("could not read {location}: {message}")]
    Io { location: String, message: String },
}

impl ProbeError {
    /// Creates network error.
    #[must_use]
    pub fn network(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates I/O error.
    #[must_use]
    pub fn io(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Returns the location that failed.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::HttpStatus { location, .. }
            | Self::Network { location, .. }
            | Self::Decode { location, .. }
            | Self::TooLarge { location, .. }
            | Self::Io { location, .. } => location,
        }
    }
}
