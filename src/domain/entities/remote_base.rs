//! Remote photo base URL.

use std::fmt;

/// Base URL of the remote photo tier.
///
/// An empty value disables the remote tier entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteBase(Option<String>);

impl RemoteBase {
    /// Creates a base from a configuration string.
    ///
    /// Surrounding whitespace and one trailing slash are removed; an empty
    /// result disables the tier.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    /// Remote tier switched off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self(None)
    }

    /// Builds from an optional value, treating `None` as disabled.
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        value.map_or_else(Self::disabled, Self::new)
    }

    /// Returns true if remote candidates should be produced.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the normalized base URL, if configured.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Joins a file name onto the base.
    #[must_use]
    pub fn join(&self, file_name: &str) -> Option<String> {
        self.0.as_ref().map(|base| format!("{base}/{file_name}"))
    }
}

impl fmt::Display for RemoteBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(base) => f.write_str(base),
            None => f.write_str("<disabled>"),
        }
    }
}
