//! Persona code value object.

use std::fmt;

use serde::Serialize;

/// Case-insensitive identifier naming a catalog persona.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PersonaCode {
    raw: String,
    normalized: String,
}

impl PersonaCode {
    /// Creates a code, lower-casing it for lookups.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        let normalized = raw.to_lowercase();
        Self { raw, normalized }
    }

    /// Returns the lower-cased code used to build candidate names.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the code exactly as supplied by the caller.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Base name of the photo in the given slot, e.g. `elif2`.
    #[must_use]
    pub fn slot_name(&self, slot: u8) -> String {
        format!("{}{slot}", self.normalized)
    }
}

impl fmt::Debug for PersonaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonaCode({:?})", self.raw)
    }
}

impl fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl From<&str> for PersonaCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PersonaCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PersonaCode> for String {
    fn from(code: PersonaCode) -> Self {
        code.normalized
    }
}
