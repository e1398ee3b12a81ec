//! Text and JSON reports of resolved persona photos.

use std::fmt::Write as _;

use serde::Serialize;

use crate::application::dto::{PhotoOutcome, ResolvedPhoto};
use crate::domain::entities::CandidateList;

/// Label shown where no photo exists for a persona.
pub const PHOTO_PLACEHOLDER: &str = "Foto yakında / Фото скоро";

/// Renders a candidate listing.
#[must_use]
pub fn render_candidates(list: &CandidateList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", list.code());
    if list.is_empty() {
        let _ = writeln!(out, "  {PHOTO_PLACEHOLDER}");
        return out;
    }
    for (index, candidate) in list.iter().enumerate() {
        let _ = writeln!(out, "  {index}. [{}] {candidate}", candidate.tier());
    }
    out
}

/// Renders the result of probing a persona's candidates.
#[must_use]
pub fn render_resolved(resolved: &ResolvedPhoto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", resolved.code);

    for attempt in &resolved.attempts {
        match &attempt.error {
            None => {
                let _ = writeln!(out, "  {}. ok      {}", attempt.index, attempt.location);
            }
            Some(error) => {
                let _ = writeln!(out, "  {}. failed  {error}", attempt.index);
            }
        }
    }

    match &resolved.outcome {
        PhotoOutcome::Loaded { location, .. } => {
            let _ = writeln!(out, "  -> {location}");
        }
        PhotoOutcome::Exhausted { last } => {
            let _ = writeln!(out, "  -> broken image ({last})");
        }
        PhotoOutcome::Empty => {
            let _ = writeln!(out, "  -> {PHOTO_PLACEHOLDER}");
        }
    }
    out
}

/// Serializes any report value as pretty JSON.
///
/// # Errors
/// Returns error if the value cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ProbeAttempt;
    use crate::domain::entities::{CandidateSource, PersonaCode};

    fn elif_list() -> CandidateList {
        CandidateList::new(
            PersonaCode::new("elif"),
            [
                CandidateSource::remote("https://cdn.x.com/elif1.png"),
                CandidateSource::remote("https://cdn.x.com/elif2.png"),
            ],
        )
    }

    #[test]
    fn test_render_candidates() {
        let out = render_candidates(&elif_list());

        assert_eq!(
            out,
            "elif\n  0. [remote] https://cdn.x.com/elif1.png\n  1. [remote] https://cdn.x.com/elif2.png\n"
        );
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let out = render_candidates(&CandidateList::empty(PersonaCode::new("unknown")));

        assert!(out.contains(PHOTO_PLACEHOLDER));
    }

    #[test]
    fn test_render_resolved_fallback() {
        let resolved = ResolvedPhoto {
            code: PersonaCode::new("elif"),
            candidates: elif_list(),
            outcome: PhotoOutcome::Loaded {
                index: 1,
                location: "https://cdn.x.com/elif2.png".to_string(),
            },
            attempts: vec![
                ProbeAttempt {
                    index: 0,
                    location: "https://cdn.x.com/elif1.png".to_string(),
                    error: Some("server answered 404 for https://cdn.x.com/elif1.png".to_string()),
                },
                ProbeAttempt {
                    index: 1,
                    location: "https://cdn.x.com/elif2.png".to_string(),
                    error: None,
                },
            ],
        };

        let out = render_resolved(&resolved);

        assert!(out.contains("0. failed  server answered 404"));
        assert!(out.contains("1. ok      https://cdn.x.com/elif2.png"));
        assert!(out.ends_with("  -> https://cdn.x.com/elif2.png\n"));
    }

    #[test]
    fn test_render_json_outcome() {
        let resolved = ResolvedPhoto {
            code: PersonaCode::new("Unknown"),
            candidates: CandidateList::empty(PersonaCode::new("Unknown")),
            outcome: PhotoOutcome::Empty,
            attempts: Vec::new(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&resolved).unwrap()).unwrap();

        assert_eq!(json["code"], "unknown");
        assert_eq!(json["outcome"]["status"], "empty");
        assert_eq!(json["attempts"].as_array().unwrap().len(), 0);
    }
}
