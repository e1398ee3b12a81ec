//! Per-persona photo display session.
//!
//! Holds the candidate list and the cursor of the candidate currently being
//! shown. Load failures move the cursor forward until the last candidate,
//! where it stays.

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::entities::{CandidateList, CandidateSource, PersonaCode, RemoteBase};
use crate::domain::ports::AssetIndexPort;

use super::candidate_builder::build_candidates;

/// Next cursor after a load failure.
///
/// Saturates at `list_len - 1`; never wraps.
#[must_use]
pub const fn advance(cursor: usize, list_len: usize) -> usize {
    match cursor.checked_add(1) {
        Some(next) if next < list_len => next,
        _ => cursor,
    }
}

/// What the display layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a> {
    /// No candidate exists; render the placeholder.
    Empty,
    /// Render the candidate at `index`.
    Active {
        /// Cursor position.
        index: usize,
        /// Candidate at the cursor.
        candidate: &'a CandidateSource,
    },
}

impl DisplayState<'_> {
    /// Returns true if nothing can be shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Failure reported by the display layer for the candidate it was showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Code whose photo failed.
    pub code: PersonaCode,
    /// Cursor position that failed.
    pub index: usize,
}

impl LoadFailure {
    /// Creates a failure signal.
    #[must_use]
    pub const fn new(code: PersonaCode, index: usize) -> Self {
        Self { code, index }
    }
}

/// Effect of a failure signal on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Cursor moved to the given index.
    Advanced(usize),
    /// Cursor was already on the last candidate (or the list is empty).
    Saturated,
    /// Signal belonged to another code or to an earlier cursor position.
    Ignored,
}

/// Candidate list plus cursor for the persona currently displayed.
#[derive(Debug, Clone)]
pub struct PhotoSession {
    candidates: CandidateList,
    cursor: usize,
}

impl PhotoSession {
    /// Starts a session for `code`.
    #[must_use]
    pub fn new(code: PersonaCode, remote_base: &RemoteBase, index: &dyn AssetIndexPort) -> Self {
        Self::from_candidates(build_candidates(&code, remote_base, index))
    }

    /// Starts a session over an already built list.
    #[must_use]
    pub const fn from_candidates(candidates: CandidateList) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Code being displayed.
    #[must_use]
    pub const fn code(&self) -> &PersonaCode {
        self.candidates.code()
    }

    /// Candidates of the current code.
    #[must_use]
    pub const fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the current display state.
    #[must_use]
    pub fn state(&self) -> DisplayState<'_> {
        self.candidates
            .get(self.cursor)
            .map_or(DisplayState::Empty, |candidate| DisplayState::Active {
                index: self.cursor,
                candidate,
            })
    }

    /// Returns the candidate to render, if any.
    #[must_use]
    pub fn current(&self) -> Option<&CandidateSource> {
        self.candidates.get(self.cursor)
    }

    /// Rebuilds the candidates for `code` and moves the cursor back to 0.
    pub fn reset(&mut self, code: PersonaCode, remote_base: &RemoteBase, index: &dyn AssetIndexPort) {
        debug!(from = %self.code(), to = %code, "Resetting photo session");
        self.candidates = build_candidates(&code, remote_base, index);
        self.cursor = 0;
    }

    /// Switches to `code`, rebuilding only if it differs from the current one.
    ///
    /// Returns true if the session was reset.
    pub fn show(
        &mut self,
        code: PersonaCode,
        remote_base: &RemoteBase,
        index: &dyn AssetIndexPort,
    ) -> bool {
        if code.as_str() == self.code().as_str() {
            return false;
        }
        self.reset(code, remote_base, index);
        true
    }

    /// Applies a load failure reported by the display layer.
    pub fn on_load_failure(&mut self, failure: &LoadFailure) -> Transition {
        if failure.code.as_str() != self.code().as_str() || failure.index != self.cursor {
            trace!(
                code = %failure.code,
                index = failure.index,
                current = %self.code(),
                cursor = self.cursor,
                "Ignoring stale load failure"
            );
            return Transition::Ignored;
        }

        let next = advance(self.cursor, self.candidates.len());
        if next == self.cursor {
            debug!(code = %self.code(), cursor = self.cursor, "No more photo candidates");
            return Transition::Saturated;
        }

        self.cursor = next;
        trace!(code = %self.code(), cursor = next, "Advanced to next photo candidate");
        Transition::Advanced(next)
    }

    /// Failure signal for whatever is currently displayed.
    #[must_use]
    pub fn failure_for_current(&self) -> LoadFailure {
        LoadFailure::new(self.code().clone(), self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockAssetIndex;
    use test_case::test_case;

    fn remote_session(code: &str) -> PhotoSession {
        PhotoSession::new(
            PersonaCode::new(code),
            &RemoteBase::new("https://cdn.x.com"),
            &MockAssetIndex::new(),
        )
    }

    #[test_case(0, 3, 1 ; "moves forward")]
    #[test_case(1, 3, 2 ; "moves to last")]
    #[test_case(2, 3, 2 ; "saturates at last")]
    #[test_case(0, 1, 0 ; "single candidate")]
    #[test_case(0, 0, 0 ; "empty list")]
    #[test_case(usize::MAX, 3, usize::MAX ; "max cursor saturates")]
    #[test_case(usize::MAX - 1, usize::MAX, usize::MAX - 1 ; "near max stays below len")]
    fn test_advance(cursor: usize, len: usize, expected: usize) {
        assert_eq!(advance(cursor, len), expected);
    }

    #[test]
    fn test_advance_is_monotonic_and_bounded() {
        for len in 1..6 {
            let mut cursor = 0;
            for _ in 0..10 {
                let next = advance(cursor, len);
                assert!(next >= cursor);
                assert!(next < len);
                cursor = next;
            }
            assert_eq!(cursor, len - 1);
        }
    }

    #[test]
    fn test_new_session_starts_at_first_candidate() {
        let session = remote_session("elif");

        assert_eq!(session.cursor(), 0);
        match session.state() {
            DisplayState::Active { index, candidate } => {
                assert_eq!(index, 0);
                assert_eq!(candidate.location(), "https://cdn.x.com/elif1.png");
            }
            DisplayState::Empty => panic!("expected active state"),
        }
    }

    #[test]
    fn test_failures_walk_the_list_then_saturate() {
        let mut session = remote_session("elif");

        let first = session.failure_for_current();
        assert_eq!(session.on_load_failure(&first), Transition::Advanced(1));
        let second = session.failure_for_current();
        assert_eq!(session.on_load_failure(&second), Transition::Advanced(2));
        let third = session.failure_for_current();
        assert_eq!(session.on_load_failure(&third), Transition::Saturated);
        assert_eq!(session.on_load_failure(&third), Transition::Saturated);

        assert_eq!(
            session.current().unwrap().location(),
            "https://cdn.x.com/elif3.png"
        );
    }

    #[test]
    fn test_single_local_candidate_saturates_immediately() {
        let index = MockAssetIndex::new().with_file("zeynep2.jpg");
        let mut session = PhotoSession::new(PersonaCode::new("Zeynep"), &RemoteBase::new(""), &index);

        assert_eq!(session.candidates().len(), 1);
        let failure = session.failure_for_current();
        assert_eq!(session.on_load_failure(&failure), Transition::Saturated);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_unknown_code_is_empty() {
        let mut session = PhotoSession::new(
            PersonaCode::new("unknown"),
            &RemoteBase::disabled(),
            &MockAssetIndex::new(),
        );

        assert!(session.state().is_empty());
        assert!(session.current().is_none());
        let failure = session.failure_for_current();
        assert_eq!(session.on_load_failure(&failure), Transition::Saturated);
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_code_change_resets_cursor() {
        let index = MockAssetIndex::new();
        let base = RemoteBase::new("https://cdn.x.com");
        let mut session = remote_session("elif");
        let failure = session.failure_for_current();
        session.on_load_failure(&failure);
        let failure = session.failure_for_current();
        session.on_load_failure(&failure);
        assert_eq!(session.cursor(), 2);

        assert!(session.show(PersonaCode::new("aylin"), &base, &index));

        assert_eq!(session.cursor(), 0);
        assert_eq!(session.code().as_str(), "aylin");
        assert_eq!(
            session.current().unwrap().location(),
            "https://cdn.x.com/aylin1.png"
        );
    }

    #[test]
    fn test_show_same_code_keeps_cursor() {
        let mut session = remote_session("elif");
        let failure = session.failure_for_current();
        session.on_load_failure(&failure);

        let changed = session.show(
            PersonaCode::new("ELIF"),
            &RemoteBase::new("https://cdn.x.com"),
            &MockAssetIndex::new(),
        );

        assert!(!changed);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_reset_always_rebuilds() {
        let mut session = remote_session("elif");
        let failure = session.failure_for_current();
        session.on_load_failure(&failure);

        session.reset(
            PersonaCode::new("elif"),
            &RemoteBase::disabled(),
            &MockAssetIndex::new(),
        );

        assert_eq!(session.cursor(), 0);
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_failure_for_previous_code_is_ignored() {
        let mut session = remote_session("elif");
        let stale = session.failure_for_current();

        session.show(
            PersonaCode::new("aylin"),
            &RemoteBase::new("https://cdn.x.com"),
            &MockAssetIndex::new(),
        );

        assert_eq!(session.on_load_failure(&stale), Transition::Ignored);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_repeated_failure_for_same_position_advances_once() {
        let mut session = remote_session("elif");
        let failure = session.failure_for_current();

        assert_eq!(session.on_load_failure(&failure), Transition::Advanced(1));
        assert_eq!(session.on_load_failure(&failure), Transition::Ignored);
        assert_eq!(session.cursor(), 1);
    }
}
