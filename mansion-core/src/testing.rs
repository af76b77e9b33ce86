//! Testing utilities for the mansion game.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted investigations
//! - Assertion helpers for verifying session state

use crate::session::{InvestigationSession, Outcome, RevisitPolicy, SessionConfig, SessionError};

/// Test harness for running scripted investigations.
pub struct TestHarness {
    /// The session under test.
    pub session: InvestigationSession,
    /// Every outcome so far, in order.
    pub outcomes: Vec<Result<Outcome, SessionError>>,
}

impl TestHarness {
    /// Create a harness standing in the entry hall.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::new("Test Case"))
    }

    /// Create a harness with a custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        let mut session = InvestigationSession::new(config);
        let arrival = session.begin().map(Outcome::Arrived);

        Self {
            session,
            outcomes: vec![arrival],
        }
    }

    /// Create a harness where revisits do not re-file evidence.
    pub fn first_visit_only() -> Self {
        Self::with_config(
            SessionConfig::new("Test Case").with_revisit_policy(RevisitPolicy::FirstVisit),
        )
    }

    /// Send one line of input.
    pub fn input(&mut self, line: &str) -> &Result<Outcome, SessionError> {
        let outcome = self.session.handle_input(line);
        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Send several lines of input in order.
    pub fn script(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.input(line);
        }
        self
    }

    /// Name of the current room.
    pub fn room(&self) -> &str {
        self.session.current_room()
    }

    /// Clue texts in review order.
    pub fn clues(&self) -> Vec<String> {
        self.session.review().clues
    }

    /// A suspect's count, looked up by their bucket.
    pub fn suspect_count(&self, name: &str) -> Option<usize> {
        self.session.suspects().get(name).map(|entry| entry.count())
    }

    /// How many outcomes were errors.
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_err()).count()
    }

    /// The most recent outcome.
    pub fn last_outcome(&self) -> Option<&Result<Outcome, SessionError>> {
        self.outcomes.last()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the cursor is in the named room.
#[track_caller]
pub fn assert_room(harness: &TestHarness, room: &str) {
    assert_eq!(
        harness.room(),
        room,
        "Expected to be in '{room}', but in '{}'",
        harness.room()
    );
}

/// Assert the collected clues, in review order.
#[track_caller]
pub fn assert_clues(harness: &TestHarness, expected: &[&str]) {
    let actual = harness.clues();
    assert_eq!(actual, expected, "Unexpected clues collected");
}

/// Assert a suspect's evidence count.
#[track_caller]
pub fn assert_suspect_count(harness: &TestHarness, name: &str, count: usize) {
    assert_eq!(
        harness.suspect_count(name),
        Some(count),
        "Expected {name} to have {count} associations"
    );
}

/// Assert the last input was refused because the way was blocked.
#[track_caller]
pub fn assert_blocked(harness: &TestHarness) {
    match harness.last_outcome() {
        Some(Err(e)) if e.is_blocked() => {}
        other => panic!("Expected a blocked move, got {other:?}"),
    }
}
