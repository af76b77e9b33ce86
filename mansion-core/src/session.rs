//! InvestigationSession - the primary public API for playing the game.
//!
//! A session owns the mansion, the cursor into it, the clue index and the
//! suspect ledger. Every arrival in a room with evidence files the clue in the
//! index and credits it to the suspect in the ledger.

use crate::clues::ClueIndex;
use crate::command::{Command, CommandError};
use crate::evidence::{evidence_for, Evidence};
use crate::rooms::{Direction, NavigationError, Room, RoomGraph, Visit};
use crate::suspects::{LedgerError, SuspectEntry, SuspectLedger};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from InvestigationSession operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

impl SessionError {
    /// Whether this is a move that went nowhere.
    pub fn is_blocked(&self) -> bool {
        matches!(self, SessionError::Navigation(_))
    }
}

/// What happens when the player walks back into a room they have seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisitPolicy {
    /// File the room's clue again on every entry.
    #[default]
    EveryVisit,
    /// Only the first entry files the clue.
    FirstVisit,
}

/// Configuration for a new investigation.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Case title, shown by front ends.
    pub title: String,

    /// How revisits are handled.
    pub revisit_policy: RevisitPolicy,
}

impl SessionConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            revisit_policy: RevisitPolicy::default(),
        }
    }

    /// Set the revisit policy.
    pub fn with_revisit_policy(mut self, policy: RevisitPolicy) -> Self {
        self.revisit_policy = policy;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("The Mansion Mystery")
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Result of walking into a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrival {
    pub visit: Visit,
    /// Whether this was the first time in the room.
    pub first_visit: bool,
    /// Evidence filed on this arrival.
    pub evidence: Option<Evidence>,
}

impl fmt::Display for Arrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visit)?;
        if let Some(evidence) = &self.evidence {
            write!(f, "\nYou found a clue: {}", evidence.clue)?;
        }
        Ok(())
    }
}

/// A suspect as shown in a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspectSummary {
    pub name: String,
    pub count: usize,
    /// Most recent first.
    pub clues: Vec<String>,
}

impl From<&SuspectEntry> for SuspectSummary {
    fn from(entry: &SuspectEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            count: entry.count(),
            clues: entry.clues().map(str::to_string).collect(),
        }
    }
}

/// Everything collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Alphabetical.
    pub clues: Vec<String>,
    /// Alphabetical by initial.
    pub suspects: Vec<SuspectSummary>,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clues collected (alphabetical):")?;
        if self.clues.is_empty() {
            writeln!(f, "  (none yet)")?;
        }
        for clue in &self.clues {
            writeln!(f, "  Clue: {clue}")?;
        }

        writeln!(f)?;
        write!(f, "Suspects and associations:")?;
        if self.suspects.is_empty() {
            write!(f, "\n  (none yet)")?;
        }
        for suspect in &self.suspects {
            write!(f, "\nSuspect: {} (count: {})", suspect.name, suspect.count)?;
            for clue in &suspect.clues {
                write!(f, "\n  Clue: {clue}")?;
            }
        }
        Ok(())
    }
}

/// The final call on who did it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub suspect: Option<SuspectSummary>,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suspect {
            Some(s) => write!(
                f,
                "Most likely suspect: {} (with {} associations)",
                s.name, s.count
            ),
            None => write!(f, "No suspect identified."),
        }
    }
}

/// Result of executing a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Arrived(Arrival),
    Reviewed(Review),
    Help,
    Finished(Verdict),
}

// ============================================================================
// Session
// ============================================================================

/// A single investigation of the mansion.
#[derive(Debug, Clone)]
pub struct InvestigationSession {
    config: SessionConfig,
    mansion: RoomGraph,
    /// Directions taken from the entry hall.
    cursor: Vec<Direction>,
    clues: ClueIndex,
    suspects: SuspectLedger,
    visited: HashSet<String>,
    visits: usize,
}

impl InvestigationSession {
    /// Set up a fresh investigation with the cursor in the entry hall.
    ///
    /// Nothing has been visited yet; call [`begin`](Self::begin) to arrive.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            mansion: RoomGraph::construct(),
            cursor: Vec::new(),
            clues: ClueIndex::new(),
            suspects: SuspectLedger::new(),
            visited: HashSet::new(),
            visits: 0,
        }
    }

    /// Arrive in the entry hall.
    pub fn begin(&mut self) -> Result<Arrival, SessionError> {
        self.cursor.clear();
        self.arrive()
    }

    /// Walk to the room in `direction`.
    ///
    /// If there is no room that way the cursor stays put and
    /// [`NavigationError::NoSuchPath`] comes back.
    pub fn move_to(&mut self, direction: Direction) -> Result<Arrival, SessionError> {
        self.current().descend(direction)?;
        self.cursor.push(direction);
        self.arrive()
    }

    /// Walk back to the room this one was entered from.
    pub fn go_back(&mut self) -> Result<Arrival, SessionError> {
        if self.cursor.pop().is_none() {
            return Err(NavigationError::AtEntrance(self.current_room().to_string()).into());
        }
        self.arrive()
    }

    /// Apply a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Move(direction) => self.move_to(direction).map(Outcome::Arrived),
            Command::Back => self.go_back().map(Outcome::Arrived),
            Command::Review => Ok(Outcome::Reviewed(self.review())),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Finished(self.verdict())),
        }
    }

    /// Parse and apply one line of player input.
    pub fn handle_input(&mut self, input: &str) -> Result<Outcome, SessionError> {
        let command = Command::parse(input)?;
        self.execute(command)
    }

    /// Clues in alphabetical order and every suspect with their evidence.
    pub fn review(&self) -> Review {
        Review {
            clues: self.clues.in_order().map(str::to_string).collect(),
            suspects: self.suspects.enumerate().map(SuspectSummary::from).collect(),
        }
    }

    /// Name the suspect with the most evidence against them.
    pub fn verdict(&self) -> Verdict {
        let suspect = self.suspects.most_associated().map(SuspectSummary::from);
        match &suspect {
            Some(s) => info!(suspect = %s.name, count = s.count, "verdict reached"),
            None => info!("no suspect identified"),
        }
        Verdict { suspect }
    }

    fn arrive(&mut self) -> Result<Arrival, SessionError> {
        let visit = self.current().visit();
        self.visits += 1;
        let first_visit = self.visited.insert(visit.room.clone());

        let evidence = match evidence_for(&visit.room) {
            Some(evidence)
                if first_visit || self.config.revisit_policy == RevisitPolicy::EveryVisit =>
            {
                self.file(evidence)?;
                Some(*evidence)
            }
            Some(_) => {
                debug!(room = %visit.room, "evidence already filed");
                None
            }
            None => None,
        };

        Ok(Arrival {
            visit,
            first_visit,
            evidence,
        })
    }

    fn file(&mut self, evidence: &Evidence) -> Result<(), SessionError> {
        // Ledger first: it is the only step that can fail.
        self.suspects.associate(evidence.clue, evidence.suspect)?;
        self.clues.insert(evidence.clue);
        Ok(())
    }

    /// The room under the cursor.
    pub fn current(&self) -> &Room {
        // The cursor only ever grows by successful descents.
        self.mansion
            .room_at(&self.cursor)
            .unwrap_or_else(|_| self.mansion.root())
    }

    /// Name of the room under the cursor.
    pub fn current_room(&self) -> &str {
        self.current().name()
    }

    /// Directions taken from the entry hall.
    pub fn path(&self) -> &[Direction] {
        &self.cursor
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mansion(&self) -> &RoomGraph {
        &self.mansion
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectLedger {
        &self.suspects
    }

    /// Rooms entered so far, counting repeats.
    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn has_visited(&self, room: &str) -> bool {
        self.visited.contains(room)
    }
}

impl Default for InvestigationSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{ATTIC, BEDROOM, ENTRY_HALL, KITCHEN, LIBRARY};
    use Direction::{Left, Right};

    fn started(config: SessionConfig) -> InvestigationSession {
        let mut session = InvestigationSession::new(config);
        session.begin().unwrap();
        session
    }

    #[test]
    fn test_session_config() {
        let config = SessionConfig::new("Test Case").with_revisit_policy(RevisitPolicy::FirstVisit);
        assert_eq!(config.title, "Test Case");
        assert_eq!(config.revisit_policy, RevisitPolicy::FirstVisit);

        let config = SessionConfig::default();
        assert_eq!(config.revisit_policy, RevisitPolicy::EveryVisit);
    }

    #[test]
    fn test_begin_in_entry_hall() {
        let mut session = InvestigationSession::default();
        let arrival = session.begin().unwrap();
        assert_eq!(arrival.visit.room, ENTRY_HALL);
        assert!(arrival.first_visit);
        assert!(arrival.evidence.is_none());
        assert_eq!(session.visits(), 1);
        assert!(session.clues().is_empty());
    }

    #[test]
    fn test_move_files_evidence() {
        let mut session = started(SessionConfig::default());
        let arrival = session.move_to(Left).unwrap();

        assert_eq!(arrival.visit.room, LIBRARY);
        assert_eq!(arrival.evidence.unwrap().clue, "Open book at page 42");
        assert!(session.clues().contains("Open book at page 42"));
        assert_eq!(session.suspects().get("Professor Plum").unwrap().count(), 1);
        assert_eq!(
            arrival.to_string(),
            "You are in: Library\nYou found a clue: Open book at page 42"
        );
    }

    #[test]
    fn test_blocked_move_keeps_cursor() {
        let mut session = started(SessionConfig::default());
        session.move_to(Right).unwrap();
        session.move_to(Right).unwrap();
        assert_eq!(session.current_room(), BEDROOM);

        let err = session.move_to(Right).unwrap_err();
        assert!(err.is_blocked());
        assert_eq!(session.current_room(), BEDROOM);
        assert_eq!(session.path(), &[Right, Right]);
        assert_eq!(session.visits(), 3);
    }

    #[test]
    fn test_go_back() {
        let mut session = started(SessionConfig::default());
        let err = session.go_back().unwrap_err();
        assert!(err.is_blocked());
        assert_eq!(
            err.to_string(),
            "Navigation error: Already in the Entry Hall; there is no way back"
        );

        session.move_to(Right).unwrap();
        session.move_to(Left).unwrap();
        let arrival = session.go_back().unwrap();
        assert_eq!(arrival.visit.room, KITCHEN);
        assert!(!arrival.first_visit);
        assert_eq!(session.path(), &[Right]);
    }

    #[test]
    fn test_review_after_library_and_attic() {
        let mut session = started(SessionConfig::default());
        session.move_to(Left).unwrap();
        session.move_to(Left).unwrap();
        assert_eq!(session.current_room(), ATTIC);

        let review = session.review();
        assert_eq!(review.clues, vec!["Cut rope", "Open book at page 42"]);
        let names: Vec<_> = review.suspects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Colonel Mustard", "Professor Plum"]);
        assert!(review.suspects.iter().all(|s| s.count == 1));
    }

    #[test]
    fn test_review_display() {
        let mut session = started(SessionConfig::default());
        assert_eq!(
            session.review().to_string(),
            "Clues collected (alphabetical):\n  (none yet)\n\nSuspects and associations:\n  (none yet)"
        );

        session.move_to(Right).unwrap();
        assert_eq!(
            session.review().to_string(),
            "Clues collected (alphabetical):\n  Clue: Knife with blood stains\n\n\
             Suspects and associations:\nSuspect: Mrs. Peacock (count: 1)\n  Clue: Knife with blood stains"
        );
    }

    #[test]
    fn test_verdict() {
        let session = started(SessionConfig::default());
        let verdict = session.verdict();
        assert!(verdict.suspect.is_none());
        assert_eq!(verdict.to_string(), "No suspect identified.");

        let mut session = started(SessionConfig::default());
        session.move_to(Right).unwrap();
        let verdict = session.verdict();
        assert_eq!(
            verdict.to_string(),
            "Most likely suspect: Mrs. Peacock (with 1 associations)"
        );
    }

    #[test]
    fn test_revisit_every_visit_refiles() {
        let mut first = started(SessionConfig::default());
        first.move_to(Right).unwrap();
        let mut second = started(SessionConfig::default());
        second.move_to(Right).unwrap();
        second.move_to(Left).unwrap();
        let again = second.go_back().unwrap();

        assert!(!again.first_visit);
        assert!(again.evidence.is_some());
        assert_eq!(first.clues().len(), 1);
        assert_eq!(second.clues().len(), 3);
        assert_eq!(second.suspects().get("Mrs. Peacock").unwrap().count(), 2);
    }

    #[test]
    fn test_revisit_first_visit_only() {
        let mut session =
            started(SessionConfig::default().with_revisit_policy(RevisitPolicy::FirstVisit));
        session.move_to(Right).unwrap();
        session.go_back().unwrap();
        let again = session.move_to(Right).unwrap();

        assert!(!again.first_visit);
        assert!(again.evidence.is_none());
        assert!(session.has_visited(KITCHEN));
        assert_eq!(session.clues().len(), 1);
        assert_eq!(session.suspects().total_associations(), 1);
    }

    #[test]
    fn test_handle_input() {
        let mut session = started(SessionConfig::default());
        assert!(matches!(
            session.handle_input("left").unwrap(),
            Outcome::Arrived(Arrival { ref visit, .. }) if visit.room == LIBRARY
        ));
        assert_eq!(session.handle_input("help").unwrap(), Outcome::Help);
        assert!(matches!(
            session.handle_input("review").unwrap(),
            Outcome::Reviewed(_)
        ));

        let err = session.handle_input("jump").unwrap_err();
        assert_eq!(
            err,
            SessionError::Command(CommandError::InvalidCommand("jump".to_string()))
        );
        assert!(!err.is_blocked());

        match session.handle_input("quit").unwrap() {
            Outcome::Finished(verdict) => {
                assert_eq!(verdict.suspect.unwrap().name, "Professor Plum")
            }
            other => panic!("expected verdict, got {other:?}"),
        }
    }
}
