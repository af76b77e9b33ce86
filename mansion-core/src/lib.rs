//! Mansion mystery game engine.
//!
//! This crate provides:
//! - The fixed room tree of the mansion and movement through it
//! - An alphabetical index of collected clues
//! - A ledger crediting clues to suspects, with a final verdict
//! - A session type tying the three together for front ends
//!
//! # Quick Start
//!
//! ```
//! use mansion_core::{Direction, InvestigationSession, SessionConfig};
//!
//! let mut session = InvestigationSession::new(SessionConfig::default());
//! println!("{}", session.begin()?);
//!
//! println!("{}", session.move_to(Direction::Left)?);
//! println!("{}", session.move_to(Direction::Left)?);
//!
//! println!("{}", session.review());
//! println!("{}", session.verdict());
//! # Ok::<(), mansion_core::SessionError>(())
//! ```

pub mod clues;
pub mod command;
pub mod evidence;
pub mod rooms;
pub mod session;
pub mod suspects;
pub mod testing;

// Primary public API
pub use clues::ClueIndex;
pub use command::{Command, CommandError};
pub use evidence::{evidence_for, Evidence, MANSION_EVIDENCE};
pub use rooms::{Direction, NavigationError, Room, RoomGraph, Visit};
pub use session::{
    Arrival, InvestigationSession, Outcome, RevisitPolicy, Review, SessionConfig, SessionError,
    SuspectSummary, Verdict,
};
pub use suspects::{key_of, LedgerError, SuspectEntry, SuspectLedger, BUCKET_COUNT};
pub use testing::TestHarness;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tour() {
        let mut session = InvestigationSession::default();
        session.begin().unwrap();

        use Direction::{Left, Right};
        let tours: [&[Direction]; 4] = [
            &[Left, Left],
            &[Left, Right],
            &[Right, Left],
            &[Right, Right, Left],
        ];

        for path in tours {
            session.begin().unwrap();
            for &direction in path {
                session.move_to(direction).unwrap();
            }
        }

        let review = session.review();
        assert_eq!(review.clues.len(), 7 + 1 + 1);
        let plum = review
            .suspects
            .iter()
            .find(|s| s.name == evidence::PROFESSOR_PLUM)
            .unwrap();
        assert_eq!(plum.count, 4);
        assert_eq!(session.suspects().get(evidence::MRS_PEACOCK).unwrap().count(), 3);
        assert_eq!(session.suspects().get(evidence::COLONEL_MUSTARD).unwrap().count(), 2);

        let verdict = session.verdict();
        assert_eq!(verdict.suspect.unwrap().name, evidence::PROFESSOR_PLUM);
    }
}
