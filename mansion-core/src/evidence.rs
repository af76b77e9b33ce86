//! The clue hidden in each room and who it points at.

use crate::rooms::{ATTIC, BASEMENT, BEDROOM, GARDEN, KITCHEN, LIBRARY, OFFICE};
use serde::Serialize;

pub const PROFESSOR_PLUM: &str = "Professor Plum";
pub const MRS_PEACOCK: &str = "Mrs. Peacock";
pub const COLONEL_MUSTARD: &str = "Colonel Mustard";

/// A clue found in a room, implicating one suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evidence {
    pub room: &'static str,
    pub clue: &'static str,
    pub suspect: &'static str,
}

impl Evidence {
    const fn new(room: &'static str, clue: &'static str, suspect: &'static str) -> Self {
        Self {
            room,
            clue,
            suspect,
        }
    }
}

/// Every piece of evidence in the mansion. The entry hall holds none.
pub static MANSION_EVIDENCE: [Evidence; 7] = [
    Evidence::new(LIBRARY, "Open book at page 42", PROFESSOR_PLUM),
    Evidence::new(KITCHEN, "Knife with blood stains", MRS_PEACOCK),
    Evidence::new(ATTIC, "Cut rope", COLONEL_MUSTARD),
    Evidence::new(GARDEN, "Footprints in mud", MRS_PEACOCK),
    Evidence::new(OFFICE, "Torn document", PROFESSOR_PLUM),
    Evidence::new(BEDROOM, "Broken window", COLONEL_MUSTARD),
    Evidence::new(BASEMENT, "Locked box", PROFESSOR_PLUM),
];

/// The evidence waiting in `room`, if any.
pub fn evidence_for(room: &str) -> Option<&'static Evidence> {
    MANSION_EVIDENCE.iter().find(|e| e.room == room)
}
