//! Suspect ledger: which clues point at whom.
//!
//! The ledger is a fixed table of [`BUCKET_COUNT`] buckets, one per uppercase
//! initial. A suspect's bucket is chosen by the first letter of their name
//! alone, so two suspects who share an initial land in the same bucket. The
//! first one to arrive owns it and every later association for that initial is
//! credited to them, with a warning logged each time.

use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, warn};

/// One bucket per letter `A` to `Z`.
pub const BUCKET_COUNT: usize = 26;

/// Error type for ledger updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Suspect {0:?} does not start with an uppercase letter")]
    UnindexableSuspect(String),
}

/// Bucket index for a suspect: the first letter's distance from `'A'`.
///
/// Returns `None` unless the name starts with an ASCII uppercase letter.
pub fn key_of(identifier: &str) -> Option<usize> {
    let initial = identifier.chars().next()?;
    initial
        .is_ascii_uppercase()
        .then(|| usize::from(initial as u8 - b'A'))
}

// ============================================================================
// Entries
// ============================================================================

/// A suspect and the evidence against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectEntry {
    name: String,
    /// Most recent clue first.
    clues: VecDeque<String>,
}

impl SuspectEntry {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clues: VecDeque::new(),
        }
    }

    fn record(&mut self, clue: String) {
        self.clues.push_front(clue);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many clues implicate this suspect.
    pub fn count(&self) -> usize {
        self.clues.len()
    }

    /// Associated clues, most recent first.
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(String::as_str)
    }
}

// ============================================================================
// Ledger
// ============================================================================

/// Fixed-size index from suspect initial to [`SuspectEntry`].
#[derive(Debug, Clone, Default)]
pub struct SuspectLedger {
    buckets: [Option<SuspectEntry>; BUCKET_COUNT],
}

impl SuspectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `clue` to `suspect`.
    ///
    /// Creates the bucket's entry on first use. If the bucket already belongs
    /// to someone else with the same initial, the clue is credited to them.
    pub fn associate(
        &mut self,
        clue: impl Into<String>,
        suspect: &str,
    ) -> Result<&SuspectEntry, LedgerError> {
        let key =
            key_of(suspect).ok_or_else(|| LedgerError::UnindexableSuspect(suspect.to_string()))?;
        let clue = clue.into();

        let entry = self.buckets[key].get_or_insert_with(|| SuspectEntry::new(suspect));
        if entry.name != suspect {
            warn!(
                suspect,
                owner = %entry.name,
                bucket = key,
                "suspect shares a bucket; crediting existing owner"
            );
        }

        debug!(clue = %clue, suspect = %entry.name, "associated clue");
        entry.record(clue);
        Ok(entry)
    }

    /// Occupied entries in bucket order, i.e. alphabetical by initial.
    pub fn enumerate(&self) -> impl Iterator<Item = &SuspectEntry> {
        self.buckets.iter().flatten()
    }

    /// The entry holding `identifier`'s bucket, whoever owns it.
    pub fn get(&self, identifier: &str) -> Option<&SuspectEntry> {
        key_of(identifier).and_then(|key| self.buckets[key].as_ref())
    }

    /// The suspect with the strictly highest count.
    ///
    /// Ties go to the earlier bucket. Entries with no clues never qualify.
    pub fn most_associated(&self) -> Option<&SuspectEntry> {
        let mut best: Option<&SuspectEntry> = None;
        for entry in self.enumerate() {
            if entry.count() > best.map_or(0, SuspectEntry::count) {
                best = Some(entry);
            }
        }
        best
    }

    /// Sum of every entry's count.
    pub fn total_associations(&self) -> usize {
        self.enumerate().map(SuspectEntry::count).sum()
    }

    /// Number of occupied buckets.
    pub fn len(&self) -> usize {
        self.enumerate().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }
}
