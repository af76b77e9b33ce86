//! CLI argument parsing for the mansion game

use clap::{Parser, ValueEnum};
use mansion_core::{RevisitPolicy, SessionConfig};

/// How game output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mansion")]
#[command(version)]
#[command(about = "Explore the mansion, collect clues and name the culprit", long_about = None)]
pub struct Cli {
    /// File clues only on the first visit to each room
    #[arg(long = "first-visit-only")]
    pub first_visit_only: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log engine activity to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Session configuration selected by the flags.
    pub fn session_config(&self) -> SessionConfig {
        let policy = if self.first_visit_only {
            RevisitPolicy::FirstVisit
        } else {
            RevisitPolicy::EveryVisit
        };
        SessionConfig::default().with_revisit_policy(policy)
    }
}
