//! Line-oriented game loop.
//!
//! Reads one command per line and answers each with what happened:
//! - arrivals print the room, any clue found and the open exits
//! - `review` prints collected clues and suspects
//! - `quit` (or end of input) prints the final analysis

use crate::cli::OutputFormat;
use mansion_core::{
    Arrival, Command, InvestigationSession, Outcome, Review, SessionConfig, SessionError, Verdict,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One JSON line of output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Arrival(&'a Arrival),
    Review(&'a Review),
    Help { text: &'static str },
    Blocked { message: String },
    Error { message: String },
    Verdict(&'a Verdict),
}

struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Printer<W> {
    fn banner(&mut self, title: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "=== {title} ===")?;
            writeln!(self.out, "{}", Command::HELP)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn arrival(&mut self, arrival: &Arrival) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&Event::Arrival(arrival)),
            OutputFormat::Text => {
                writeln!(self.out, "{arrival}")?;
                let exits: Vec<_> = arrival.visit.exits.iter().map(|d| d.name()).collect();
                if exits.is_empty() {
                    writeln!(self.out, "Exits: none")
                } else {
                    writeln!(self.out, "Exits: {}", exits.join(", "))
                }
            }
        }
    }

    fn review(&mut self, review: &Review) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&Event::Review(review)),
            OutputFormat::Text => writeln!(self.out, "{review}"),
        }
    }

    fn help(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&Event::Help {
                text: Command::HELP,
            }),
            OutputFormat::Text => writeln!(self.out, "{}", Command::HELP),
        }
    }

    fn error(&mut self, error: &SessionError) -> io::Result<()> {
        let message = error.to_string();
        match (self.format, error.is_blocked()) {
            (OutputFormat::Json, true) => self.json(&Event::Blocked { message }),
            (OutputFormat::Json, false) => self.json(&Event::Error { message }),
            (OutputFormat::Text, true) => writeln!(self.out, "[BLOCKED] {message}"),
            (OutputFormat::Text, false) => {
                writeln!(self.out, "[ERROR] {message}. Type help for commands.")
            }
        }
    }

    fn verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&Event::Verdict(verdict)),
            OutputFormat::Text => {
                writeln!(self.out)?;
                writeln!(self.out, "Final analysis:")?;
                writeln!(self.out, "{verdict}")
            }
        }
    }

    fn json(&mut self, event: &Event<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)
    }
}

/// Run the game over `input`, writing everything to `output`.
pub fn run<R: BufRead, W: Write>(
    config: SessionConfig,
    format: OutputFormat,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut printer = Printer {
        out: output,
        format,
    };
    printer.banner(&config.title)?;

    let mut session = InvestigationSession::new(config);
    match session.begin() {
        Ok(arrival) => printer.arrival(&arrival)?,
        Err(e) => printer.error(&e)?,
    }
    printer.out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(input = line, "player input");
        match session.handle_input(line) {
            Ok(Outcome::Arrived(arrival)) => printer.arrival(&arrival)?,
            Ok(Outcome::Reviewed(review)) => printer.review(&review)?,
            Ok(Outcome::Help) => printer.help()?,
            Ok(Outcome::Finished(verdict)) => {
                printer.verdict(&verdict)?;
                return printer.out.flush();
            }
            Err(e) => printer.error(&e)?,
        }
        printer.out.flush()?;
    }

    debug!("input closed before quit");
    printer.verdict(&session.verdict())?;
    printer.out.flush()
}
