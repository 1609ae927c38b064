use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, sink, Sink, Write};
use tracing::warn;

/// Outcome of a single trial, one CSV row each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub trial: usize,
    pub points: usize,
    pub brute_force: f64,
    pub divide_and_conquer: f64,
    pub matched: bool,
    pub brute_force_micros: u64,
    pub divide_and_conquer_micros: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialSummary {
    pub trials: usize,
    pub matches: usize,
    pub mismatches: Vec<TrialRecord>,
}

impl TrialSummary {
    pub fn all_matched(&self) -> bool {
        self.matches == self.trials
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successful trials: {}/{}", self.matches, self.trials)
    }
}

/// Collects trial records, writing each to CSV as it arrives.
pub struct Supervisor<W: Write> {
    writer: Writer<W>,
    summary: TrialSummary,
}

impl<W: Write> Supervisor<W> {
    pub fn new(writer: Writer<W>) -> Self {
        Supervisor {
            writer,
            summary: TrialSummary::default(),
        }
    }

    pub fn record(&mut self, record: TrialRecord) -> Result<(), csv::Error> {
        self.writer.serialize(&record)?;

        self.summary.trials += 1;
        if record.matched {
            self.summary.matches += 1;
        } else {
            warn!(
                trial = record.trial,
                brute_force = record.brute_force,
                divide_and_conquer = record.divide_and_conquer,
                "solvers disagree"
            );
            self.summary.mismatches.push(record);
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn summary(&self) -> TrialSummary {
        self.summary.clone()
    }

    /// Flushes the CSV writer and hands back the underlying sink.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| io::Error::new(err.error().kind(), err.error().to_string()))
    }
}

impl Default for Supervisor<Sink> {
    fn default() -> Self {
        Supervisor::new(Writer::from_writer(sink()))
    }
}
