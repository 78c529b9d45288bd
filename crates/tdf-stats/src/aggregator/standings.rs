//! Grouping of result records into riders, and field-wide statistics.
//!
//! Two phases:
//! 1. `Aggregator` accepts records and groups them by `AthleteKey`
//! 2. `Standings` (from `Aggregator::finish`) answers read-only queries
//!
//! `finish` consumes the aggregator, so nothing can be ingested once
//! reporting has started.

use super::athlete::{Athlete, AthleteKey};
use super::metrics::median;
use crate::parser::record::RawRecord;
use crate::parser::source::{read_lines, read_source, MalformedPolicy};
use crate::utils::config::YearRange;
use crate::utils::error::StatsError;
use log::{debug, info, warn};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

/// Counters from one ingestion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Lines read from the source
    pub lines: usize,

    /// Performances recorded
    pub ingested: usize,

    /// Lines dropped under `MalformedPolicy::Skip`
    pub skipped: usize,
}

/// Ingestion phase: builds the rider table
#[derive(Debug, Default)]
pub struct Aggregator {
    athletes: BTreeMap<AthleteKey, Athlete>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw record against its rider
    ///
    /// **Public** - main entry point for ingestion
    ///
    /// # Errors
    /// * `StatsError::MalformedRecord` - year or speed is not a number
    /// * `StatsError::InvalidInput` - speed not positive, or implausible year
    pub fn ingest_record(&mut self, record: &RawRecord) -> Result<(), StatsError> {
        let (year, speed) = record.numbers()?;
        let key = AthleteKey::new(record.first_name.as_str(), record.last_name.as_str());

        // Only a valid first performance creates a rider
        let recorded = match self.athletes.entry(key.clone()) {
            Entry::Occupied(mut slot) => {
                let athlete = slot.get_mut();
                if !athlete.key().same_parts(&key) {
                    warn!(
                        "Line {}: \"{} {}\" merged into \"{}\" (names concatenate to the same key)",
                        record.line,
                        record.first_name,
                        record.last_name,
                        athlete.display_name()
                    );
                }
                athlete.record_performance(year, speed)
            }
            Entry::Vacant(slot) => {
                let mut athlete = Athlete::new(key.first(), key.last());
                athlete.record_performance(year, speed).map(|()| {
                    debug!("New rider: {}", athlete.display_name());
                    slot.insert(athlete);
                })
            }
        };

        recorded.map_err(|e| match e {
            StatsError::InvalidInput(reason) if record.line > 0 => StatsError::MalformedRecord {
                line: record.line,
                reason,
            },
            other => other,
        })
    }

    /// Ingest a batch of raw records, stopping at the first error
    pub fn ingest<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a RawRecord>,
    ) -> Result<usize, StatsError> {
        let mut count = 0;
        for record in records {
            self.ingest_record(record)?;
            count += 1;
        }
        Ok(count)
    }

    /// Ingest numbered text lines
    pub fn ingest_lines<S: AsRef<str>>(
        &mut self,
        lines: impl IntoIterator<Item = (usize, S)>,
        policy: MalformedPolicy,
    ) -> Result<IngestSummary, StatsError> {
        let mut summary = IngestSummary::default();

        for (line_no, text) in lines {
            summary.lines += 1;

            let outcome =
                RawRecord::from_line(line_no, text.as_ref()).and_then(|r| self.ingest_record(&r));

            match outcome {
                Ok(()) => summary.ingested += 1,
                Err(e) if policy == MalformedPolicy::Skip && e.is_record_level() => {
                    warn!("Skipping line {}: {}", line_no, e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }

    /// Read `reader` to completion, then ingest every line
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        reader: R,
        policy: MalformedPolicy,
    ) -> Result<IngestSummary, StatsError> {
        let lines = read_lines(reader, "<reader>")?;
        self.ingest_lines(lines, policy)
    }

    /// Read the file at `path` to completion, then ingest every line
    pub fn ingest_file(
        &mut self,
        path: impl AsRef<Path>,
        policy: MalformedPolicy,
    ) -> Result<IngestSummary, StatsError> {
        let path = path.as_ref();
        let lines = read_source(path)?;
        let summary = self.ingest_lines(lines, policy)?;

        info!(
            "Ingested {} performances for {} riders from {} ({} skipped)",
            summary.ingested,
            self.athletes.len(),
            path.display(),
            summary.skipped
        );

        Ok(summary)
    }

    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    /// End ingestion and switch to read-only reporting
    pub fn finish(self) -> Standings {
        debug!("Ingestion finished with {} riders", self.athletes.len());
        Standings {
            athletes: self.athletes,
        }
    }
}

/// One line of the best-gain report
#[derive(Debug, Clone, PartialEq)]
pub struct GainEntry {
    pub display_name: String,
    pub best_gain: f64,
}

/// Reporting phase: read-only view of every rider
#[derive(Debug, Clone)]
pub struct Standings {
    athletes: BTreeMap<AthleteKey, Athlete>,
}

impl Standings {
    /// Build standings directly from riders
    ///
    /// Riders whose keys collide keep the first occurrence.
    pub fn from_athletes(athletes: impl IntoIterator<Item = Athlete>) -> Self {
        let mut table = BTreeMap::new();
        for athlete in athletes {
            table.entry(athlete.key().clone()).or_insert(athlete);
        }
        Self { athletes: table }
    }

    /// Riders in ascending key order
    pub fn athletes(&self) -> impl Iterator<Item = &Athlete> {
        self.athletes.values()
    }

    pub fn athlete(&self, key: &AthleteKey) -> Option<&Athlete> {
        self.athletes.get(key)
    }

    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    /// Total recorded performances across all riders
    pub fn observation_count(&self) -> usize {
        self.athletes.values().map(Athlete::performance_count).sum()
    }

    /// Best gain per rider, ordered by identity key
    pub fn report(&self) -> Vec<GainEntry> {
        self.athletes
            .values()
            .map(|athlete| GainEntry {
                display_name: athlete.display_name(),
                best_gain: athlete.best_gain(),
            })
            .collect()
    }

    /// Median of every performance whose year is inside `range`
    ///
    /// # Errors
    /// * `StatsError::InsufficientData` - no performance falls in the range
    pub fn global_median_speed(&self, range: YearRange) -> Result<f64, StatsError> {
        let speeds: Vec<f64> = self
            .athletes
            .values()
            .flat_map(|athlete| athlete.performances())
            .filter(|(year, _)| range.contains(*year))
            .map(|(_, speed)| speed)
            .collect();

        debug!(
            "{} performances between {} and {}",
            speeds.len(),
            range.first,
            range.last
        );

        median(speeds).map_err(|_| {
            StatsError::InsufficientData(format!(
                "no performances between {} and {}",
                range.first, range.last
            ))
        })
    }

    /// Median of each rider's own full-history median
    ///
    /// Riders with nothing recorded are left out.
    ///
    /// # Errors
    /// * `StatsError::InsufficientData` - no rider has a median
    pub fn median_of_athlete_medians(&self) -> Result<f64, StatsError> {
        let medians: Vec<f64> = self
            .athletes
            .values()
            .filter_map(|athlete| athlete.median_speed().ok())
            .collect();

        median(medians).map_err(|_| {
            StatsError::InsufficientData("no rider has a recorded speed".to_string())
        })
    }
}
