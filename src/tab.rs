//! # Tablature Writer
//!
//! Lays out [`Playable`] events as aligned ASCII tablature, one text line per
//! string.
//!
//! ## Time Grid
//! Every text column stands for one `time_step` (0.2 by default). The writer
//! keeps a cursor time. Before an event is written, the gap between the cursor
//! and the event is filled with `-` columns, one per whole time step:
//!
//! ```text
//! silence = floor((event_time - cursor) / time_step)
//! cursor += (silence + 1) * time_step
//! ```
//!
//! The extra step accounts for the column the event itself occupies.
//!
//! ## Alignment
//! All string lines have the same width after every write. Symbols wider than
//! one column (`12`, `5/7`, `<12>`) pad every other string to match, and one
//! more `-` is appended after each batch so a technique never runs into the
//! next written column:
//!
//! ```text
//! e|-----        not  e|----
//! G|5/7--             G|5/73
//! D|---3-             D|---
//! ```
//!
//! ## Simultaneous Events
//! [`TabWriter::write_group`] takes events meant to sound together. Events are
//! ordered by start time and written in batches of equal time, so a group
//! spanning several times is laid out left to right. Two events on the same
//! string within one batch are rejected.
//!
//! ## Failure
//! Every check runs before the first column is written. A rejected call
//! leaves the lines and cursor untouched.

use log::{debug, trace};

use crate::error::TabError;
use crate::playable::Playable;
use crate::tuning::Tuning;

pub const DEFAULT_TIME_STEP: f64 = 0.2;

/// Slack for floating-point error in accumulated times.
const TIME_EPSILON: f64 = 1e-9;

/// Most silent columns a single write may insert.
const MAX_SILENCE_COLUMNS: f64 = 1_000_000.0;

const SILENCE: char = '-';
const SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSettings {
    /// Duration one text column represents.
    pub time_step: f64,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabWriter {
    time: f64,
    time_step: f64,
    lines: Vec<String>,
    /// Width of each line in columns.
    widths: Vec<usize>,
}

impl TabWriter {
    /// A writer for `strings` strings with the default time step.
    ///
    /// `labels` are the open-string names, top line first. Each line starts
    /// with its label, space-padded to the widest label, followed by `|`.
    ///
    /// # Example
    /// ```
    /// use fretwork::{Note, TabWriter};
    ///
    /// let mut tab = TabWriter::new(6, &["e", "B", "G", "D", "A", "E"]).unwrap();
    /// tab.write_single(&Note::at(0, 0, 0.0)).unwrap();
    /// assert_eq!(tab.tab(), "e|0-\nB|--\nG|--\nD|--\nA|--\nE|--\n");
    /// ```
    pub fn new<S: AsRef<str>>(strings: usize, labels: &[S]) -> Result<Self, TabError> {
        Self::with_settings(strings, labels, TabSettings::default())
    }

    pub fn with_settings<S: AsRef<str>>(
        strings: usize,
        labels: &[S],
        settings: TabSettings,
    ) -> Result<Self, TabError> {
        if !(settings.time_step.is_finite() && settings.time_step > 0.0) {
            return Err(TabError::InvalidTimeStep(settings.time_step));
        }
        if labels.len() != strings {
            return Err(TabError::TuningMismatch {
                expected: strings,
                found: labels.len(),
            });
        }

        let label_width = labels
            .iter()
            .map(|label| label.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<String> = labels
            .iter()
            .map(|label| format!("{:<label_width$}{}", label.as_ref(), SEPARATOR))
            .collect();
        let widths = lines.iter().map(|line| line.chars().count()).collect();

        Ok(Self {
            time: 0.0,
            time_step: settings.time_step,
            lines,
            widths,
        })
    }

    /// A writer with one line per string of `tuning`, labelled by its open notes.
    pub fn for_tuning(tuning: &Tuning, settings: TabSettings) -> Result<Self, TabError> {
        Self::with_settings(tuning.len(), &tuning.labels(), settings)
    }

    /// Current cursor time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn string_count(&self) -> usize {
        self.lines.len()
    }

    /// Write events that sound together. An empty group writes nothing.
    pub fn write_group<P: Playable>(&mut self, events: &[P]) -> Result<(), TabError> {
        for event in events {
            self.check_event(event)?;
        }

        let mut ordered: Vec<&P> = events.iter().collect();
        ordered.sort_by(|a, b| a.start_time().total_cmp(&b.start_time()));

        let batches = batch_by_time(&ordered);
        for batch in &batches {
            check_distinct_strings(batch)?;
        }

        for batch in &batches {
            self.write_batch(batch);
        }
        Ok(())
    }

    /// Write one event.
    pub fn write_single<P: Playable>(&mut self, event: &P) -> Result<(), TabError> {
        self.check_event(event)?;
        self.write_batch(&[event]);
        Ok(())
    }

    /// The tab text: each string's line followed by a newline, top string first.
    pub fn tab(&self) -> String {
        let mut tab = String::new();
        for line in &self.lines {
            tab.push_str(line);
            tab.push('\n');
        }
        tab
    }

    fn check_event<P: Playable>(&self, event: &P) -> Result<(), TabError> {
        let time = event.start_time();
        if !time.is_finite() {
            return Err(TabError::InvalidTime(time));
        }
        if time < self.time - TIME_EPSILON {
            return Err(TabError::TimeRegression {
                time,
                cursor: self.time,
            });
        }
        if (time - self.time) / self.time_step > MAX_SILENCE_COLUMNS {
            return Err(TabError::InvalidTime(time));
        }
        if event.string_index() >= self.lines.len() {
            return Err(TabError::InvalidStringIndex {
                string: event.string_index(),
                strings: self.lines.len(),
            });
        }
        Ok(())
    }

    /// Write events already checked to share one time and distinct strings.
    fn write_batch<P: Playable>(&mut self, batch: &[&P]) {
        let Some(first) = batch.first() else {
            return;
        };
        let time = first.start_time();

        let silence = ((time - self.time) / self.time_step + TIME_EPSILON)
            .floor()
            .max(0.0) as usize;
        self.add_silence(silence);
        self.time += self.time_step * (silence + 1) as f64;

        debug!(
            "writing {} event(s) at {} after {} silent column(s)",
            batch.len(),
            time,
            silence
        );

        for event in batch {
            let symbol = event.symbol();
            let string = event.string_index();
            trace!("string {}: {}", string, symbol);
            self.widths[string] += symbol.chars().count();
            self.lines[string].push_str(&symbol);
        }

        self.pad_to_widest();
        // keeps "3" followed by "12" from reading as "312"
        self.add_silence(1);
    }

    fn add_silence(&mut self, columns: usize) {
        for (line, width) in self.lines.iter_mut().zip(self.widths.iter_mut()) {
            line.extend(std::iter::repeat(SILENCE).take(columns));
            *width += columns;
        }
    }

    fn pad_to_widest(&mut self) {
        let widest = self.widths.iter().copied().max().unwrap_or(0);
        for (line, width) in self.lines.iter_mut().zip(self.widths.iter_mut()) {
            line.extend(std::iter::repeat(SILENCE).take(widest - *width));
            *width = widest;
        }
    }
}

/// Split time-ordered events into runs that start together.
fn batch_by_time<'a, P: Playable>(ordered: &[&'a P]) -> Vec<Vec<&'a P>> {
    let mut batches: Vec<Vec<&'a P>> = Vec::new();

    for &event in ordered {
        match batches.last_mut() {
            Some(batch)
                if (event.start_time() - batch[0].start_time()).abs() <= TIME_EPSILON =>
            {
                batch.push(event)
            }
            _ => batches.push(vec![event]),
        }
    }

    batches
}

fn check_distinct_strings<P: Playable>(batch: &[&P]) -> Result<(), TabError> {
    for (i, event) in batch.iter().enumerate() {
        if batch[..i]
            .iter()
            .any(|other| other.string_index() == event.string_index())
        {
            return Err(TabError::DuplicateStringWrite {
                string: event.string_index(),
                time: event.start_time(),
            });
        }
    }
    Ok(())
}
