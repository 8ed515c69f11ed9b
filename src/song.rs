//! # Song Documents
//!
//! YAML input for rendering a whole piece of tab in one go.
//!
//! ## Format
//! ```yaml
//! title: Intro
//! tuning: E4 B3 G3 D3 A2 E2
//! time-step: 0.25
//! frets: 12
//! groups:
//!   - time: 0
//!     chord: Am
//!   - time: 0.5
//!     shape: "0 2 2 2 0 -"
//!   - time: 1.0
//!     events:
//!       - { kind: slide, to: 7, string: 2 }
//!       - { kind: pitch, name: C#3 }
//! ```
//!
//! Every top-level key is optional. A group is written as one simultaneous
//! batch at its `time`; `chord`, `shape` and `events` may be combined.
//!
//! ## Pitch Events
//! `{ kind: pitch, name: C#3 }` asks the fretboard where to play a pitch. The
//! candidate closest to the previously placed pitch wins (the first pitch is
//! measured from the open high string).
//!
//! ## Two-Step Loading
//! The YAML is first deserialized into raw structs that mirror the text, then
//! [`Song::from_raw`] validates it into typed values.

use serde::Deserialize;

use crate::chords::{parse_chord, Chord};
use crate::error::TabError;
use crate::fretboard::Fretboard;
use crate::note::{Note, PitchClass};
use crate::playable::{Event, HammerOn, Harmonic, PullOff, Slide};
use crate::tab::{TabSettings, TabWriter};
use crate::tuning::{parse_pitch, Tuning, STANDARD_TUNING};

pub const DEFAULT_FRETS: i32 = 22;

/// Song as written in YAML.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSong {
    pub title: Option<String>,
    pub tuning: Option<String>,
    pub time_step: Option<f64>,
    pub frets: Option<i32>,
    #[serde(default)]
    pub groups: Vec<RawGroup>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawGroup {
    pub time: f64,
    pub chord: Option<String>,
    pub shape: Option<String>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RawEvent {
    Note { fret: u32, string: usize },
    Slide { from: Option<u32>, to: u32, string: usize },
    HammerOn { from: u32, to: u32, string: usize },
    PullOff { from: u32, to: u32, string: usize },
    Harmonic { fret: u32, string: usize },
    Pitch { name: String },
}

/// One group after validation. Pitch requests are kept until render time
/// because their placement depends on what was played before.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupItem {
    Event(Event),
    Pitch { name: PitchClass, octave: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub time: f64,
    pub items: Vec<GroupItem>,
}

#[derive(Debug, Clone)]
pub struct Song {
    pub title: Option<String>,
    pub settings: TabSettings,
    pub fretboard: Fretboard,
    pub groups: Vec<Group>,
}

impl Song {
    /// Parse a YAML song document.
    pub fn parse(source: &str) -> Result<Self, TabError> {
        let raw: RawSong =
            serde_yaml::from_str(source).map_err(|e| TabError::SongError(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawSong) -> Result<Self, TabError> {
        let tuning = Tuning::parse(raw.tuning.as_deref().unwrap_or(STANDARD_TUNING))?;
        let fretboard = Fretboard::new(tuning, raw.frets.unwrap_or(DEFAULT_FRETS))?;
        let settings = match raw.time_step {
            Some(time_step) => TabSettings { time_step },
            None => TabSettings::default(),
        };

        let groups = raw
            .groups
            .into_iter()
            .map(group_from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: raw.title,
            settings,
            fretboard,
            groups,
        })
    }

    /// Lay the whole song out as tab text.
    pub fn render(&self) -> Result<String, TabError> {
        let mut tab = TabWriter::for_tuning(self.fretboard.tuning(), self.settings)?;
        let mut last_pitch = Note::at(0, 0, 0.0);

        for group in &self.groups {
            let mut events = Vec::with_capacity(group.items.len());
            for item in &group.items {
                match item {
                    GroupItem::Event(event) => events.push(event.clone()),
                    GroupItem::Pitch { name, octave } => {
                        let target = Note {
                            time: group.time,
                            ..last_pitch.clone()
                        };
                        let placed = self.fretboard.closest_position(*name, *octave, &target)?;
                        last_pitch = placed.clone();
                        events.push(Event::Note(placed));
                    }
                }
            }
            tab.write_group(&events)?;
        }

        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(title);
            out.push('\n');
        }
        out.push_str(&tab.tab());
        Ok(out)
    }
}

fn group_from_raw(raw: RawGroup) -> Result<Group, TabError> {
    let time = raw.time;
    let mut items = Vec::new();

    if let Some(symbol) = &raw.chord {
        let chord: Chord = symbol.parse()?;
        items.extend(chord.notes(time).into_iter().map(|n| GroupItem::Event(n.into())));
    }

    if let Some(shape) = &raw.shape {
        let notes = parse_chord(shape, time);
        if notes.is_empty() {
            return Err(TabError::SongError(format!(
                "invalid chord shape at time {}: {:?}",
                time, shape
            )));
        }
        items.extend(notes.into_iter().map(|n| GroupItem::Event(n.into())));
    }

    for event in raw.events {
        items.push(item_from_raw(event, time)?);
    }

    Ok(Group { time, items })
}

fn item_from_raw(raw: RawEvent, time: f64) -> Result<GroupItem, TabError> {
    let event: Event = match raw {
        RawEvent::Note { fret, string } => Note::at(fret, string, time).into(),
        RawEvent::Slide { from, to, string } => Slide { from, to, string, time }.into(),
        RawEvent::HammerOn { from, to, string } => HammerOn { from, to, string, time }.into(),
        RawEvent::PullOff { from, to, string } => PullOff { from, to, string, time }.into(),
        RawEvent::Harmonic { fret, string } => Harmonic { fret, string, time }.into(),
        RawEvent::Pitch { name } => return pitch_from_raw(&name),
    };
    Ok(GroupItem::Event(event))
}

fn pitch_from_raw(token: &str) -> Result<GroupItem, TabError> {
    let note = parse_pitch(token)?;
    Ok(GroupItem::Pitch {
        name: note.name,
        octave: note.octave,
    })
}
