//! # Note Model
//!
//! Pitched positions on a fretted string and the chromatic arithmetic over them.
//!
//! ## Chromatic Names
//! Every note name is one of the 12 sharp-spelled pitch classes:
//! `C C# D D# E F F# G G# A A# B`. Flat spellings (`Db`, `Eb`, ...) and the
//! unicode glyphs `♯`/`♭` are accepted on input and normalized through a single
//! lookup table ([`normalize`]).
//!
//! ## Octaves
//! The octave number follows scientific pitch notation: it increments when the
//! name wraps from `B` back to `C`. So one fret above `B3` is `C4`.
//!
//! ## Closest Note
//! [`closest_to`] picks the candidate nearest a target position using a
//! weighted string/fret distance with a discount for open strings:
//!
//! ```text
//! score = |Δstring| * 1.0 + |Δfret| * 1.0 + (fret == 0 ? -2.0 : 0.0)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::TabError;

const STRING_WEIGHT: f64 = 1.0;
const FRET_WEIGHT: f64 = 1.0;
const OPEN_STRING_BONUS: f64 = -2.0;

/// One of the 12 pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PitchClass {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// The chromatic cycle in ascending order, starting at C.
pub const CHROMATIC_SCALE: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

/// Every accepted spelling and the pitch class it names.
const NOTE_NAMES: [(&str, PitchClass); 27] = [
    ("C", PitchClass::C),
    ("C#", PitchClass::CSharp),
    ("D", PitchClass::D),
    ("D#", PitchClass::DSharp),
    ("E", PitchClass::E),
    ("F", PitchClass::F),
    ("F#", PitchClass::FSharp),
    ("G", PitchClass::G),
    ("G#", PitchClass::GSharp),
    ("A", PitchClass::A),
    ("A#", PitchClass::ASharp),
    ("B", PitchClass::B),
    // flats
    ("Db", PitchClass::CSharp),
    ("Eb", PitchClass::DSharp),
    ("Gb", PitchClass::FSharp),
    ("Ab", PitchClass::GSharp),
    ("Bb", PitchClass::ASharp),
    // unicode glyphs
    ("C♯", PitchClass::CSharp),
    ("D♯", PitchClass::DSharp),
    ("F♯", PitchClass::FSharp),
    ("G♯", PitchClass::GSharp),
    ("A♯", PitchClass::ASharp),
    ("D♭", PitchClass::CSharp),
    ("E♭", PitchClass::DSharp),
    ("G♭", PitchClass::FSharp),
    ("A♭", PitchClass::GSharp),
    ("B♭", PitchClass::ASharp),
];

/// Resolve a note name (canonical, flat, or unicode spelling) to its pitch class.
///
/// # Example
/// ```
/// use fretwork::note::{normalize, PitchClass};
///
/// assert_eq!(normalize("Gb").unwrap(), PitchClass::FSharp);
/// assert_eq!(normalize("B♭").unwrap(), PitchClass::ASharp);
/// assert!(normalize("H").is_err());
/// ```
pub fn normalize(name: &str) -> Result<PitchClass, TabError> {
    NOTE_NAMES
        .iter()
        .find(|(spelling, _)| *spelling == name)
        .map(|(_, pitch)| *pitch)
        .ok_or_else(|| TabError::InvalidNoteName(name.to_string()))
}

impl PitchClass {
    /// Canonical sharp spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Position in [`CHROMATIC_SCALE`] (C = 0, B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next pitch class up, and whether the step wrapped from B to C.
    pub fn next(self) -> (PitchClass, bool) {
        let index = self.index();
        let wrapped = index == CHROMATIC_SCALE.len() - 1;
        (CHROMATIC_SCALE[(index + 1) % CHROMATIC_SCALE.len()], wrapped)
    }
}

impl FromStr for PitchClass {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pitched position on the fretboard, optionally scheduled at a time.
///
/// String 0 is the highest-pitched string. Fret 0 is the open string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Note {
    pub name: PitchClass,
    pub octave: i32,
    pub fret: u32,
    pub string: usize,
    pub time: f64,
}

impl Note {
    /// An open-string note of the given pitch.
    pub fn new(name: PitchClass, octave: i32) -> Self {
        Self {
            name,
            octave,
            ..Default::default()
        }
    }

    /// A fret/string position whose pitch doesn't matter (chord shapes, tab input).
    pub fn at(fret: u32, string: usize, time: f64) -> Self {
        Self {
            fret,
            string,
            time,
            ..Default::default()
        }
    }

    /// The same note moved one fret higher on its string.
    ///
    /// ```
    /// use fretwork::note::{Note, PitchClass};
    ///
    /// let b3 = Note::new(PitchClass::B, 3);
    /// let c4 = b3.advance_fret();
    /// assert_eq!((c4.name, c4.octave, c4.fret), (PitchClass::C, 4, 1));
    /// ```
    pub fn advance_fret(&self) -> Note {
        let (name, wrapped) = self.name.next();
        Note {
            name,
            octave: if wrapped { self.octave + 1 } else { self.octave },
            fret: self.fret + 1,
            ..self.clone()
        }
    }

    /// True when this note sounds `name` in `octave`.
    pub fn same_pitch(&self, name: PitchClass, octave: i32) -> bool {
        self.name == name && self.octave == octave
    }

    /// Weighted distance from this position to `target`. Lower is closer.
    pub fn score(&self, target: &Note) -> f64 {
        let fret_dist = (self.fret as f64 - target.fret as f64).abs();
        let string_dist = (self.string as f64 - target.string as f64).abs();
        let open_string = if self.fret == 0 { OPEN_STRING_BONUS } else { 0.0 };

        string_dist * STRING_WEIGHT + fret_dist * FRET_WEIGHT + open_string
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} (string {}, fret {})",
            self.name, self.octave, self.string, self.fret
        )
    }
}

/// Pick the candidate closest to `target`, timed at the target's moment.
///
/// Ties go to the earliest candidate.
pub fn closest_to(candidates: &[Note], target: &Note) -> Result<Note, TabError> {
    let mut best: Option<(&Note, f64)> = None;

    for candidate in candidates {
        let score = candidate.score(target);
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((candidate, score));
        }
    }

    let (closest, _) = best.ok_or(TabError::EmptyCollection)?;
    Ok(Note {
        time: target.time,
        ..closest.clone()
    })
}
