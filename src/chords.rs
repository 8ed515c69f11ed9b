//! # Chords
//!
//! Static open-position and power-chord shapes, plus the per-string chord
//! shorthand (`"0 2 2 2 0 -"`).
//!
//! Shapes are for standard guitar tuning, string 0 = high e. Strings that aren't
//! played are simply absent from the shape.

use std::str::FromStr;

use crate::error::TabError;
use crate::note::Note;

/// Named chord shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    A,
    A7,
    Am,
    Am7,
    B7,
    Bm,
    C,
    C7,
    Cmaj7,
    D,
    D7,
    Dm,
    Dm7,
    Dsus2,
    Dsus4,
    E,
    E7,
    Em,
    Em7,
    Esus4,
    F,
    Fmaj7,
    FSharpM,
    G,
    G7,
    Gmaj7,
    Ab,
    B,
    Bm7b5,
    C6,
    CSharpM,
    Dm6,
    E7Jazz,
    F7,
    Fm,
    FSharpM7b5,
    FSharp,
    Gm,
    Gm6,
    G9,
    // power chords
    A5,
    C5,
    D5,
    E5,
    G5,
}

pub const ALL_CHORDS: [Chord; 45] = [
    Chord::A,
    Chord::A7,
    Chord::Am,
    Chord::Am7,
    Chord::B7,
    Chord::Bm,
    Chord::C,
    Chord::C7,
    Chord::Cmaj7,
    Chord::D,
    Chord::D7,
    Chord::Dm,
    Chord::Dm7,
    Chord::Dsus2,
    Chord::Dsus4,
    Chord::E,
    Chord::E7,
    Chord::Em,
    Chord::Em7,
    Chord::Esus4,
    Chord::F,
    Chord::Fmaj7,
    Chord::FSharpM,
    Chord::G,
    Chord::G7,
    Chord::Gmaj7,
    Chord::Ab,
    Chord::B,
    Chord::Bm7b5,
    Chord::C6,
    Chord::CSharpM,
    Chord::Dm6,
    Chord::E7Jazz,
    Chord::F7,
    Chord::Fm,
    Chord::FSharpM7b5,
    Chord::FSharp,
    Chord::Gm,
    Chord::Gm6,
    Chord::G9,
    Chord::A5,
    Chord::C5,
    Chord::D5,
    Chord::E5,
    Chord::G5,
];

impl Chord {
    /// Chord symbol as written on a lead sheet.
    pub fn symbol(self) -> &'static str {
        match self {
            Chord::A => "A",
            Chord::A7 => "A7",
            Chord::Am => "Am",
            Chord::Am7 => "Am7",
            Chord::B7 => "B7",
            Chord::Bm => "Bm",
            Chord::C => "C",
            Chord::C7 => "C7",
            Chord::Cmaj7 => "Cmaj7",
            Chord::D => "D",
            Chord::D7 => "D7",
            Chord::Dm => "Dm",
            Chord::Dm7 => "Dm7",
            Chord::Dsus2 => "Dsus2",
            Chord::Dsus4 => "Dsus4",
            Chord::E => "E",
            Chord::E7 => "E7",
            Chord::Em => "Em",
            Chord::Em7 => "Em7",
            Chord::Esus4 => "Esus4",
            Chord::F => "F",
            Chord::Fmaj7 => "Fmaj7",
            Chord::FSharpM => "F#m",
            Chord::G => "G",
            Chord::G7 => "G7",
            Chord::Gmaj7 => "Gmaj7",
            Chord::Ab => "Ab",
            Chord::B => "B",
            Chord::Bm7b5 => "Bm7b5",
            Chord::C6 => "C6",
            Chord::CSharpM => "C#m",
            Chord::Dm6 => "Dm6",
            Chord::E7Jazz => "E7jazz",
            Chord::F7 => "F7",
            Chord::Fm => "Fm",
            Chord::FSharpM7b5 => "F#m7b5",
            Chord::FSharp => "F#",
            Chord::Gm => "Gm",
            Chord::Gm6 => "Gm6",
            Chord::G9 => "G9",
            Chord::A5 => "A5",
            Chord::C5 => "C5",
            Chord::D5 => "D5",
            Chord::E5 => "E5",
            Chord::G5 => "G5",
        }
    }

    /// (fret, string) pairs, high string first.
    pub fn shape(self) -> &'static [(u32, usize)] {
        match self {
            //   e0 B2 G2 D2 A0
            Chord::A => &[(0, 0), (2, 1), (2, 2), (2, 3), (0, 4)],
            Chord::A7 => &[(0, 0), (2, 1), (0, 2), (2, 3), (0, 4)],
            Chord::Am => &[(0, 0), (1, 1), (2, 2), (2, 3), (0, 4)],
            Chord::Am7 => &[(0, 0), (1, 1), (0, 2), (2, 3), (0, 4)],
            Chord::B7 => &[(2, 0), (0, 1), (2, 2), (1, 3), (2, 4)],
            Chord::Bm => &[(2, 0), (3, 1), (4, 2), (4, 3), (2, 4)],
            Chord::C => &[(0, 0), (1, 1), (0, 2), (2, 3), (3, 4)],
            Chord::C7 => &[(0, 0), (1, 1), (3, 2), (2, 3), (3, 4)],
            Chord::Cmaj7 => &[(0, 0), (0, 1), (0, 2), (2, 3), (3, 4)],
            Chord::D => &[(2, 0), (3, 1), (2, 2), (0, 3)],
            Chord::D7 => &[(2, 0), (1, 1), (2, 2), (0, 3)],
            Chord::Dm => &[(1, 0), (3, 1), (2, 2), (0, 3)],
            Chord::Dm7 => &[(1, 0), (1, 1), (2, 2), (0, 3)],
            Chord::Dsus2 => &[(0, 0), (3, 1), (2, 2), (0, 3)],
            Chord::Dsus4 => &[(3, 0), (3, 1), (2, 2), (0, 3)],
            Chord::E => &[(0, 0), (0, 1), (1, 2), (2, 3), (2, 4), (0, 5)],
            Chord::E7 => &[(0, 0), (0, 1), (1, 2), (0, 3), (2, 4), (0, 5)],
            Chord::Em => &[(0, 0), (0, 1), (0, 2), (2, 3), (2, 4), (0, 5)],
            Chord::Em7 => &[(0, 0), (3, 1), (0, 2), (2, 3), (2, 4), (0, 5)],
            Chord::Esus4 => &[(0, 0), (0, 1), (2, 2), (2, 3), (2, 4), (0, 5)],
            Chord::F => &[(1, 0), (1, 1), (2, 2), (3, 3), (3, 4), (1, 5)],
            Chord::Fmaj7 => &[(0, 0), (1, 1), (2, 2), (3, 3)],
            Chord::FSharpM => &[(2, 0), (2, 1), (2, 2), (4, 3), (4, 4), (2, 5)],
            Chord::G => &[(3, 0), (0, 1), (0, 2), (0, 3), (2, 4), (3, 5)],
            Chord::G7 => &[(1, 0), (0, 1), (0, 2), (0, 3), (2, 4), (3, 5)],
            Chord::Gmaj7 => &[(2, 0), (0, 1), (0, 2), (0, 3), (2, 4), (3, 5)],
            Chord::Ab => &[(1, 0), (1, 1), (2, 2), (3, 3), (0, 4)],
            Chord::B => &[(1, 0), (3, 1), (3, 2), (3, 3), (1, 4), (1, 5)],
            Chord::Bm7b5 => &[(1, 0), (3, 1), (2, 2), (0, 3), (2, 4), (0, 5)],
            Chord::C6 => &[(0, 0), (1, 1), (2, 2), (0, 3), (3, 4)],
            Chord::CSharpM => &[(1, 0), (2, 1), (3, 2), (1, 3), (0, 4)],
            Chord::Dm6 => &[(1, 0), (0, 1), (2, 2), (0, 3)],
            Chord::E7Jazz => &[(0, 0), (2, 1), (3, 2), (1, 3), (0, 4), (0, 5)],
            Chord::F7 => &[(1, 0), (1, 1), (2, 2), (1, 3), (3, 4), (1, 5)],
            Chord::Fm => &[(1, 0), (1, 1), (1, 2), (3, 3), (3, 4), (1, 5)],
            Chord::FSharpM7b5 => &[(2, 0), (2, 1), (2, 2), (1, 3), (0, 4), (0, 5)],
            Chord::FSharp => &[(1, 0), (0, 1), (2, 2), (3, 3), (3, 4), (1, 5)],
            Chord::Gm => &[(1, 0), (1, 1), (1, 2), (3, 3), (3, 4), (1, 5)],
            Chord::Gm6 => &[(0, 0), (3, 1), (3, 2), (0, 3), (0, 4), (3, 5)],
            Chord::G9 => &[(1, 0), (3, 1), (3, 2), (0, 3), (0, 4), (3, 5)],
            Chord::A5 => &[(2, 2), (2, 3), (0, 4)],
            Chord::C5 => &[(5, 2), (5, 3), (3, 4)],
            Chord::D5 => &[(3, 1), (2, 2), (0, 3)],
            Chord::E5 => &[(2, 3), (2, 4), (0, 5)],
            Chord::G5 => &[(5, 3), (5, 4), (3, 5)],
        }
    }

    /// The shape as notes struck together at `time`.
    pub fn notes(self, time: f64) -> Vec<Note> {
        self.shape()
            .iter()
            .map(|&(fret, string)| Note::at(fret, string, time))
            .collect()
    }
}

impl FromStr for Chord {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        ALL_CHORDS
            .iter()
            .copied()
            .find(|chord| chord.symbol() == symbol)
            .ok_or_else(|| TabError::UnknownChord(s.to_string()))
    }
}

/// Parse chord shorthand: one token per string, a fret number or `-` for a
/// string that isn't played.
///
/// Returns an empty Vec when any token is neither, so a malformed chord is
/// never partially played.
///
/// # Example
/// ```
/// use fretwork::parse_chord;
///
/// let power = parse_chord("- - - 2 2 0", 0.0);
/// assert_eq!(power.len(), 3);
/// assert_eq!((power[0].fret, power[0].string), (2, 3));
///
/// assert!(parse_chord("a b c 1 2 3", 0.0).is_empty());
/// ```
pub fn parse_chord(shorthand: &str, time: f64) -> Vec<Note> {
    let mut notes = Vec::new();

    for (string, token) in shorthand.split_whitespace().enumerate() {
        if token == "-" {
            continue;
        }
        match token.parse::<u32>() {
            Ok(fret) => notes.push(Note::at(fret, string, time)),
            Err(_) => return Vec::new(),
        }
    }

    notes
}
