//! # Tunings
//!
//! Parses tuning specifications like `"E4 B3 G3 D3 A2 E2"` into open-string notes.
//!
//! Tokens are listed highest string first, so the first token becomes string 0.
//! Each token is a note name (any spelling [`normalize`](crate::note::normalize)
//! accepts) followed by a single octave digit.

use std::ops::Deref;

use crate::error::TabError;
use crate::note::{normalize, Note};

/// Standard six-string guitar tuning.
pub const STANDARD_TUNING: &str = "E4 B3 G3 D3 A2 E2";

/// Standard four-string bass tuning.
pub const STANDARD_BASS_TUNING: &str = "G2 D2 A1 E1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Guitar,
    Bass,
}

impl Instrument {
    pub fn string_count(self) -> usize {
        match self {
            Instrument::Guitar => 6,
            Instrument::Bass => 4,
        }
    }

    pub fn standard_tuning(self) -> &'static str {
        match self {
            Instrument::Guitar => STANDARD_TUNING,
            Instrument::Bass => STANDARD_BASS_TUNING,
        }
    }
}

/// Open-string notes, one per string, all at fret 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    notes: Vec<Note>,
}

impl Tuning {
    /// Parse a whitespace-separated tuning specification.
    ///
    /// # Example
    /// ```
    /// use fretwork::Tuning;
    /// use fretwork::note::PitchClass;
    ///
    /// let tuning = Tuning::parse("Gb4 Db4 Ab3 Eb3 Bb2 Gb2").unwrap();
    /// assert_eq!(tuning[0].name, PitchClass::FSharp);
    /// assert_eq!(tuning[5].octave, 2);
    /// ```
    pub fn parse(spec: &str) -> Result<Self, TabError> {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(TabError::EmptyInput);
        }

        let notes = tokens
            .iter()
            .enumerate()
            .map(|(string, token)| parse_token(token, string))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { notes })
    }

    /// Parse a tuning and check it has one note per string of `instrument`.
    pub fn for_instrument(spec: &str, instrument: Instrument) -> Result<Self, TabError> {
        let tuning = Self::parse(spec)?;
        if tuning.len() != instrument.string_count() {
            return Err(TabError::TuningMismatch {
                expected: instrument.string_count(),
                found: tuning.len(),
            });
        }
        Ok(tuning)
    }

    pub fn standard(instrument: Instrument) -> Self {
        // The built-in specs only use canonical names and single-digit octaves.
        let notes = instrument
            .standard_tuning()
            .split_whitespace()
            .enumerate()
            .filter_map(|(string, token)| parse_token(token, string).ok())
            .collect();
        Self { notes }
    }

    /// Line labels for the tab, top string first. String 0 is lower-cased
    /// so the two E strings of a guitar read `e` and `E`.
    pub fn labels(&self) -> Vec<String> {
        self.notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                if i == 0 {
                    note.name.as_str().to_lowercase()
                } else {
                    note.name.as_str().to_string()
                }
            })
            .collect()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl Deref for Tuning {
    type Target = [Note];

    fn deref(&self) -> &Self::Target {
        &self.notes
    }
}

/// Parse one `NameOctave` token into an open-string note.
/// Parse exactly one `NameOctave` pitch such as `C#3` or `Eb4`.
///
/// ```
/// use fretwork::note::PitchClass;
/// use fretwork::tuning::parse_pitch;
///
/// let note = parse_pitch("Eb4").unwrap();
/// assert_eq!((note.name, note.octave), (PitchClass::DSharp, 4));
/// assert!(parse_pitch("C#3 E3").is_err());
/// ```
pub fn parse_pitch(token: &str) -> Result<Note, TabError> {
    let mut tokens = token.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(single), None) => parse_token(single, 0),
        (None, _) => Err(TabError::EmptyInput),
        (Some(_), Some(_)) => Err(TabError::InvalidNoteName(token.to_string())),
    }
}

fn parse_token(token: &str, string: usize) -> Result<Note, TabError> {
    let (split, last) = token
        .char_indices()
        .last()
        .ok_or(TabError::EmptyInput)?;

    let octave = last
        .to_digit(10)
        .ok_or_else(|| TabError::InvalidOctave(token.to_string()))?;
    let name = normalize(&token[..split])?;

    Ok(Note {
        name,
        octave: octave as i32,
        string,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::PitchClass;

    fn names_and_octaves(tuning: &Tuning) -> Vec<(&'static str, i32)> {
        tuning.iter().map(|n| (n.name.as_str(), n.octave)).collect()
    }

    #[test]
    fn test_parse_standard_tuning() {
        let tuning = Tuning::parse(STANDARD_TUNING).unwrap();
        assert_eq!(
            names_and_octaves(&tuning),
            vec![("E", 4), ("B", 3), ("G", 3), ("D", 3), ("A", 2), ("E", 2)]
        );
        for (i, note) in tuning.iter().enumerate() {
            assert_eq!(note.string, i);
            assert_eq!(note.fret, 0, "Fret should be 0 for open string");
        }
    }

    #[test]
    fn test_parse_sharps() {
        let tuning = Tuning::parse("F#4 C#4 G#3 D#3 A#2 F#2").unwrap();
        assert_eq!(
            names_and_octaves(&tuning),
            vec![("F#", 4), ("C#", 4), ("G#", 3), ("D#", 3), ("A#", 2), ("F#", 2)]
        );
    }

    #[test]
    fn test_parse_flats_normalizes_to_sharps() {
        let tuning = Tuning::parse("Gb4 Db4 Ab3 Eb3 Bb2 Gb2").unwrap();
        assert_eq!(
            names_and_octaves(&tuning),
            vec![("F#", 4), ("C#", 4), ("G#", 3), ("D#", 3), ("A#", 2), ("F#", 2)]
        );
    }

    #[test]
    fn test_parse_unicode_glyphs() {
        let tuning = Tuning::parse("E♭4 B♭3 G♭3 D♭3 A♭2 E♭2").unwrap();
        assert_eq!(tuning[0].name, PitchClass::DSharp);
        assert_eq!(tuning[3].name, PitchClass::CSharp);
        assert_eq!(tuning[5].octave, 2);
    }

    #[test]
    fn test_parse_bass_tuning() {
        let tuning = Tuning::parse("G2 D2 A1 E1").unwrap();
        assert_eq!(tuning.len(), 4);
        assert_eq!(tuning[3].name, PitchClass::E);
        assert_eq!(tuning[3].octave, 1);
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            ("", TabError::EmptyInput),
            ("   ", TabError::EmptyInput),
            ("EX B3 G3 D3 A2 E2", TabError::InvalidOctave("EX".to_string())),
            ("E B3 G3 D3 A2 E2", TabError::InvalidOctave("E".to_string())),
            ("H4 B3 G3 D3 A2 E2", TabError::InvalidNoteName("H".to_string())),
            ("F##4 B3 G3 D3 A2 E2", TabError::InvalidNoteName("F##".to_string())),
            ("4 B3", TabError::InvalidNoteName("".to_string())),
        ];
        for (input, expected) in cases {
            assert_eq!(Tuning::parse(input), Err(expected), "parsing {:?}", input);
        }
    }

    #[test]
    fn test_parse_pitch_takes_one_token() {
        let note = parse_pitch(" C#3 ").unwrap();
        assert_eq!((note.name, note.octave), (PitchClass::CSharp, 3));

        assert_eq!(
            parse_pitch("C#3 E3"),
            Err(TabError::InvalidNoteName("C#3 E3".to_string()))
        );
        assert_eq!(parse_pitch("  "), Err(TabError::EmptyInput));
        assert_eq!(parse_pitch("C#"), Err(TabError::InvalidOctave("C#".to_string())));
    }

    #[test]
    fn test_for_instrument_checks_string_count() {
        assert!(Tuning::for_instrument(STANDARD_TUNING, Instrument::Guitar).is_ok());
        assert_eq!(
            Tuning::for_instrument("G2 D2 A1 E1", Instrument::Guitar),
            Err(TabError::TuningMismatch { expected: 6, found: 4 })
        );
    }

    #[test]
    fn test_standard_tunings() {
        assert_eq!(
            Tuning::standard(Instrument::Guitar),
            Tuning::parse(STANDARD_TUNING).unwrap()
        );
        assert_eq!(Tuning::standard(Instrument::Bass).len(), 4);
    }

    #[test]
    fn test_labels_lowercase_top_string() {
        let tuning = Tuning::standard(Instrument::Guitar);
        assert_eq!(tuning.labels(), vec!["e", "B", "G", "D", "A", "E"]);
    }
}
