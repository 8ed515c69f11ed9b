//! # Fretboard
//!
//! Finds every fret/string position that sounds a given pitch.
//!
//! Each open string is walked up the neck one fret at a time with
//! [`Note::advance_fret`], from the open string (fret 0) to the last fret.
//! Results come back in tuning order, frets ascending within a string.

use log::debug;

use crate::error::TabError;
use crate::note::{closest_to, Note, PitchClass};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Tuning,
    frets: u32,
}

impl Fretboard {
    /// A board with `frets` frets above the open strings.
    pub fn new(tuning: Tuning, frets: i32) -> Result<Self, TabError> {
        let frets = u32::try_from(frets).map_err(|_| TabError::InvalidFretCount(frets))?;
        Ok(Self { tuning, frets })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn frets(&self) -> u32 {
        self.frets
    }

    /// Open-string labels for a tab written on this board.
    pub fn tuning_labels(&self) -> Vec<String> {
        self.tuning.labels()
    }

    /// Every position on the board that sounds `name` in `octave`.
    ///
    /// # Example
    /// ```
    /// use fretwork::{Fretboard, Instrument, Tuning};
    /// use fretwork::note::PitchClass;
    ///
    /// let board = Fretboard::new(Tuning::standard(Instrument::Guitar), 12).unwrap();
    /// let found = board.find_notes(PitchClass::CSharp, 3);
    /// let positions: Vec<_> = found.iter().map(|n| (n.string, n.fret)).collect();
    /// assert_eq!(positions, vec![(4, 4), (5, 9)]);
    /// ```
    pub fn find_notes(&self, name: PitchClass, octave: i32) -> Vec<Note> {
        let mut found = Vec::new();

        for open in self.tuning.iter() {
            let mut current = open.clone();
            for step in 0..=self.frets {
                if current.same_pitch(name, octave) {
                    found.push(current.clone());
                }
                if step < self.frets {
                    current = current.advance_fret();
                }
            }
        }

        debug!(
            "found {} positions for {}{} on {} frets",
            found.len(),
            name,
            octave,
            self.frets
        );
        found
    }

    /// The position of `name`/`octave` nearest to `target`, played at the
    /// target's time. Fails with `EmptyCollection` if the pitch isn't on the board.
    pub fn closest_position(
        &self,
        name: PitchClass,
        octave: i32,
        target: &Note,
    ) -> Result<Note, TabError> {
        closest_to(&self.find_notes(name, octave), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{Instrument, STANDARD_TUNING};

    fn guitar(frets: i32) -> Fretboard {
        Fretboard::new(Tuning::parse(STANDARD_TUNING).unwrap(), frets).unwrap()
    }

    fn positions(notes: &[Note]) -> Vec<(usize, u32)> {
        notes.iter().map(|n| (n.string, n.fret)).collect()
    }

    #[test]
    fn test_negative_fret_count() {
        let tuning = Tuning::standard(Instrument::Guitar);
        assert!(matches!(
            Fretboard::new(tuning, -1),
            Err(TabError::InvalidFretCount(-1))
        ));
    }

    #[test]
    fn test_find_open_string() {
        let board = guitar(12);
        assert_eq!(positions(&board.find_notes(PitchClass::E, 2)), vec![(5, 0)]);
    }

    #[test]
    fn test_find_notes_across_strings() {
        let board = guitar(12);
        // E4: open high e, B string fret 5, G string fret 9
        assert_eq!(
            positions(&board.find_notes(PitchClass::E, 4)),
            vec![(0, 0), (1, 5), (2, 9)]
        );
    }

    #[test]
    fn test_find_sharp_notes() {
        let board = guitar(12);
        let found = board.find_notes(PitchClass::CSharp, 3);
        assert_eq!(positions(&found), vec![(4, 4), (5, 9)]);
        assert!(found.iter().all(|n| n.name == PitchClass::CSharp && n.octave == 3));
    }

    #[test]
    fn test_last_fret_is_reachable() {
        // A3 is the 12th fret of the A string
        let board = guitar(12);
        assert!(positions(&board.find_notes(PitchClass::A, 3)).contains(&(4, 12)));
        let short = guitar(11);
        assert!(!positions(&short.find_notes(PitchClass::A, 3)).contains(&(4, 12)));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let board = guitar(12);
        assert!(board.find_notes(PitchClass::C, 1).is_empty());
        assert!(guitar(0).find_notes(PitchClass::F, 2).is_empty());
    }

    #[test]
    fn test_closest_position() {
        let board = guitar(12);
        let target = Note::at(3, 3, 0.8);
        // G3: open G string ties with D string fret 5, first string wins
        let note = board.closest_position(PitchClass::G, 3, &target).unwrap();
        assert_eq!((note.string, note.fret, note.time), (2, 0, 0.8));

        assert_eq!(
            board.closest_position(PitchClass::C, 1, &target),
            Err(TabError::EmptyCollection)
        );
    }
}
