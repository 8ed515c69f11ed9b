//! # fretwork
//!
//! ASCII guitar tablature from timed note and technique events, plus a
//! fretboard model that finds where a pitch can be played.
//!
//! ## Pipeline
//! 1. Parse a tuning (`"E4 B3 G3 D3 A2 E2"`) into open-string notes
//! 2. Build events: fretted notes, chord shapes, slides, hammer-ons, pull-offs,
//!    harmonics, or pitches placed through the [`Fretboard`]
//! 3. Write them to a [`TabWriter`] group by group
//! 4. Read back the aligned tab text
//!
//! ## Example
//! ```rust
//! use fretwork::{parse_chord, Slide, TabSettings, TabWriter, Tuning, STANDARD_TUNING};
//!
//! let tuning = Tuning::parse(STANDARD_TUNING)?;
//! let mut tab = TabWriter::for_tuning(&tuning, TabSettings::default())?;
//!
//! tab.write_group(&parse_chord("0 1 2 2 0 -", 0.0))?;
//! tab.write_single(&Slide { from: Some(5), to: 7, string: 2, time: 0.4 })?;
//!
//! assert_eq!(
//!     tab.tab(),
//!     "e|0------\nB|1------\nG|2--5/7-\nD|2------\nA|0------\nE|-------\n"
//! );
//! # Ok::<(), fretwork::TabError>(())
//! ```

pub mod chords;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod playable;
pub mod song;
pub mod tab;
pub mod tuning;

use std::fs;
use std::path::Path;

pub use chords::{parse_chord, Chord};
pub use error::{ErrorKind, TabError};
pub use fretboard::Fretboard;
pub use note::{closest_to, Note, PitchClass};
pub use playable::{Event, HammerOn, Harmonic, Playable, PullOff, Slide};
pub use song::Song;
pub use tab::{TabSettings, TabWriter, DEFAULT_TIME_STEP};
pub use tuning::{Instrument, Tuning, STANDARD_BASS_TUNING, STANDARD_TUNING};

/// Render a YAML song document to tab text.
///
/// ```rust
/// let source = r#"
/// title: Riff
/// groups:
///   - time: 0
///     chord: E5
///   - time: 0.2
///     events:
///       - { kind: hammer-on, from: 0, to: 2, string: 3 }
/// "#;
///
/// let tab = fretwork::render_song(source)?;
/// assert_eq!(
///     tab,
///     "Riff\ne|------\nB|------\nG|------\nD|2-0h2-\nA|2-----\nE|0-----\n"
/// );
/// # Ok::<(), fretwork::TabError>(())
/// ```
pub fn render_song(source: &str) -> Result<String, TabError> {
    Song::parse(source)?.render()
}

/// Read a song file and render it.
pub fn render_file(path: impl AsRef<Path>) -> Result<String, TabError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|e| TabError::SongError(format!("{}: {}", path.display(), e)))?;
    render_song(&source)
}
