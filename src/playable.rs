//! # Playable Events
//!
//! Anything that can occupy a column of the tab: a plain fretted note or one of
//! the playing techniques.
//!
//! ## Symbols
//! ```text
//! Note       7        fret number
//! Slide      5/7      start/end, or /7 when sliding in from nowhere
//! HammerOn   2h4
//! PullOff    4p2
//! Harmonic   <12>
//! ```
//!
//! The tab writer only sees the [`Playable`] trait, so it is agnostic to the
//! concrete variant. [`Event`] closes the set of variants so a group of mixed
//! techniques can be written in one call.

use crate::note::Note;

/// What the tab writer needs from an event.
pub trait Playable {
    /// Text written into the event's string line.
    fn symbol(&self) -> String;
    /// Target string, 0 = highest-pitched.
    fn string_index(&self) -> usize;
    fn start_time(&self) -> f64;
}

impl Playable for Note {
    fn symbol(&self) -> String {
        self.fret.to_string()
    }

    fn string_index(&self) -> usize {
        self.string
    }

    fn start_time(&self) -> f64 {
        self.time
    }
}

/// Slide between two frets. `from: None` slides in from an unspecified fret.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub from: Option<u32>,
    pub to: u32,
    pub string: usize,
    pub time: f64,
}

impl Playable for Slide {
    fn symbol(&self) -> String {
        match self.from {
            Some(from) => format!("{}/{}", from, self.to),
            None => format!("/{}", self.to),
        }
    }

    fn string_index(&self) -> usize {
        self.string
    }

    fn start_time(&self) -> f64 {
        self.time
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HammerOn {
    pub from: u32,
    pub to: u32,
    pub string: usize,
    pub time: f64,
}

impl Playable for HammerOn {
    fn symbol(&self) -> String {
        format!("{}h{}", self.from, self.to)
    }

    fn string_index(&self) -> usize {
        self.string
    }

    fn start_time(&self) -> f64 {
        self.time
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullOff {
    pub from: u32,
    pub to: u32,
    pub string: usize,
    pub time: f64,
}

impl Playable for PullOff {
    fn symbol(&self) -> String {
        format!("{}p{}", self.from, self.to)
    }

    fn string_index(&self) -> usize {
        self.string
    }

    fn start_time(&self) -> f64 {
        self.time
    }
}

/// Natural harmonic, written with angle brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct Harmonic {
    pub fret: u32,
    pub string: usize,
    pub time: f64,
}

impl Playable for Harmonic {
    fn symbol(&self) -> String {
        format!("<{}>", self.fret)
    }

    fn string_index(&self) -> usize {
        self.string
    }

    fn start_time(&self) -> f64 {
        self.time
    }
}

/// Closed set of everything the tab can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Note(Note),
    Slide(Slide),
    HammerOn(HammerOn),
    PullOff(PullOff),
    Harmonic(Harmonic),
}

impl Event {
    fn as_playable(&self) -> &dyn Playable {
        match self {
            Event::Note(n) => n,
            Event::Slide(s) => s,
            Event::HammerOn(h) => h,
            Event::PullOff(p) => p,
            Event::Harmonic(h) => h,
        }
    }
}

impl Playable for Event {
    fn symbol(&self) -> String {
        self.as_playable().symbol()
    }

    fn string_index(&self) -> usize {
        self.as_playable().string_index()
    }

    fn start_time(&self) -> f64 {
        self.as_playable().start_time()
    }
}

impl From<Note> for Event {
    fn from(note: Note) -> Self {
        Event::Note(note)
    }
}

impl From<Slide> for Event {
    fn from(slide: Slide) -> Self {
        Event::Slide(slide)
    }
}

impl From<HammerOn> for Event {
    fn from(hammer_on: HammerOn) -> Self {
        Event::HammerOn(hammer_on)
    }
}

impl From<PullOff> for Event {
    fn from(pull_off: PullOff) -> Self {
        Event::PullOff(pull_off)
    }
}

impl From<Harmonic> for Event {
    fn from(harmonic: Harmonic) -> Self {
        Event::Harmonic(harmonic)
    }
}
