//! Integration tests for fretwork
//!
//! Drives the public API end to end: tuning -> events -> tab text.

use std::fs;

use fretwork::{
    parse_chord, render_file, render_song, Chord, ErrorKind, Event, Fretboard, HammerOn,
    Instrument, Note, PitchClass, Slide, TabError, TabSettings, TabWriter, Tuning,
    STANDARD_TUNING,
};

fn standard_tab() -> TabWriter {
    let tuning = Tuning::parse(STANDARD_TUNING).unwrap();
    TabWriter::for_tuning(&tuning, TabSettings::default()).unwrap()
}

#[test]
fn test_scenario_notes_on_three_strings() {
    let mut tab = standard_tab();
    tab.write_group(&[Note::at(0, 5, 0.0)]).unwrap();
    tab.write_group(&[Note::at(1, 1, 0.2)]).unwrap();
    tab.write_group(&[Note::at(3, 2, 0.4)]).unwrap();
    assert_eq!(
        tab.tab(),
        "e|------\nB|--1---\nG|----3-\nD|------\nA|------\nE|0-----\n"
    );
}

#[test]
fn test_chord_then_slide() {
    let tuning = Tuning::parse(STANDARD_TUNING).unwrap();
    let mut tab = TabWriter::new(tuning.len(), &tuning.labels()).unwrap();

    tab.write_group(&parse_chord("0 1 2 2 0 -", 0.0)).unwrap();
    tab.write_single(&Slide { from: Some(5), to: 7, string: 2, time: 0.5 })
        .unwrap();

    let tab = tab.tab();
    assert_eq!(tab.lines().nth(2), Some("G|2--5/7-"));
    assert!(tab.lines().all(|l| l.len() == 9));
}

#[test]
fn test_fretboard_feeds_tab() {
    let tuning = Tuning::standard(Instrument::Guitar);
    let board = Fretboard::new(tuning.clone(), 12).unwrap();
    let mut tab = TabWriter::for_tuning(&tuning, TabSettings::default()).unwrap();

    // Walk up an A minor pentatonic fragment, each note nearest the last
    let melody = [
        (PitchClass::A, 3),
        (PitchClass::C, 4),
        (PitchClass::D, 4),
        (PitchClass::E, 4),
    ];
    let mut previous = Note::at(5, 3, 0.0);
    for (i, (name, octave)) in melody.into_iter().enumerate() {
        let target = Note {
            time: i as f64 * 0.2,
            ..previous.clone()
        };
        let note = board.closest_position(name, octave, &target).unwrap();
        tab.write_single(&note).unwrap();
        previous = note;
    }

    let rendered = tab.tab();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[2], "G|--5-7-9-");
    assert_eq!(lines[3], "D|7-------");
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}

#[test]
fn test_mixed_technique_group() {
    let mut tab = standard_tab();
    let group: Vec<Event> = vec![
        Note::at(10, 3, 0.0).into(),
        HammerOn { from: 7, to: 9, string: 2, time: 0.0 }.into(),
    ];
    tab.write_group(&group).unwrap();
    assert_eq!(
        tab.tab(),
        "e|----\nB|----\nG|7h9-\nD|10--\nA|----\nE|----\n"
    );
}

#[test]
fn test_failed_write_keeps_state() {
    let mut tab = standard_tab();
    tab.write_group(&Chord::Em.notes(0.0)).unwrap();
    let before = tab.tab();

    let err = tab.write_single(&Note::at(3, 6, 0.4)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
    assert_eq!(tab.tab(), before);

    tab.write_single(&Note::at(3, 5, 0.4)).unwrap();
    assert_eq!(tab.tab().lines().last(), Some("E|0--3-"));
}

#[test]
fn test_bass_tab() {
    let tuning = Tuning::for_instrument("G2 D2 A1 E1", Instrument::Bass).unwrap();
    let mut tab = TabWriter::for_tuning(&tuning, TabSettings { time_step: 0.25 }).unwrap();
    tab.write_single(&Note::at(0, 3, 0.0)).unwrap();
    tab.write_single(&Note::at(2, 3, 0.5)).unwrap();
    assert_eq!(tab.tab(), "g|-----\nD|-----\nA|-----\nE|0--2-\n");
}

#[test]
fn test_render_song() {
    let source = r#"
title: Intro
time-step: 0.2
groups:
  - time: 0
    chord: Am
  - time: 0.4
    events:
      - { kind: pull-off, from: 3, to: 0, string: 0 }
  - time: 0.6
    events:
      - { kind: harmonic, fret: 12, string: 5 }
"#;
    let tab = render_song(source).unwrap();
    assert_eq!(
        tab,
        "Intro\n\
         e|0--3p0------\n\
         B|1-----------\n\
         G|2-----------\n\
         D|2-----------\n\
         A|0-----------\n\
         E|-------<12>-\n"
    );
}

#[test]
fn test_render_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("riff.yaml");
    fs::write(
        &path,
        "groups:\n  - time: 0\n    shape: \"- - - 2 2 0\"\n",
    )
    .unwrap();

    let tab = render_file(&path).unwrap();
    assert_eq!(tab, "e|--\nB|--\nG|--\nD|2-\nA|2-\nE|0-\n");
}

#[test]
fn test_render_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = render_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(TabError::SongError(_))));
}
