use std::env;
use std::fs;
use std::process;

use fretwork::tuning::parse_pitch;
use fretwork::{Fretboard, Instrument, Note, Tuning};

const USAGE: &str = "Usage: fretwork <song.yaml> [output.txt]
       fretwork --find <NoteOctave> [--frets N]";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    if args[1] == "--find" {
        find(&args[2..]);
        return;
    }

    let input_path = &args[1];
    let output_path = args.get(2);

    let tab = match fretwork::render_file(input_path) {
        Ok(tab) => tab,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &tab) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            log::info!("wrote tab to {}", path);
        }
        None => print!("{}", tab),
    }
}

/// `--find C#3 [--frets 12]`: list every standard-tuning position of a pitch.
fn find(args: &[String]) {
    let (pitch, frets) = match find_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(1);
        }
    };

    let result = Fretboard::new(Tuning::standard(Instrument::Guitar), frets)
        .map(|board| board.find_notes(pitch.name, pitch.octave));

    match result {
        Ok(notes) if notes.is_empty() => {
            println!("{}{} is not on the fretboard", pitch.name, pitch.octave)
        }
        Ok(notes) => {
            for note in notes {
                println!("{}", note);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Split `--find` arguments into the pitch and fret count.
fn find_args(args: &[String]) -> Result<(Note, i32), String> {
    let (pitch, rest) = args.split_first().ok_or("--find needs a pitch")?;
    let pitch = parse_pitch(pitch).map_err(|e| format!("Error: {}", e))?;

    let frets = match rest {
        [] => 12,
        [flag, count] if flag == "--frets" => count
            .parse::<i32>()
            .map_err(|_| "--frets needs a number".to_string())?,
        [flag] if flag == "--frets" => return Err("--frets needs a number".to_string()),
        [other, ..] => return Err(format!("Unknown argument '{}'", other)),
    };

    Ok((pitch, frets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fretwork::PitchClass;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_args() {
        let (pitch, frets) = find_args(&args(&["C#3"])).unwrap();
        assert_eq!((pitch.name, pitch.octave, frets), (PitchClass::CSharp, 3, 12));

        let (_, frets) = find_args(&args(&["E2", "--frets", "5"])).unwrap();
        assert_eq!(frets, 5);
    }

    #[test]
    fn test_find_args_rejects_extra_input() {
        assert!(find_args(&args(&["C#3 E3"])).is_err());
        assert!(find_args(&args(&["C#3", "E3"])).is_err());
        assert!(find_args(&args(&["C#3", "--frets", "5", "E3"])).is_err());
        assert!(find_args(&args(&["C#3", "--frets"])).is_err());
        assert!(find_args(&args(&["C#3", "--frets", "five"])).is_err());
        assert!(find_args(&args(&[])).is_err());
    }
}
