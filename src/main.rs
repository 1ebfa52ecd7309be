use std::env;
use std::process;

use lyrsync::{format_clock, sync, LyrError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: lyrsync <lyrics.lrc>            print the parsed transcript as JSON");
        eprintln!("       lyrsync <lyrics.lrc> <seconds>  show the active lyric and scene");
        process::exit(1);
    }

    let transcript = match lyrsync::load_file(&args[1]) {
        Ok(transcript) => transcript,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match args.get(2) {
        Some(raw) => {
            let time: f64 = match raw.parse() {
                Ok(time) => time,
                Err(_) => {
                    eprintln!("Error: {}", LyrError::InvalidTime(raw.clone()));
                    process::exit(1);
                }
            };

            let point = sync(&transcript, time);
            println!("time:  {} ({:.3}s)", format_clock(time), time);
            println!("scene: {}", point.scene);
            match point.index {
                Some(i) => {
                    if let Some(entry) = transcript.get(i) {
                        println!("lyric: #{} {}", i, entry.text);
                    }
                }
                None => println!("lyric: (none yet)"),
            }
        }
        None => {
            let json = match serde_json::to_string_pretty(&transcript) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error serializing transcript: {}", e);
                    process::exit(1);
                }
            };
            println!("{}", json);
        }
    }
}
